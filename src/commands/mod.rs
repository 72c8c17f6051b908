pub mod auth;
pub mod init;
pub mod menu;
pub mod prompt;
pub mod records;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Start the interactive menu (default)")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command.unwrap_or(Commands::Menu) {
            Commands::Init => init::cmd(),
            Commands::Menu => menu::cmd(cli.db),
        }
    }
}
