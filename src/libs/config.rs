//! Application configuration.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file means defaults; unknown or missing keys in
//! an existing file fall back to their defaults as well.
//!
//! ```rust,no_run
//! use fourps::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db = config.open_db(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::session::MAX_LOGIN_ATTEMPTS;
use crate::db::db::{Db, DB_FILE_NAME};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file. Relative names resolve inside the data directory.
    pub database: String,

    /// Failed logins allowed before the program ends.
    pub max_login_attempts: u32,

    /// Turns on SQLite foreign key enforcement. Off by default, which lets
    /// attendance and participation reference ids that have no row yet.
    pub enforce_foreign_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: DB_FILE_NAME.to_string(),
            max_login_attempts: MAX_LOGIN_ATTEMPTS,
            enforce_foreign_keys: false,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves [`Config::database`] against `storage`.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        let database = Path::new(&self.database);
        if database.is_absolute() {
            return Ok(database.to_path_buf());
        }
        storage.get_path(&self.database)
    }

    /// Connects to the configured database, or to `override_path` when given.
    pub fn open_db(&self, override_path: Option<PathBuf>) -> Result<Db> {
        let path = match override_path {
            Some(path) => path,
            None => self.database_path(&DataStorage::new())?,
        };

        let mut db = Db::new(path).with_foreign_keys(self.enforce_foreign_keys);
        db.connect()?;
        Ok(db)
    }

    /// Interactive setup, starting from the current settings.
    pub fn init() -> Result<Self> {
        let default = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigHeader, true);

        let config = Config {
            database: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabaseFile.to_string())
                .default(default.database)
                .interact_text()?,
            max_login_attempts: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMaxLoginAttempts.to_string())
                .default(default.max_login_attempts)
                .validate_with(|value: &u32| if *value > 0 { Ok(()) } else { Err("must be at least 1") })
                .interact_text()?,
            enforce_foreign_keys: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEnforceForeignKeys.to_string())
                .default(default.enforce_foreign_keys)
                .interact()?,
        };

        Ok(config)
    }
}
