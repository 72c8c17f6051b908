//! # fourps - 4Ps Educational Monitoring System
//!
//! A console utility for keeping beneficiary records of the 4Ps assistance
//! program in a local SQLite file.
//!
//! ## Features
//!
//! - **Accounts**: Registration and login with SHA-256 password digests
//! - **Programs**: Add, update and delete assistance programs
//! - **Participation**: Meetings attended and amount received per user and program
//! - **Attendance**: Dated meeting attendance
//! - **Listings**: Any table rendered with its column labels
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fourps::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
