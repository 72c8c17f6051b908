//! Database layer for the fourps application.
//!
//! A single SQLite file holds four tables: `user`, `program`, `participation`
//! and `attendance`. [`db::Db`] is the gateway that owns the connection; the
//! entity modules hold the SQL for one table each and map rows to typed
//! structs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fourps::db::db::Db;
//! use fourps::db::programs::{Program, Programs};
//!
//! let db = Db::open("4psDB.db")?;
//! let programs = Programs::new(&db);
//! let id = programs.next_id()?;
//! programs.insert(&Program::new(id, "Family Development Session", "Monthly seminar"))?;
//! # Ok::<(), fourps::libs::error::AppError>(())
//! ```
//!
//! ## Identifiers
//!
//! User, program and attendance ids are assigned by the application as
//! `max(id) + 1` through [`db::Db::next_id`], not by SQLite. Two processes
//! creating rows at the same moment could pick the same id; the application is
//! single-user, so this is accepted.

/// Connection ownership, statement execution and error classification.
pub mod db;

/// Typed statement parameters and the `sql_params!` macro.
pub mod param;

/// Fully-read query results with access by column label.
pub mod result_set;

/// Table definitions created on connect.
pub mod schema;

/// Beneficiary accounts.
pub mod users;

/// Assistance programs.
pub mod programs;

/// Per-user program participation, keyed by (user id, program id).
pub mod participation;

/// Meeting attendance log.
pub mod attendance;
