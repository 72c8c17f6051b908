//! Core library modules for the fourps application.
//!
//! ## Features
//!
//! - **Services**: Registration and login, program/participation/attendance flows
//! - **Core Infrastructure**: Configuration, data storage, error taxonomy, messaging
//! - **User Interface**: Input parsing and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fourps::db::db::Db;
//! use fourps::libs::records::{ParticipationForm, RecordService};
//!
//! let db = Db::open("4psDB.db")?;
//! let records = RecordService::new(&db);
//! records.record_participation(&ParticipationForm {
//!     user_id: "5".into(),
//!     program_id: "2".into(),
//!     meetings_attended: "4".into(),
//!     amount_received: "1500.00".into(),
//! })?;
//! # Ok::<(), fourps::libs::error::AppError>(())
//! ```

pub mod auth;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod hasher;
pub mod input;
pub mod messages;
pub mod records;
pub mod session;
pub mod view;
