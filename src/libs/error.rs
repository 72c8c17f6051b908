//! Error taxonomy shared by the database gateway and the services built on it.
//!
//! Every failure that can reach the console loop is one of these kinds. The
//! gateway turns raw SQLite failures into them (see [`crate::db::db::classify`]),
//! and the services add the pre-check kinds (`DuplicateEmail`, `NotFound`,
//! `InvalidInput`). All of them are recoverable: the operation that produced
//! one left the database as it was.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The database file could not be opened, or no connection is open.
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Any statement failure that is not one of the classified kinds below.
    #[error("SQL error ({statement}): {message}")]
    Statement { statement: String, message: String },

    /// A unique constraint or a pre-check found an existing row for the key.
    #[error("A record with the same key already exists: {0}")]
    DuplicateKey(String),

    /// Registration attempted with an email that is already taken.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Foreign key constraint failed: {0}")]
    ForeignKey(String),

    /// The database file is locked by another statement or process.
    #[error("Database is busy: {0}")]
    Busy(String),

    /// Update or delete target does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Free-text input could not be parsed into the expected type.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    /// Statement placeholders and supplied parameters disagree.
    #[error("Statement expects {expected} parameters, {given} given ({statement})")]
    ParameterCount { statement: String, expected: usize, given: usize },

    /// Table or column names for id generation must be plain identifiers.
    #[error("Invalid SQL identifier: {0}")]
    InvalidIdentifier(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
