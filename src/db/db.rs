//! Database access gateway.
//!
//! [`Db`] owns the one SQLite connection the application uses. Everything that
//! touches the database goes through [`Db::execute`], [`Db::query`] or
//! [`Db::next_id`], which bind typed parameters, check parameter counts, and
//! translate engine failures into [`AppError`] kinds. Nothing here prints.

use super::param::SqlParam;
use super::result_set::ResultSet;
use super::schema;
use crate::libs::error::{AppError, AppResult};
use rusqlite::types::Value;
use rusqlite::{ffi, params_from_iter, Connection, ErrorCode};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DB_FILE_NAME: &str = "4psDB.db";

pub struct Db {
    path: PathBuf,
    conn: Option<Connection>,
    enforce_foreign_keys: bool,
}

impl Db {
    /// Gateway for `path`; nothing is opened until [`Db::connect`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
            enforce_foreign_keys: false,
        }
    }

    /// Opens `path` right away.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let mut db = Self::new(path);
        db.connect()?;
        Ok(db)
    }

    /// SQLite leaves foreign keys unenforced unless asked; the setting is
    /// applied on the next [`Db::connect`].
    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Opens the connection and creates missing tables. A no-op when already
    /// connected.
    pub fn connect(&mut self) -> AppResult<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = Connection::open(&self.path).map_err(|e| AppError::Connection(format!("{}: {}", self.path.display(), e)))?;
        conn.pragma_update(None, "foreign_keys", self.enforce_foreign_keys)
            .map_err(|e| AppError::Connection(e.to_string()))?;
        schema::create_tables(&conn).map_err(|e| AppError::Connection(e.to_string()))?;

        info!(path = %self.path.display(), foreign_keys = self.enforce_foreign_keys, "database connection established");
        self.conn = Some(conn);
        Ok(())
    }

    /// Releases the connection. Safe to call repeatedly or before connecting.
    pub fn close(&mut self) -> AppResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| AppError::Connection(e.to_string()))?;
            info!(path = %self.path.display(), "database connection closed");
        }
        Ok(())
    }

    /// Runs an INSERT, UPDATE or DELETE and returns the affected row count.
    pub fn execute(&self, statement: &str, params: &[SqlParam]) -> AppResult<usize> {
        let conn = self.conn()?;
        debug!(statement, params = ?params, "execute");

        let mut stmt = conn.prepare(statement).map_err(|e| classify(e, statement))?;
        check_parameter_count(statement, stmt.parameter_count(), params.len())?;

        let affected = stmt.execute(params_from_iter(params.iter())).map_err(|e| classify(e, statement))?;
        if affected == 0 {
            debug!(statement, "statement affected no rows");
        }
        Ok(affected)
    }

    /// Runs a SELECT and collects every row.
    ///
    /// The prepared statement is finalized before this returns, on success and
    /// on every error path alike.
    pub fn query(&self, statement: &str, params: &[SqlParam]) -> AppResult<ResultSet> {
        let conn = self.conn()?;
        debug!(statement, params = ?params, "query");

        let mut stmt = conn.prepare(statement).map_err(|e| classify(e, statement))?;
        check_parameter_count(statement, stmt.parameter_count(), params.len())?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let mut rows = stmt.query(params_from_iter(params.iter())).map_err(|e| classify(e, statement))?;

        let mut data = Vec::new();
        while let Some(row) = rows.next().map_err(|e| classify(e, statement))? {
            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                values.push(row.get::<_, Value>(index).map_err(|e| classify(e, statement))?);
            }
            data.push(values);
        }

        Ok(ResultSet::new(columns, data))
    }

    /// True when `statement` returns at least one row.
    pub fn exists(&self, statement: &str, params: &[SqlParam]) -> AppResult<bool> {
        Ok(!self.query(statement, params)?.is_empty())
    }

    /// `max(id_column) + 1` over `table`, or 1 when the table is empty.
    ///
    /// The id is not reserved: another insert between this call and the caller's
    /// own insert would get the same value.
    pub fn next_id(&self, table: &str, id_column: &str) -> AppResult<i64> {
        validate_identifier(table)?;
        validate_identifier(id_column)?;

        let statement = format!("SELECT MAX(\"{}\") AS max_id FROM \"{}\"", id_column, table);
        let result = self.query(&statement, &[])?;
        let max_id = result.first().and_then(|row| row.get_optional_i64("max_id"));

        match max_id {
            None => Ok(1),
            Some(max_id) => max_id.checked_add(1).ok_or_else(|| AppError::Statement {
                statement,
                message: format!("{}.{} has reached the largest id", table, id_column),
            }),
        }
    }

    fn conn(&self) -> AppResult<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| AppError::Connection(format!("not connected to {}", self.path.display())))
    }
}

/// Maps a rusqlite failure onto an [`AppError`] kind.
///
/// Structured result codes are used first; the message text is only inspected
/// when the engine gave no usable code.
pub fn classify(err: rusqlite::Error, statement: &str) -> AppError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(failure, message) => {
            let detail = message.clone().unwrap_or_else(|| failure.to_string());
            match failure.code {
                ErrorCode::ConstraintViolation => match failure.extended_code {
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => AppError::DuplicateKey(detail),
                    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => AppError::ForeignKey(detail),
                    _ => classify_message(detail, statement),
                },
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => AppError::Busy(detail),
                _ => classify_message(detail, statement),
            }
        }
        other => classify_message(other.to_string(), statement),
    };

    warn!(statement, error = %kind, "statement failed");
    kind
}

fn classify_message(message: String, statement: &str) -> AppError {
    if message.contains("UNIQUE constraint failed") {
        AppError::DuplicateKey(message)
    } else if message.contains("FOREIGN KEY constraint failed") {
        AppError::ForeignKey(message)
    } else if message.contains("SQLITE_BUSY") || message.contains("database is locked") {
        AppError::Busy(message)
    } else {
        AppError::Statement {
            statement: statement.to_string(),
            message,
        }
    }
}

fn check_parameter_count(statement: &str, expected: usize, given: usize) -> AppResult<()> {
    if expected != given {
        return Err(AppError::ParameterCount {
            statement: statement.to_string(),
            expected,
            given,
        });
    }
    Ok(())
}

fn validate_identifier(identifier: &str) -> AppResult<()> {
    let valid = !identifier.is_empty()
        && identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !identifier.starts_with(|c: char| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidIdentifier(identifier.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: i32, message: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), Some(message.to_string()))
    }

    #[test]
    fn test_classify_structured_codes() {
        let err = classify(failure(ffi::SQLITE_CONSTRAINT_UNIQUE, "UNIQUE constraint failed: user.email"), "INSERT");
        assert!(matches!(err, AppError::DuplicateKey(_)));

        let err = classify(failure(ffi::SQLITE_CONSTRAINT_FOREIGNKEY, "FOREIGN KEY constraint failed"), "INSERT");
        assert!(matches!(err, AppError::ForeignKey(_)));

        let err = classify(failure(ffi::SQLITE_BUSY, "database is locked"), "DELETE");
        assert!(matches!(err, AppError::Busy(_)));
    }

    #[test]
    fn test_classify_falls_back_to_message() {
        let err = classify(rusqlite::Error::InvalidQuery, "SELECT 1");
        assert!(matches!(err, AppError::Statement { .. }));

        let err = classify_message("[SQLITE_BUSY] The database file is locked".to_string(), "UPDATE");
        assert!(matches!(err, AppError::Busy(_)));
    }

    #[test]
    fn test_statement_error_keeps_statement_text() {
        let err = classify(failure(ffi::SQLITE_ERROR, "no such table: nothing"), "SELECT * FROM nothing");
        match err {
            AppError::Statement { statement, message } => {
                assert_eq!(statement, "SELECT * FROM nothing");
                assert!(message.contains("no such table"));
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("program_id").is_ok());
        assert!(validate_identifier("user").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("1table").is_err());
        assert!(validate_identifier("user; DROP TABLE user").is_err());
    }
}
