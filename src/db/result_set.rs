//! Materialized query results.
//!
//! The gateway steps the SQLite cursor to completion and finalizes the
//! statement before handing back a [`ResultSet`], so a caller can never hold an
//! open read cursor while it issues the next write.

use crate::libs::error::{AppError, AppResult};
use rusqlite::types::Value;

#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Borrowed view over one row with access by column label.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<Row<'_>> {
        self.rows().next()
    }

    /// Rows in the order the engine produced them.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            columns: &self.columns,
            values,
        })
    }
}

impl<'a> Row<'a> {
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    pub fn value(&self, column: &str) -> Option<&'a Value> {
        self.columns.iter().position(|name| name.eq_ignore_ascii_case(column)).and_then(|index| self.values.get(index))
    }

    pub fn get_i64(&self, column: &str) -> AppResult<i64> {
        match self.value(column) {
            Some(Value::Integer(value)) => Ok(*value),
            other => Err(decode_error(column, "integer", other)),
        }
    }

    /// Integer values are widened.
    pub fn get_f64(&self, column: &str) -> AppResult<f64> {
        match self.value(column) {
            Some(Value::Real(value)) => Ok(*value),
            Some(Value::Integer(value)) => Ok(*value as f64),
            other => Err(decode_error(column, "decimal", other)),
        }
    }

    pub fn get_string(&self, column: &str) -> AppResult<String> {
        match self.value(column) {
            Some(Value::Text(value)) => Ok(value.clone()),
            Some(Value::Null) => Ok(String::new()),
            other => Err(decode_error(column, "text", other)),
        }
    }

    /// `None` when the column is absent or NULL.
    pub fn get_optional_i64(&self, column: &str) -> Option<i64> {
        match self.value(column) {
            Some(Value::Integer(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Text rendering used by the table view.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(value) => value.to_string(),
        Value::Real(value) if value.fract() == 0.0 => format!("{:.1}", value),
        Value::Real(value) => value.to_string(),
        Value::Text(value) => value.clone(),
        Value::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

fn decode_error(column: &str, expected: &str, found: Option<&Value>) -> AppError {
    let message = match found {
        Some(value) => format!("column '{}' is not {}: {:?}", column, expected, value),
        None => format!("column '{}' missing from result", column),
    };
    AppError::Statement {
        statement: "<row decode>".to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        ResultSet::new(
            vec!["user_id".to_string(), "amount_received".to_string(), "name".to_string()],
            vec![vec![Value::Integer(5), Value::Integer(1500), Value::Text("Ana".to_string())]],
        )
    }

    #[test]
    fn test_row_lookup_by_label() {
        let result = sample();
        let row = result.first().unwrap();
        assert_eq!(row.get_i64("user_id").unwrap(), 5);
        assert_eq!(row.get_f64("amount_received").unwrap(), 1500.0);
        assert_eq!(row.get_string("NAME").unwrap(), "Ana");
        assert!(row.get_i64("missing").is_err());
    }

    #[test]
    fn test_short_row_has_no_value() {
        let result = ResultSet::new(vec!["user_id".to_string(), "name".to_string()], vec![vec![Value::Integer(5)]]);
        let row = result.first().unwrap();
        assert_eq!(row.get_i64("user_id").unwrap(), 5);
        assert!(row.value("name").is_none());
        assert!(row.get_string("name").is_err());
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Real(1500.0)), "1500.0");
        assert_eq!(display_value(&Value::Real(12.75)), "12.75");
        assert_eq!(display_value(&Value::Null), "NULL");
    }
}
