//! Typed statement parameters.
//!
//! Every value bound to a statement goes through [`SqlParam`], so binding is
//! exhaustive over the four kinds of data the application stores and the
//! gateway can count parameters before the engine sees them.

use chrono::NaiveDate;
use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Integer(i64),
    Text(String),
    Decimal(f64),
    /// Stored as `YYYY-MM-DD` text.
    Date(NaiveDate),
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::Integer(value) => ToSqlOutput::Owned(Value::Integer(*value)),
            SqlParam::Text(value) => ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes())),
            SqlParam::Decimal(value) => ToSqlOutput::Owned(Value::Real(*value)),
            SqlParam::Date(value) => ToSqlOutput::Owned(Value::Text(value.format(DATE_FORMAT).to_string())),
        })
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Integer(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Integer(value.into())
    }
}

impl From<u32> for SqlParam {
    fn from(value: u32) -> Self {
        SqlParam::Integer(value.into())
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        SqlParam::Decimal(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_owned())
    }
}

impl From<&String> for SqlParam {
    fn from(value: &String) -> Self {
        SqlParam::Text(value.clone())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(value: NaiveDate) -> Self {
        SqlParam::Date(value)
    }
}

/// Builds a `[SqlParam; N]` from heterogeneous values.
///
/// ```rust
/// use fourps::sql_params;
///
/// let params = sql_params![1_i64, "Scholarship", 1500.0];
/// assert_eq!(params.len(), 3);
/// ```
#[macro_export]
macro_rules! sql_params {
    () => {
        [] as [$crate::db::param::SqlParam; 0]
    };
    ($($value:expr),+ $(,)?) => {
        [$($crate::db::param::SqlParam::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_bound_as_iso_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let param = SqlParam::from(date);
        match param.to_sql().unwrap() {
            ToSqlOutput::Owned(Value::Text(text)) => assert_eq!(text, "2024-03-09"),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_macro_converts_each_value() {
        let params = sql_params![5_i64, "Ana", 12.5];
        assert_eq!(params[0], SqlParam::Integer(5));
        assert_eq!(params[1], SqlParam::Text("Ana".to_string()));
        assert_eq!(params[2], SqlParam::Decimal(12.5));
    }
}
