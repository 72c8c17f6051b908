//! Parsing of free-text console input into typed values.
//!
//! Every parser trims the text first and reports [`AppError::InvalidInput`]
//! naming the field on failure.

use super::error::{AppError, AppResult};
use crate::db::param::DATE_FORMAT;
use chrono::NaiveDate;

/// Any whole number, used for ids typed by the user.
pub fn parse_id(field: &'static str, text: &str) -> AppResult<i64> {
    let text = text.trim();
    text.parse::<i64>().map_err(|_| AppError::invalid_input(field, text))
}

/// A whole number that cannot be negative, such as a meeting count.
pub fn parse_count(field: &'static str, text: &str) -> AppResult<i64> {
    let value = parse_id(field, text)?;
    if value < 0 {
        return Err(AppError::invalid_input(field, text.trim()));
    }
    Ok(value)
}

/// A finite, non-negative decimal such as `1500` or `1500.50`.
pub fn parse_amount(field: &'static str, text: &str) -> AppResult<f64> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(AppError::invalid_input(field, text)),
    }
}

/// A calendar date written as `YYYY-MM-DD`.
pub fn parse_date(field: &'static str, text: &str) -> AppResult<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| AppError::invalid_input(field, text))
}

/// Trimmed text that must not be empty.
pub fn require_text(field: &'static str, text: &str) -> AppResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::invalid_input(field, text));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("user id", " 42 ").unwrap(), 42);
        assert!(matches!(parse_id("user id", "forty"), Err(AppError::InvalidInput { field: "user id", .. })));
        assert!(parse_id("user id", "").is_err());
    }

    #[test]
    fn test_parse_count_rejects_negative() {
        assert_eq!(parse_count("meetings attended", "0").unwrap(), 0);
        assert!(parse_count("meetings attended", "-1").is_err());
        assert!(parse_count("meetings attended", "2.5").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount received", "1500").unwrap(), 1500.0);
        assert_eq!(parse_amount("amount received", "1500.50").unwrap(), 1500.5);
        assert!(parse_amount("amount received", "-3").is_err());
        assert!(parse_amount("amount received", "NaN").is_err());
        assert!(parse_amount("amount received", "inf").is_err());
        assert!(parse_amount("amount received", "abc").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("meeting date", "2024-06-01").unwrap(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(parse_date("meeting date", "06/01/2024").is_err());
        assert!(parse_date("meeting date", "2024-02-30").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("program name", "  Scholarship ").unwrap(), "Scholarship");
        assert!(require_text("program name", "   ").is_err());
    }
}
