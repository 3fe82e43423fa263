//! Error types for the step tracker
//!
//! The calculation and award functions are total and never return these;
//! they cover the edges where user input or external documents come in.

use thiserror::Error;

/// Errors raised when accepting input from outside the core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Parse an ISO `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, TrackerError> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| TrackerError::InvalidDate(value.to_string()))
}
