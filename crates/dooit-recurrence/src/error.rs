//! Error types for dooit-recurrence operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),
}

pub type Result<T> = std::result::Result<T, RecurrenceError>;
