//! Calendar error types.

use thiserror::Error;

/// Errors that can occur while addressing a calendar month.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Month key is not a valid `YYYY-MM` value.
    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),
}
