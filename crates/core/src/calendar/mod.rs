//! Calendar groupings of a project's expenses.
//!
//! This module provides:
//! - Per-day and per-month grouping keyed by local date
//! - Actual/planned totals per day and per month
//! - The fixed 6x7 month grid used by the calendar view

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::CalendarError;
pub use service::{CalendarService, date_key, month_key, month_start_from_key};
pub use types::{CalendarCell, CalendarDay, GRID_CELLS, MonthView, PeriodTotals};
