//! Expense aggregation engine for Sitebook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function takes an expense snapshot as an argument and returns a new
//! value; nothing is cached or mutated in place.
//!
//! # Modules
//!
//! - `expense` - Expense and category records
//! - `summary` - Project totals, remaining budget and category rollups
//! - `listing` - Project card totals and list ordering
//! - `calendar` - Per-day/per-month groupings and the month grid
//! - `filter` - Expense list filtering

pub mod calendar;
pub mod expense;
pub mod filter;
pub mod listing;
pub mod summary;

#[cfg(test)]
mod testing;
