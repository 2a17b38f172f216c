//! Expense ledger records as handed to the aggregation engine.
//!
//! These are read-only snapshots: the engine never creates, updates or
//! deletes them.

pub mod types;

pub use types::{Category, Expense, ExpenseType};
