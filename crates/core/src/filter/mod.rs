//! Expense list filtering.

pub mod predicate;


pub use predicate::{ExpenseFilter, PlannedStatus};
