//! Project financial summaries.
//!
//! This module computes the figures shown on the project dashboard and
//! project cards:
//! - Actual vs planned totals
//! - Actual spend per expense type
//! - Remaining budget
//! - Per-category rollups

pub mod service;
pub mod types;


pub use service::SummaryService;
pub use types::{CategoryBreakdown, ListTotals, ProjectSummary, UNCATEGORIZED};
