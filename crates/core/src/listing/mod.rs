//! Project list ordering and per-project card totals.

pub mod service;
pub mod types;


pub use service::ListingService;
pub use types::{PortfolioTotals, ProjectCard, ProjectLedger, ProjectListEntry};
