//! Project list data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_shared::types::ProjectId;

use crate::expense::Expense;
use crate::summary::ListTotals;

/// Project fields needed to order and label a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    /// Project ID.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Budget, if tracked.
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Manual position; a project with an order is pinned.
    #[serde(default)]
    pub order: Option<i32>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ProjectCard {
    /// Returns true if the project carries a manual order.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.order.is_some()
    }
}

/// A project together with its expense snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLedger {
    /// Project card fields.
    pub project: ProjectCard,
    /// All expenses of the project.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// A project card with its computed totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListEntry {
    /// Project card fields.
    pub project: ProjectCard,
    /// Totals for the card.
    pub totals: ListTotals,
    /// Budget minus actual spend, `None` without a budget.
    pub remaining: Option<Decimal>,
}

/// Totals across every listed project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Number of projects.
    pub project_count: usize,
    /// Number of projects with a budget.
    pub budgeted_project_count: usize,
    /// Sum of the budgets that are set.
    pub total_budget: Decimal,
    /// Summed card totals.
    pub totals: ListTotals,
}
