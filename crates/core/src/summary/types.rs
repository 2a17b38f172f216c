//! Summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_shared::types::CategoryId;

use crate::expense::{Expense, ExpenseType};

/// Display name used for expenses without a resolvable category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Totals shown on a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTotals {
    /// Sum of actual (non-planned) amounts.
    pub total_spent: Decimal,
    /// Sum of planned amounts.
    pub planned_total: Decimal,
    /// Actual spend on materials.
    pub material_total: Decimal,
    /// Actual spend on labor.
    pub labor_total: Decimal,
    /// Actual spend on deliveries.
    pub delivery_total: Decimal,
    /// Number of expenses, planned and actual.
    pub expense_count: usize,
}

impl ListTotals {
    /// Adds one expense to the running totals.
    ///
    /// Planned expenses only count toward `planned_total`; the per-type
    /// totals track realized spend.
    pub fn record(&mut self, expense: &Expense) {
        self.expense_count += 1;

        if expense.planned {
            self.planned_total += expense.amount;
            return;
        }

        self.total_spent += expense.amount;
        match expense.expense_type {
            ExpenseType::Material => self.material_total += expense.amount,
            ExpenseType::Labor => self.labor_total += expense.amount,
            ExpenseType::Delivery => self.delivery_total += expense.amount,
        }
    }

    /// Adds another set of totals into this one.
    pub fn merge(&mut self, other: &Self) {
        self.total_spent += other.total_spent;
        self.planned_total += other.planned_total;
        self.material_total += other.material_total;
        self.labor_total += other.labor_total;
        self.delivery_total += other.delivery_total;
        self.expense_count += other.expense_count;
    }

    /// Actual spend for a single expense type.
    #[must_use]
    pub const fn spent_on(&self, expense_type: ExpenseType) -> Decimal {
        match expense_type {
            ExpenseType::Material => self.material_total,
            ExpenseType::Labor => self.labor_total,
            ExpenseType::Delivery => self.delivery_total,
        }
    }
}

/// Rollup of every expense tagged with one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category ID, `None` for the uncategorized group.
    pub category_id: Option<CategoryId>,
    /// Category name, or [`UNCATEGORIZED`].
    pub category_name: String,
    /// Expense type shared by the group's members.
    #[serde(rename = "type")]
    pub category_type: ExpenseType,
    /// Sum of amounts, planned and actual combined.
    pub total: Decimal,
    /// Number of expenses in the group.
    pub count: usize,
}

/// Full financial summary of a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Actual/planned and per-type totals.
    #[serde(flatten)]
    pub totals: ListTotals,
    /// Project budget, if tracked.
    pub budget: Option<Decimal>,
    /// Budget minus actual spend. Negative when over budget, `None` without a budget.
    pub remaining: Option<Decimal>,
    /// Per-category rollups in first-seen order.
    pub by_category: Vec<CategoryBreakdown>,
}

impl ProjectSummary {
    /// Returns true if actual spend exceeds the budget.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_some_and(|r| r < Decimal::ZERO)
    }
}
