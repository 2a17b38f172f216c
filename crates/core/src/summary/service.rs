//! Summary service: the single implementation of the project rollups.

use std::collections::HashMap;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use sitebook_shared::types::CategoryId;

use super::types::{CategoryBreakdown, ListTotals, ProjectSummary, UNCATEGORIZED};
use crate::expense::{Category, Expense};

/// Service computing project summaries from an expense snapshot.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes a project's expenses against its budget.
    ///
    /// Category names are looked up in `categories`; an expense whose
    /// category is unknown keeps its own group but is labelled
    /// [`UNCATEGORIZED`].
    #[must_use]
    pub fn summarize(
        expenses: &[Expense],
        budget: Option<Decimal>,
        categories: &[Category],
    ) -> ProjectSummary {
        let totals = Self::summarize_for_list(expenses);
        let remaining = Self::remaining(budget, totals.total_spent);

        ProjectSummary {
            by_category: Self::group_by_category(expenses, categories),
            totals,
            budget,
            remaining,
        }
    }

    /// Computes the totals shown on a project card.
    #[must_use]
    pub fn summarize_for_list(expenses: &[Expense]) -> ListTotals {
        let mut totals = ListTotals::default();
        for expense in expenses {
            totals.record(expense);
        }
        totals
    }

    /// Remaining budget after actual spend.
    ///
    /// Planned expenses are not subtracted. The result is not clamped.
    #[must_use]
    pub fn remaining(budget: Option<Decimal>, total_spent: Decimal) -> Option<Decimal> {
        budget.map(|budget| budget - total_spent)
    }

    /// Groups all expenses, planned and actual, by category.
    ///
    /// Groups appear in the order their first expense is encountered.
    #[must_use]
    pub fn group_by_category(
        expenses: &[Expense],
        categories: &[Category],
    ) -> Vec<CategoryBreakdown> {
        let names: HashMap<CategoryId, &str> = categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let mut groups: IndexMap<Option<CategoryId>, CategoryBreakdown> = IndexMap::new();

        for expense in expenses {
            let group = groups.entry(expense.category_id).or_insert_with(|| {
                let category_name = expense
                    .category_id
                    .and_then(|id| names.get(&id).copied())
                    .unwrap_or(UNCATEGORIZED);

                CategoryBreakdown {
                    category_id: expense.category_id,
                    category_name: category_name.to_string(),
                    category_type: expense.expense_type,
                    total: Decimal::ZERO,
                    count: 0,
                }
            });

            group.total += expense.amount;
            group.count += 1;
        }

        groups.into_values().collect()
    }
}
