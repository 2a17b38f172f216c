//! Calendar data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// Number of cells in a month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Calendar date.
    pub date: NaiveDate,
    /// `YYYY-MM-DD` key matching [`CalendarService::group_by_date`](super::CalendarService::group_by_date).
    pub date_key: String,
    /// Whether the date lies in the requested month.
    pub is_current_month: bool,
    /// Whether the date is today.
    pub is_today: bool,
}

/// Actual and planned totals of one day or month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Period key (`YYYY-MM-DD` or `YYYY-MM`).
    pub key: String,
    /// Sum of actual amounts.
    pub actual: Decimal,
    /// Sum of planned amounts.
    pub planned: Decimal,
    /// Number of expenses.
    pub count: usize,
}

impl PeriodTotals {
    /// Creates empty totals for a period key.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            actual: Decimal::ZERO,
            planned: Decimal::ZERO,
            count: 0,
        }
    }

    /// Adds one expense.
    pub fn record(&mut self, expense: &Expense) {
        if expense.planned {
            self.planned += expense.amount;
        } else {
            self.actual += expense.amount;
        }
        self.count += 1;
    }

    /// Actual plus planned.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.actual + self.planned
    }
}

/// A grid cell with the expenses placed on it.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell<'a> {
    /// Grid position.
    #[serde(flatten)]
    pub day: CalendarDay,
    /// Totals for the day.
    pub totals: PeriodTotals,
    /// Expenses dated on the day, in input order.
    pub expenses: Vec<&'a Expense>,
}

/// A month grid with expenses placed on each day.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView<'a> {
    /// `YYYY-MM` key of the requested month.
    pub month: String,
    /// Totals of the requested month only.
    pub month_totals: PeriodTotals,
    /// The 42 grid cells, Monday first.
    pub cells: Vec<CalendarCell<'a>>,
}
