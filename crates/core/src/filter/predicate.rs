//! Conjunctive filter over expense lists.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_shared::types::CategoryId;

use crate::expense::{Expense, ExpenseType};

/// Which side of the planned/actual split to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlannedStatus {
    /// Keep both.
    #[default]
    All,
    /// Keep planned expenses only.
    Planned,
    /// Keep actual expenses only.
    Actual,
}

impl PlannedStatus {
    /// Returns true if an expense with the given flag passes.
    #[must_use]
    pub const fn admits(self, planned: bool) -> bool {
        match self {
            Self::All => true,
            Self::Planned => planned,
            Self::Actual => !planned,
        }
    }
}

/// Filter for expense lists.
///
/// Every dimension left empty passes everything; an expense must satisfy
/// all active dimensions. Text dimensions match case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseFilter {
    /// Allowed expense types.
    pub types: HashSet<ExpenseType>,
    /// Allowed categories. Uncategorized expenses fail an active category filter.
    pub category_ids: HashSet<CategoryId>,
    /// Substring of the title.
    pub title: Option<String>,
    /// First day included.
    pub date_from: Option<NaiveDate>,
    /// Last day included, up to 23:59:59.
    pub date_to: Option<NaiveDate>,
    /// Minimum amount, inclusive.
    pub amount_min: Option<Decimal>,
    /// Maximum amount, inclusive.
    pub amount_max: Option<Decimal>,
    /// Substring of the supplier name.
    pub supplier: Option<String>,
    /// Substring of the carrier name.
    pub carrier: Option<String>,
    /// Substring of the worker name.
    pub worker: Option<String>,
    /// Planned/actual restriction.
    pub planned_status: PlannedStatus,
}

impl ExpenseFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows an expense type.
    #[must_use]
    pub fn with_type(mut self, expense_type: ExpenseType) -> Self {
        self.types.insert(expense_type);
        self
    }

    /// Allows a category.
    #[must_use]
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_ids.insert(category_id);
        self
    }

    /// Requires the title to contain `text`.
    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(text.into());
        self
    }

    /// Restricts to an inclusive day range.
    #[must_use]
    pub const fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Restricts to an inclusive amount range.
    #[must_use]
    pub const fn with_amount_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.amount_min = min;
        self.amount_max = max;
        self
    }

    /// Requires the supplier name to contain `text`.
    #[must_use]
    pub fn with_supplier(mut self, text: impl Into<String>) -> Self {
        self.supplier = Some(text.into());
        self
    }

    /// Requires the carrier name to contain `text`.
    #[must_use]
    pub fn with_carrier(mut self, text: impl Into<String>) -> Self {
        self.carrier = Some(text.into());
        self
    }

    /// Requires the worker name to contain `text`.
    #[must_use]
    pub fn with_worker(mut self, text: impl Into<String>) -> Self {
        self.worker = Some(text.into());
        self
    }

    /// Restricts to planned or actual expenses.
    #[must_use]
    pub const fn with_planned_status(mut self, status: PlannedStatus) -> Self {
        self.planned_status = status;
        self
    }

    /// Returns true if no dimension is active (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.category_ids.is_empty()
            && !is_active(self.title.as_deref())
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.amount_min.is_none()
            && self.amount_max.is_none()
            && !is_active(self.supplier.as_deref())
            && !is_active(self.carrier.as_deref())
            && !is_active(self.worker.as_deref())
            && self.planned_status == PlannedStatus::All
    }

    /// Returns true if the expense satisfies every active dimension.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        (self.types.is_empty() || self.types.contains(&expense.expense_type))
            && (self.category_ids.is_empty()
                || expense
                    .category_id
                    .is_some_and(|id| self.category_ids.contains(&id)))
            && contains_text(Some(expense.title.as_str()), self.title.as_deref())
            && self.within_dates(expense.date)
            && self.amount_min.is_none_or(|min| expense.amount >= min)
            && self.amount_max.is_none_or(|max| expense.amount <= max)
            && contains_text(expense.supplier_name.as_deref(), self.supplier.as_deref())
            && contains_text(expense.carrier_name.as_deref(), self.carrier.as_deref())
            && contains_text(expense.worker_name.as_deref(), self.worker.as_deref())
            && self.planned_status.admits(expense.planned)
    }

    /// Returns the matching expenses in input order.
    #[must_use]
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }

    fn within_dates(&self, at: NaiveDateTime) -> bool {
        let after_start = self.date_from.is_none_or(|from| at.date() >= from);
        let before_end = self.date_to.is_none_or(|to| {
            to.and_hms_opt(23, 59, 59)
                .is_some_and(|end_of_day| at <= end_of_day)
        });
        after_start && before_end
    }
}

fn is_active(needle: Option<&str>) -> bool {
    needle.is_some_and(|n| !n.is_empty())
}

fn contains_text(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => haystack
            .is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase())),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn at(day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn sample() -> Expense {
        Expense::new(ExpenseType::Material, dec!(120), at(5, 10, 0, 0))
            .with_title("Ready-mix Concrete C25")
            .with_supplier("Northside Aggregates")
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ExpenseFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&sample()));
        assert!(filter.matches(&sample().planned(true)));
    }

    #[test]
    fn test_same_day_range_covers_whole_day() {
        let filter = ExpenseFilter::new().between(Some(day(1)), Some(day(1)));

        let evening = Expense::new(ExpenseType::Labor, dec!(1), at(1, 18, 0, 0));
        let last_second = Expense::new(ExpenseType::Labor, dec!(1), at(1, 23, 59, 59));
        let midnight = Expense::new(ExpenseType::Labor, dec!(1), at(1, 0, 0, 0));
        let next_day = Expense::new(ExpenseType::Labor, dec!(1), at(2, 0, 0, 1));

        assert!(filter.matches(&evening));
        assert!(filter.matches(&last_second));
        assert!(filter.matches(&midnight));
        assert!(!filter.matches(&next_day));
    }

    #[test]
    fn test_open_ended_date_ranges() {
        let expense = sample();
        assert!(ExpenseFilter::new().between(Some(day(5)), None).matches(&expense));
        assert!(!ExpenseFilter::new().between(Some(day(6)), None).matches(&expense));
        assert!(ExpenseFilter::new().between(None, Some(day(5))).matches(&expense));
        assert!(!ExpenseFilter::new().between(None, Some(day(4))).matches(&expense));
    }

    #[rstest]
    #[case(Some(dec!(120)), None, true)]
    #[case(None, Some(dec!(120)), true)]
    #[case(Some(dec!(120.01)), None, false)]
    #[case(None, Some(dec!(119.99)), false)]
    #[case(Some(dec!(100)), Some(dec!(200)), true)]
    fn test_amount_range_is_inclusive(
        #[case] min: Option<Decimal>,
        #[case] max: Option<Decimal>,
        #[case] expected: bool,
    ) {
        let filter = ExpenseFilter::new().with_amount_range(min, max);
        assert_eq!(filter.matches(&sample()), expected);
    }

    #[rstest]
    #[case("concrete", true)]
    #[case("READY-MIX", true)]
    #[case("c25", true)]
    #[case("rebar", false)]
    #[case("", true)]
    fn test_title_is_case_insensitive_substring(#[case] text: &str, #[case] expected: bool) {
        let filter = ExpenseFilter::new().with_title(text);
        assert_eq!(filter.matches(&sample()), expected);
    }

    #[test]
    fn test_counterparty_filters() {
        let expense = sample();

        assert!(ExpenseFilter::new().with_supplier("northside").matches(&expense));
        assert!(!ExpenseFilter::new().with_supplier("southside").matches(&expense));
        // No carrier recorded: an active carrier filter cannot match.
        assert!(!ExpenseFilter::new().with_carrier("haul").matches(&expense));
        assert!(ExpenseFilter::new().with_worker("").matches(&expense));

        let shift = Expense::new(ExpenseType::Labor, dec!(200), at(5, 8, 0, 0)).with_worker("Ana Kowalski");
        assert!(ExpenseFilter::new().with_worker("kowal").matches(&shift));
        let haul = Expense::new(ExpenseType::Delivery, dec!(60), at(5, 8, 0, 0)).with_carrier("FastHaul");
        assert!(ExpenseFilter::new().with_carrier("HAUL").matches(&haul));
    }

    #[test]
    fn test_type_and_category_sets() {
        let framing = CategoryId::new();
        let tagged = sample().with_category(framing);

        assert!(ExpenseFilter::new().with_type(ExpenseType::Material).matches(&tagged));
        assert!(
            ExpenseFilter::new()
                .with_type(ExpenseType::Labor)
                .with_type(ExpenseType::Material)
                .matches(&tagged)
        );
        assert!(!ExpenseFilter::new().with_type(ExpenseType::Delivery).matches(&tagged));

        assert!(ExpenseFilter::new().with_category(framing).matches(&tagged));
        assert!(!ExpenseFilter::new().with_category(CategoryId::new()).matches(&tagged));
        assert!(!ExpenseFilter::new().with_category(framing).matches(&sample()));
    }

    #[rstest]
    #[case(PlannedStatus::All, false, true)]
    #[case(PlannedStatus::All, true, true)]
    #[case(PlannedStatus::Planned, true, true)]
    #[case(PlannedStatus::Planned, false, false)]
    #[case(PlannedStatus::Actual, false, true)]
    #[case(PlannedStatus::Actual, true, false)]
    fn test_planned_status(
        #[case] status: PlannedStatus,
        #[case] planned: bool,
        #[case] expected: bool,
    ) {
        let filter = ExpenseFilter::new().with_planned_status(status);
        assert_eq!(filter.matches(&sample().planned(planned)), expected);
    }

    #[test]
    fn test_all_dimensions_must_hold() {
        let filter = ExpenseFilter::new()
            .with_type(ExpenseType::Material)
            .with_title("concrete")
            .with_planned_status(PlannedStatus::Planned);

        assert!(!filter.matches(&sample()));
        assert!(filter.matches(&sample().planned(true)));
    }

    #[test]
    fn test_apply_preserves_order() {
        let expenses = vec![
            sample(),
            Expense::new(ExpenseType::Labor, dec!(10), at(6, 9, 0, 0)),
            sample().with_title("Concrete pump hire"),
        ];

        let matched = ExpenseFilter::new().with_title("concrete").apply(&expenses);

        assert_eq!(matched, vec![&expenses[0], &expenses[2]]);
    }

    #[test]
    fn test_deserializes_partial_filter() {
        let filter: ExpenseFilter = serde_json::from_str(
            r#"{"types": ["LABOR"], "date_to": "2024-03-01", "planned_status": "actual"}"#,
        )
        .unwrap();

        assert!(filter.types.contains(&ExpenseType::Labor));
        assert_eq!(filter.date_to, Some(day(1)));
        assert_eq!(filter.planned_status, PlannedStatus::Actual);
        assert!(filter.title.is_none());
    }
}
