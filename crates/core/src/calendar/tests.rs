//! Property-based tests for calendar module.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::CalendarService;
use super::types::GRID_CELLS;
use crate::testing::expenses;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    /// The grid is 42 consecutive days starting on a Monday and covering the whole month.
    #[test]
    fn test_grid_shape(month_start in any_date(), today in any_date()) {
        let grid = CalendarService::build_month_grid(month_start, today);

        prop_assert_eq!(grid.len(), GRID_CELLS);
        prop_assert_eq!(grid[0].date.weekday(), Weekday::Mon);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].date + Days::new(1), pair[1].date);
        }

        let in_month = grid.iter().filter(|d| d.is_current_month).count();
        let expected = grid
            .iter()
            .filter(|d| d.date.month() == month_start.month() && d.date.year() == month_start.year())
            .count();
        prop_assert_eq!(in_month, expected);
        prop_assert!(grid.iter().any(|d| d.date.day() == 1 && d.is_current_month));
        prop_assert!((28..=31).contains(&in_month));
    }

    /// At most one cell is today, and exactly one when today is on the grid.
    #[test]
    fn test_grid_has_at_most_one_today(month_start in any_date(), today in any_date()) {
        let grid = CalendarService::build_month_grid(month_start, today);
        let todays = grid.iter().filter(|d| d.is_today).count();
        let on_grid = grid[0].date <= today && today <= grid[GRID_CELLS - 1].date;

        prop_assert_eq!(todays, usize::from(on_grid));
    }

    /// Grouping the same snapshot twice gives the same groups in input order.
    #[test]
    fn test_group_by_date_is_idempotent(expenses in expenses()) {
        let first = CalendarService::group_by_date(&expenses);
        let second = CalendarService::group_by_date(&expenses);
        prop_assert_eq!(&first, &second);

        let regrouped: usize = first.values().map(Vec::len).sum();
        prop_assert_eq!(regrouped, expenses.len());

        for (key, group) in &first {
            let expected: Vec<_> = expenses
                .iter()
                .filter(|e| &super::date_key(e.date.date()) == key)
                .collect();
            prop_assert_eq!(group, &expected);
        }
    }

    /// Daily and monthly totals both account for every amount.
    #[test]
    fn test_period_totals_are_complete(expenses in expenses()) {
        let all: Decimal = expenses.iter().map(|e| e.amount).sum();
        let daily: Decimal = CalendarService::daily_totals(&expenses).iter().map(|t| t.total()).sum();
        let monthly: Decimal = CalendarService::monthly_totals(&expenses).iter().map(|t| t.total()).sum();

        prop_assert_eq!(daily, all);
        prop_assert_eq!(monthly, all);
    }
}
