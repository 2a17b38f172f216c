//! Calendar service: date keys, groupings and the month grid.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Local, NaiveDate};

use super::error::CalendarError;
use super::types::{CalendarCell, CalendarDay, GRID_CELLS, MonthView, PeriodTotals};
use crate::expense::Expense;

/// Formats a date as its `YYYY-MM-DD` day key.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Formats a date as its `YYYY-MM` month key.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parses a `YYYY-MM` key into the first day of that month.
///
/// # Errors
///
/// Returns `CalendarError::InvalidMonth` if the key is malformed or the
/// month does not exist.
pub fn month_start_from_key(key: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidMonth(key.to_string());

    let (year, month) = key.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Service grouping expenses by calendar period.
pub struct CalendarService;

impl CalendarService {
    /// Groups expenses by the local day they are attributed to.
    ///
    /// Expenses keep their input order within a day.
    #[must_use]
    pub fn group_by_date(expenses: &[Expense]) -> BTreeMap<String, Vec<&Expense>> {
        Self::group_by(expenses, |e| date_key(e.date.date()))
    }

    /// Groups expenses by the local month they are attributed to.
    #[must_use]
    pub fn group_by_month(expenses: &[Expense]) -> BTreeMap<String, Vec<&Expense>> {
        Self::group_by(expenses, |e| month_key(e.date.date()))
    }

    /// Actual/planned totals per day, ordered by date.
    #[must_use]
    pub fn daily_totals(expenses: &[Expense]) -> Vec<PeriodTotals> {
        Self::totals_by(expenses, |e| date_key(e.date.date()))
    }

    /// Actual/planned totals per month, ordered by month.
    #[must_use]
    pub fn monthly_totals(expenses: &[Expense]) -> Vec<PeriodTotals> {
        Self::totals_by(expenses, |e| month_key(e.date.date()))
    }

    /// Builds the 42-day grid for the month containing `month_start`.
    ///
    /// The grid starts on the Monday on or before the first of the month.
    #[must_use]
    pub fn build_month_grid(month_start: NaiveDate, today: NaiveDate) -> [CalendarDay; GRID_CELLS] {
        let first = month_start - Days::new(u64::from(month_start.day0()));
        let leading = u64::from(first.weekday().num_days_from_monday());
        let grid_start = first - Days::new(leading);

        std::array::from_fn(|offset| {
            let date = grid_start + Days::new(offset as u64);
            CalendarDay {
                date,
                date_key: date_key(date),
                is_current_month: date.year() == first.year() && date.month() == first.month(),
                is_today: date == today,
            }
        })
    }

    /// Builds the month grid using the local clock for "today".
    #[must_use]
    pub fn build_month_grid_local(month_start: NaiveDate) -> [CalendarDay; GRID_CELLS] {
        Self::build_month_grid(month_start, Local::now().date_naive())
    }

    /// Builds the month grid and places expenses on their days.
    #[must_use]
    pub fn build_month_view(
        month_start: NaiveDate,
        today: NaiveDate,
        expenses: &[Expense],
    ) -> MonthView<'_> {
        let mut by_date = Self::group_by_date(expenses);
        let month = month_key(month_start);
        let mut month_totals = PeriodTotals::empty(month.clone());

        let cells = Self::build_month_grid(month_start, today)
            .into_iter()
            .map(|day| {
                let day_expenses = by_date.remove(&day.date_key).unwrap_or_default();
                let mut totals = PeriodTotals::empty(day.date_key.clone());
                for expense in &day_expenses {
                    totals.record(expense);
                    if day.is_current_month {
                        month_totals.record(expense);
                    }
                }
                CalendarCell {
                    day,
                    totals,
                    expenses: day_expenses,
                }
            })
            .collect();

        MonthView {
            month,
            month_totals,
            cells,
        }
    }

    fn group_by<F>(expenses: &[Expense], key: F) -> BTreeMap<String, Vec<&Expense>>
    where
        F: Fn(&Expense) -> String,
    {
        let mut groups: BTreeMap<String, Vec<&Expense>> = BTreeMap::new();
        for expense in expenses {
            groups.entry(key(expense)).or_default().push(expense);
        }
        groups
    }

    fn totals_by<F>(expenses: &[Expense], key: F) -> Vec<PeriodTotals>
    where
        F: Fn(&Expense) -> String,
    {
        let mut totals: BTreeMap<String, PeriodTotals> = BTreeMap::new();
        for expense in expenses {
            let key = key(expense);
            totals
                .entry(key.clone())
                .or_insert_with(|| PeriodTotals::empty(key))
                .record(expense);
        }
        totals.into_values().collect()
    }
}
