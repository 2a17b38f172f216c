//! Clock abstraction for date-dependent views.

use chrono::{Local, NaiveDate};

/// Provides the current local date.
pub trait Clock: Send + Sync {
    /// Today's date in the server's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Clock reading the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
