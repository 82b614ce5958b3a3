//! Calendar source for "the current month"

use chrono::{Local, NaiveDate};

use crate::models::MonthKey;

/// Supplies today's date
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// The current calendar month
    fn current_month(&self) -> MonthKey {
        MonthKey::from_date(self.today())
    }
}

/// The local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_month() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        assert_eq!(clock.current_month().as_str(), "2024-05");
    }
}
