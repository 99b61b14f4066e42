//! Schedule models: degree sub-intervals and holiday calendars.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous run of days during which one employment degree applies.
///
/// Both ends are inclusive.
///
/// # Example
///
/// ```
/// use utilization_engine::models::DateSubInterval;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let interval = DateSubInterval {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     degree: Decimal::ONE_HUNDRED,
/// };
/// assert_eq!(interval.days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSubInterval {
    /// First day of the sub-interval.
    pub start_date: NaiveDate,
    /// Last day of the sub-interval.
    pub end_date: NaiveDate,
    /// Percent of full time in effect for every day of the sub-interval.
    pub degree: Decimal,
}

impl DateSubInterval {
    /// Iterates every calendar day of the sub-interval, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |day| *day <= self.end_date)
    }
}

/// The set of dates excluded from expected hours for one employee.
///
/// Built as the union of the employee's own holiday list and the company's
/// default list; duplicate dates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds all dates of a holiday list.
    pub fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, dates: I) {
        self.dates.extend(dates);
    }

    /// Checks whether a date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no holidays are known.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
