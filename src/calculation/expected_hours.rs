//! Expected hours calculation.
//!
//! Expected hours are the hours an employee should have worked in a period:
//! every Monday-Friday that is not a holiday counts one standard working day,
//! weighted by the employment degree in effect on that day.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{DateSubInterval, HolidayCalendar};

/// Returns true if `date` is a working day: Monday to Friday and not a holiday.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::is_working_day;
/// use utilization_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let holidays: HolidayCalendar = [NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()]
///     .into_iter()
///     .collect();
///
/// // Monday, but a holiday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &holidays));
/// // Tuesday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), &holidays));
/// // Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(), &holidays));
/// ```
pub fn is_working_day(date: NaiveDate, holidays: &HolidayCalendar) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.is_holiday(date)
}

/// Counts the working days of a sub-interval, both ends included.
pub fn count_working_days(interval: &DateSubInterval, holidays: &HolidayCalendar) -> u32 {
    interval
        .days()
        .filter(|day| is_working_day(*day, holidays))
        .count() as u32
}

/// Calculates expected hours for one sub-interval.
///
/// `working_days × standard_working_hours × degree / 100`, rounded to
/// 2 decimals.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::expected_hours_for_interval;
/// use utilization_engine::models::{DateSubInterval, HolidayCalendar};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Thursday 2024-01-04 to Sunday 2024-01-07 at 50%: 2 working days
/// let interval = DateSubInterval {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     degree: Decimal::new(50, 0),
/// };
///
/// let hours = expected_hours_for_interval(&interval, Decimal::new(8, 0), &HolidayCalendar::new());
/// assert_eq!(hours, Decimal::new(8, 0));
/// ```
pub fn expected_hours_for_interval(
    interval: &DateSubInterval,
    standard_working_hours: Decimal,
    holidays: &HolidayCalendar,
) -> Decimal {
    let working_days = Decimal::from(count_working_days(interval, holidays));
    (working_days * standard_working_hours * interval.degree / Decimal::ONE_HUNDRED).round_dp(2)
}

/// Sums expected hours over all sub-intervals of a period.
///
/// Each sub-interval is rounded on its own; the sum is not rounded again.
pub fn total_expected_hours(
    intervals: &[DateSubInterval],
    standard_working_hours: Decimal,
    holidays: &HolidayCalendar,
) -> Decimal {
    intervals
        .iter()
        .map(|interval| expected_hours_for_interval(interval, standard_working_hours, holidays))
        .sum()
}
