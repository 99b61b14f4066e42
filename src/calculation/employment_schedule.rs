//! Employment schedule splitting.
//!
//! An employee's employment degree is a step function over time. To prorate
//! expected hours, the report range is partitioned into sub-intervals during
//! which a single degree applies.

use chrono::NaiveDate;

use crate::models::{DateSubInterval, EmploymentDegreeChange, FULL_TIME_DEGREE};

/// Splits `[from_date, to_date]` at every employment degree change.
///
/// The degree at `from_date` is the one of the latest change on or before it,
/// or 100 when there is none. Every later change strictly before `to_date`
/// closes the current sub-interval the day before it takes effect and opens a
/// new one. Changes on or after `to_date` are ignored. Several changes on the
/// same date collapse into the last one.
///
/// The caller validates `from_date < to_date`. The changes may be in any
/// order; a stable sort by effective date is applied first.
///
/// # Returns
///
/// Ordered, contiguous, non-overlapping sub-intervals whose union is exactly
/// `[from_date, to_date]`.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::split_by_employment_degree;
/// use utilization_engine::models::EmploymentDegreeChange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let changes = [EmploymentDegreeChange {
///     effective_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
///     degree: Decimal::new(50, 0),
/// }];
///
/// let intervals = split_by_employment_degree(from, to, &changes);
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(intervals[0].end_date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
/// assert_eq!(intervals[0].degree, Decimal::ONE_HUNDRED);
/// assert_eq!(intervals[1].start_date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
/// assert_eq!(intervals[1].degree, Decimal::new(50, 0));
/// ```
pub fn split_by_employment_degree(
    from_date: NaiveDate,
    to_date: NaiveDate,
    changes: &[EmploymentDegreeChange],
) -> Vec<DateSubInterval> {
    let mut sorted = changes.to_vec();
    sorted.sort_by_key(|change| change.effective_date);

    // Degree in effect at the start of the range
    let first_later = sorted
        .iter()
        .position(|change| change.effective_date > from_date)
        .unwrap_or(sorted.len());
    let mut degree = sorted[..first_later]
        .last()
        .map(|change| change.degree)
        .unwrap_or(FULL_TIME_DEGREE);

    let mut intervals = Vec::new();
    let mut start_date = from_date;

    for change in &sorted[first_later..] {
        if change.effective_date >= to_date {
            break;
        }

        if change.effective_date > start_date {
            if let Some(end_date) = change.effective_date.pred_opt() {
                intervals.push(DateSubInterval {
                    start_date,
                    end_date,
                    degree,
                });
                start_date = change.effective_date;
            }
        }
        degree = change.degree;
    }

    intervals.push(DateSubInterval {
        start_date,
        end_date: to_date,
        degree,
    });

    intervals
}
