//! Time log aggregation.
//!
//! This module folds raw time-log entries into per-employee billed and
//! non-billed hour totals.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimeLogEntry;

/// Billed and non-billed hours logged by one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedHours {
    /// The employee the hours belong to.
    pub employee_id: String,
    /// Sum of billable hours.
    pub billed_hours: Decimal,
    /// Sum of non-billable hours.
    pub non_billed_hours: Decimal,
}

impl LoggedHours {
    fn new(employee_id: &str) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            billed_hours: Decimal::ZERO,
            non_billed_hours: Decimal::ZERO,
        }
    }

    /// Billed plus non-billed hours.
    pub fn tracked_hours(&self) -> Decimal {
        self.billed_hours + self.non_billed_hours
    }
}

/// Aggregates time-log entries per employee.
///
/// Each entry's hours are rounded to 2 decimals before being added, so the
/// totals match a running sum of rounded values rather than a rounded sum.
/// Employees are returned in the order of their first entry.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::aggregate_time_logs;
/// use utilization_engine::models::TimeLogEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let entry = |billable: bool, hours: i64| TimeLogEntry {
///     employee_id: "EMP-0001".to_string(),
///     hours: Decimal::new(hours, 0),
///     is_billable: billable,
///     project_id: None,
///     start_time: start,
///     end_time: start,
/// };
///
/// let totals = aggregate_time_logs(&[entry(true, 6), entry(false, 2), entry(true, 1)]);
/// assert_eq!(totals.len(), 1);
/// assert_eq!(totals[0].billed_hours, Decimal::new(7, 0));
/// assert_eq!(totals[0].non_billed_hours, Decimal::new(2, 0));
/// ```
pub fn aggregate_time_logs(entries: &[TimeLogEntry]) -> Vec<LoggedHours> {
    let mut totals: Vec<LoggedHours> = Vec::new();
    let mut index_by_employee: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let index = *index_by_employee
            .entry(entry.employee_id.as_str())
            .or_insert_with(|| {
                totals.push(LoggedHours::new(&entry.employee_id));
                totals.len() - 1
            });

        let hours = entry.hours.round_dp(2);
        let logged = &mut totals[index];
        if entry.is_billable {
            logged.billed_hours += hours;
        } else {
            logged.non_billed_hours += hours;
        }
    }

    totals
}
