//! Time log models.
//!
//! This module contains the [`TimeLogEntry`] consumed by the aggregator and the
//! [`TimeLogWindow`] that decides which timesheet details belong to a report range.

use chrono::{Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single tracked time entry, as delivered by the time-log store.
///
/// # Example
///
/// ```
/// use utilization_engine::models::TimeLogEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimeLogEntry {
///     employee_id: "EMP-0001".to_string(),
///     hours: Decimal::new(75, 1),
///     is_billable: true,
///     project_id: Some("PROJ-0001".to_string()),
///     start_time: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(16, 30, 0).unwrap(),
/// };
/// assert!(entry.is_billable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLogEntry {
    /// The employee who logged the time.
    pub employee_id: String,
    /// Hours recorded on the entry.
    pub hours: Decimal,
    /// Whether the hours are billable to a customer.
    pub is_billable: bool,
    /// The project the time was logged against, if any.
    #[serde(default)]
    pub project_id: Option<String>,
    /// When the logged work started.
    pub start_time: NaiveDateTime,
    /// When the logged work ended.
    pub end_time: NaiveDateTime,
}

/// The query a report issues against the time-log store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLogQuery {
    /// Range inclusion rules.
    pub window: TimeLogWindow,
    /// Restrict to one employee.
    pub employee: Option<String>,
    /// Restrict to detail lines of one project.
    pub project: Option<String>,
    /// Restrict to timesheets of one company.
    pub company: Option<String>,
}

/// The inclusion window for time logs of a report range.
///
/// An entry belongs to the window when its parent timesheet overlaps
/// `[from_date, to_date]` and the entry itself starts within
/// `[from_date, to_date + 1 day)`. The two tests use different boundaries;
/// existing report figures depend on exactly this combination.
///
/// # Example
///
/// ```
/// use utilization_engine::models::TimeLogWindow;
/// use chrono::NaiveDate;
///
/// let window = TimeLogWindow::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// );
///
/// let sheet_start = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// let sheet_end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let entry_start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap().and_hms_opt(22, 0, 0).unwrap();
/// assert!(window.includes(sheet_start, sheet_end, entry_start));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLogWindow {
    /// First day of the report range (inclusive).
    pub from_date: NaiveDate,
    /// Last day of the report range (inclusive).
    pub to_date: NaiveDate,
}

impl TimeLogWindow {
    /// Creates a window for the given report range.
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self { from_date, to_date }
    }

    /// Checks whether a timesheet `[start, end]` overlaps the report range.
    pub fn overlaps_timesheet(&self, sheet_start: NaiveDate, sheet_end: NaiveDate) -> bool {
        !(sheet_start > self.to_date || sheet_end < self.from_date)
    }

    /// Checks whether an entry start time lies in `[from_date, to_date + 1 day)`.
    pub fn contains_start(&self, start_time: NaiveDateTime) -> bool {
        let lower = self.from_date.and_time(chrono::NaiveTime::MIN);
        match self.to_date.checked_add_days(Days::new(1)) {
            Some(upper_date) => {
                start_time >= lower && start_time < upper_date.and_time(chrono::NaiveTime::MIN)
            }
            None => start_time >= lower,
        }
    }

    /// Applies both inclusion tests.
    pub fn includes(
        &self,
        sheet_start: NaiveDate,
        sheet_end: NaiveDate,
        start_time: NaiveDateTime,
    ) -> bool {
        self.overlaps_timesheet(sheet_start, sheet_end) && self.contains_start(start_time)
    }
}
