//! Report models for the Utilization Engine.
//!
//! This module contains the typed report filters and every record the report
//! hands to its presentation layer: rows, summary, chart series, column
//! descriptors, and the per-employee fallbacks and errors.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{TimeLogQuery, TimeLogWindow};

/// Averages below this percentage are flagged [`Indicator::Red`].
pub const UTILIZATION_THRESHOLD: Decimal = Decimal::from_parts(700, 0, 0, false, 1);

/// Maximum number of rows included in the chart series.
pub const CHART_ROW_LIMIT: usize = 30;

/// The filters a utilization report is run with.
///
/// # Example
///
/// ```
/// use utilization_engine::models::ReportFilters;
/// use chrono::NaiveDate;
///
/// let filters = ReportFilters::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// );
/// assert!(filters.validate().is_ok());
/// assert_eq!(filters.day_span(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    /// First day of the report range (inclusive).
    pub from_date: NaiveDate,
    /// Last day of the report range (inclusive).
    pub to_date: NaiveDate,
    /// Only report on this employee.
    #[serde(default)]
    pub employee: Option<String>,
    /// Only count time logged against this project.
    #[serde(default)]
    pub project: Option<String>,
    /// Only count timesheets of this company.
    #[serde(default)]
    pub company: Option<String>,
    /// Only keep rows of this department (exact match).
    #[serde(default)]
    pub department: Option<String>,
}

impl ReportFilters {
    /// Creates filters for a date range with no further restrictions.
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            from_date,
            to_date,
            employee: None,
            project: None,
            company: None,
            department: None,
        }
    }

    /// Number of days between `from_date` and `to_date`.
    pub fn day_span(&self) -> i64 {
        (self.to_date - self.from_date).num_days()
    }

    /// Rejects empty or reversed ranges.
    pub fn validate(&self) -> EngineResult<()> {
        if self.day_span() <= 0 {
            return Err(EngineError::InvalidDateRange {
                from_date: self.from_date,
                to_date: self.to_date,
            });
        }
        Ok(())
    }

    /// Builds the time-log query for these filters.
    pub fn time_log_query(&self) -> TimeLogQuery {
        TimeLogQuery {
            window: TimeLogWindow::new(self.from_date, self.to_date),
            employee: self.employee.clone(),
            project: self.project.clone(),
            company: self.company.clone(),
        }
    }
}

/// One employee's line in the utilization report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUtilizationRow {
    /// The employee id.
    pub employee_id: String,
    /// Display name, if the directory knows one.
    pub employee_name: Option<String>,
    /// Department, if the directory knows one.
    pub department: Option<String>,
    /// Expected hours for the period (T).
    pub total_hours: Decimal,
    /// Billable hours logged (B).
    pub billed_hours: Decimal,
    /// Non-billable hours logged (NB).
    pub non_billed_hours: Decimal,
    /// Expected hours not covered by any log (U), never negative.
    pub untracked_hours: Decimal,
    /// (B + NB) / T, in percent.
    pub per_util: Decimal,
    /// B / T, in percent.
    pub per_util_billed_only: Decimal,
}

impl EmployeeUtilizationRow {
    /// Label used for the row in charts.
    pub fn label(&self) -> &str {
        self.employee_name.as_deref().unwrap_or(&self.employee_id)
    }
}

/// Traffic-light flag for an averaged metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Below [`UTILIZATION_THRESHOLD`].
    Red,
    /// At or above [`UTILIZATION_THRESHOLD`].
    Green,
}

impl Indicator {
    /// Classifies an average utilization against the threshold.
    pub fn for_average(average: Decimal) -> Self {
        if average < UTILIZATION_THRESHOLD {
            Indicator::Red
        } else {
            Indicator::Green
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Red => write!(f, "Red"),
            Indicator::Green => write!(f, "Green"),
        }
    }
}

/// Aggregate figures over all rows of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Mean of `per_util` across rows.
    pub avg_utilization: Decimal,
    /// Flag for `avg_utilization`.
    pub avg_utilization_indicator: Indicator,
    /// Mean of `per_util_billed_only` across rows.
    pub avg_utilization_billed_only: Decimal,
    /// Flag for `avg_utilization_billed_only`.
    pub avg_utilization_billed_only_indicator: Indicator,
    /// Sum of billed hours.
    pub total_billed_hours: Decimal,
    /// Sum of non-billed hours.
    pub total_non_billed_hours: Decimal,
    /// Sum of untracked hours.
    pub total_untracked_hours: Decimal,
}

/// How a summary value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryDatatype {
    /// A percentage value.
    Percentage,
    /// A plain number of hours.
    Float,
}

/// A single labelled figure of the summary, ready for a summary strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    /// Label shown next to the value.
    pub label: String,
    /// The value itself.
    pub value: Decimal,
    /// Rendering hint.
    pub datatype: SummaryDatatype,
    /// Traffic-light flag, for averaged metrics only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Indicator>,
}

impl ReportSummary {
    /// Flattens the summary into labelled cards, in display order.
    pub fn cards(&self) -> Vec<SummaryCard> {
        let percentage = |label: &str, value: Decimal, indicator: Indicator| SummaryCard {
            label: label.to_string(),
            value,
            datatype: SummaryDatatype::Percentage,
            indicator: Some(indicator),
        };
        let hours = |label: &str, value: Decimal| SummaryCard {
            label: label.to_string(),
            value,
            datatype: SummaryDatatype::Float,
            indicator: None,
        };

        vec![
            percentage(
                "Avg Utilization",
                self.avg_utilization,
                self.avg_utilization_indicator,
            ),
            percentage(
                "Avg Utilization (Billed Only)",
                self.avg_utilization_billed_only,
                self.avg_utilization_billed_only_indicator,
            ),
            hours("Total Billed Hours", self.total_billed_hours),
            hours("Total Non-Billed Hours", self.total_non_billed_hours),
            hours("Total Untracked Hours", self.total_untracked_hours),
        ]
    }
}

/// Stacked bar chart data: one label and three values per employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Employee labels.
    pub labels: Vec<String>,
    /// Billed hours per label.
    pub billed_hours: Vec<Decimal>,
    /// Non-billed hours per label.
    pub non_billed_hours: Vec<Decimal>,
    /// Untracked hours per label.
    pub untracked_hours: Vec<Decimal>,
}

impl ChartSeries {
    /// Returns true if the chart has no bars.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Rendering type of a report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Reference to another record (employee, department).
    Link,
    /// Hours.
    Float,
    /// Percent value.
    Percentage,
}

/// Describes one column of the tabular report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    /// Field of [`EmployeeUtilizationRow`] shown in the column.
    pub fieldname: &'static str,
    /// Column header.
    pub label: &'static str,
    /// Rendering type.
    pub fieldtype: ColumnType,
    /// Suggested width in pixels.
    pub width: u16,
}

/// Returns the report's column layout, left to right.
pub fn report_columns() -> Vec<ReportColumn> {
    let column = |fieldname, label, fieldtype, width| ReportColumn {
        fieldname,
        label,
        fieldtype,
        width,
    };

    vec![
        column("employee_id", "Employee", ColumnType::Link, 230),
        column("department", "Department", ColumnType::Link, 120),
        column("total_hours", "Total Hours (T)", ColumnType::Float, 120),
        column("billed_hours", "Billed Hours (B)", ColumnType::Float, 170),
        column("non_billed_hours", "Non-Billed Hours (NB)", ColumnType::Float, 170),
        column("untracked_hours", "Untracked Hours (U)", ColumnType::Float, 170),
        column("per_util", "% Utilization (B + NB) / T", ColumnType::Percentage, 200),
        column("per_util_billed_only", "% Utilization (B / T)", ColumnType::Percentage, 200),
    ]
}

/// Records that an employee's expected hours could not be resolved and a
/// fallback total was used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedHoursFallback {
    /// The affected employee.
    pub employee_id: String,
    /// The total used in place of the computed one.
    pub fallback_hours: Decimal,
    /// Why resolution failed.
    pub reason: String,
}

/// An employee left out of the rows because utilization is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// The affected employee.
    pub employee_id: String,
    /// Display name, if known.
    pub employee_name: Option<String>,
    /// Stable error code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl RowError {
    /// Builds a row error from an engine error.
    pub fn from_error(
        employee_id: &str,
        employee_name: Option<String>,
        error: &EngineError,
    ) -> Self {
        let code = match error {
            EngineError::ZeroExpectedHours { .. } => "ZERO_EXPECTED_HOURS",
            _ => "CALCULATION_ERROR",
        };
        Self {
            employee_id: employee_id.to_string(),
            employee_name,
            code: code.to_string(),
            message: error.to_string(),
        }
    }

    /// A row error for an employee whose record could not be fetched, so the
    /// department filter could not be applied.
    pub fn lookup_failed(employee_id: &str, error: &EngineError) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            employee_name: None,
            code: "EMPLOYEE_LOOKUP_FAILED".to_string(),
            message: error.to_string(),
        }
    }
}

/// Everything a report run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationReportOutput {
    /// Rows sorted by descending `per_util`.
    pub rows: Vec<EmployeeUtilizationRow>,
    /// Aggregate figures; `None` when there are no rows.
    pub summary: Option<ReportSummary>,
    /// Chart data for the first rows.
    pub chart: ChartSeries,
    /// Employees whose expected hours fell back.
    pub fallbacks: Vec<ExpectedHoursFallback>,
    /// Employees excluded because their utilization is undefined or their
    /// record could not be fetched under a department filter.
    pub row_errors: Vec<RowError>,
}
