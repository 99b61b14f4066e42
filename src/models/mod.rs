//! Core data models for the Utilization Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod report;
mod schedule;
mod time_log;

pub use employee::{EmployeeRecord, EmploymentDegreeChange, FULL_TIME_DEGREE};
pub use report::{
    CHART_ROW_LIMIT, ChartSeries, ColumnType, EmployeeUtilizationRow, ExpectedHoursFallback,
    Indicator, ReportColumn, ReportFilters, ReportSummary, RowError, SummaryCard, SummaryDatatype,
    UTILIZATION_THRESHOLD, UtilizationReportOutput, report_columns,
};
pub use schedule::{DateSubInterval, HolidayCalendar};
pub use time_log::{TimeLogEntry, TimeLogQuery, TimeLogWindow};
