//! Error types for the Utilization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a utilization report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Utilization Engine.
///
/// Fatal report errors (invalid range, missing configuration) and per-employee
/// conditions (unresolvable records, zero expected hours) share this type so
/// they can be propagated with `?` and matched on by callers.
///
/// # Example
///
/// ```
/// use utilization_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/hr_settings.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/hr_settings.yaml"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The report range is empty or reversed.
    #[error("From Date must come before To Date (got {from_date} to {to_date})")]
    InvalidDateRange {
        /// The requested start of the range.
        from_date: NaiveDate,
        /// The requested end of the range.
        to_date: NaiveDate,
    },

    /// The standard working hours setting is unset or zero.
    #[error(
        "The metrics for this report are calculated based on the Standard Working Hours. Please set Standard Working Hours in HR Settings."
    )]
    MissingStandardWorkingHours,

    /// The standard working hours setting is longer than a day.
    #[error("Standard Working Hours must not exceed 24 (got {hours})")]
    StandardWorkingHoursOutOfRange {
        /// The configured value.
        hours: Decimal,
    },

    /// No employee record exists for the given id.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        employee_id: String,
    },

    /// No holiday list exists for the given id.
    #[error("Holiday list not found: {holiday_list}")]
    HolidayListNotFound {
        /// The holiday list id that was looked up.
        holiday_list: String,
    },

    /// An employment degree change carries a value outside 0-100.
    #[error("Invalid employment degree for employee '{employee_id}': {message}")]
    InvalidEmploymentDegree {
        /// The employee the degree belongs to.
        employee_id: String,
        /// A description of what made the degree invalid.
        message: String,
    },

    /// Expected hours for the period are zero, so utilization is undefined.
    #[error("Expected hours are zero for employee '{employee_id}'; utilization is undefined")]
    ZeroExpectedHours {
        /// The employee whose utilization could not be computed.
        employee_id: String,
    },

    /// The external data source failed.
    #[error("Data source error: {message}")]
    DataSourceError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
