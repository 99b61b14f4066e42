//! Response types for the utilization API.
//!
//! This module defines the report envelope returned on success, the error
//! body, and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    ReportColumn, ReportFilters, SummaryCard, UtilizationReportOutput, report_columns,
};

/// Successful response of `POST /reports/utilization`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    /// Unique id of this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// The filters the report ran with.
    pub filters: ReportFilters,
    /// Column layout for tabular rendering.
    pub columns: Vec<ReportColumn>,
    /// Summary figures as labelled cards; empty when there are no rows.
    pub summary_cards: Vec<SummaryCard>,
    /// The report itself.
    #[serde(flatten)]
    pub report: UtilizationReportOutput,
}

impl ReportResponse {
    /// Wraps a report run.
    pub fn new(report_id: Uuid, filters: ReportFilters, report: UtilizationReportOutput) -> Self {
        let summary_cards = report
            .summary
            .as_ref()
            .map(|summary| summary.cards())
            .unwrap_or_default();

        Self {
            report_id,
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            filters,
            columns: report_columns(),
            summary_cards,
            report,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidDateRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(message),
            ),
            EngineError::MissingStandardWorkingHours => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "CONFIGURATION_REQUIRED",
                    message,
                    "Set standard_working_hours in hr_settings.yaml",
                ),
            ),
            EngineError::StandardWorkingHoursOutOfRange { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "INVALID_CONFIGURATION",
                    message,
                    "standard_working_hours in hr_settings.yaml must be at most 24",
                ),
            ),
            EngineError::EmployeeNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            EngineError::HolidayListNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("HOLIDAY_LIST_NOT_FOUND", message),
            ),
            EngineError::InvalidEmploymentDegree { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_EMPLOYMENT_DEGREE", message),
            ),
            EngineError::ZeroExpectedHours { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("ZERO_EXPECTED_HOURS", message),
            ),
            EngineError::DataSourceError { .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "DATA_SOURCE_ERROR",
                    "HR data could not be read",
                    message,
                ),
            ),
        };

        ApiErrorResponse { status, error }
    }
}
