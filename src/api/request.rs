//! Request types for the utilization API.
//!
//! This module defines the JSON request body for `POST /reports/utilization`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ReportFilters;

/// Request body for the `/reports/utilization` endpoint.
///
/// Unknown keys are rejected so a misspelled filter does not silently
/// widen the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportRequest {
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
    /// Only keep employees of this department.
    #[serde(default)]
    pub department: Option<String>,
}

impl From<ReportRequest> for ReportFilters {
    fn from(req: ReportRequest) -> Self {
        ReportFilters {
            from_date: req.from_date,
            to_date: req.to_date,
            employee: req.employee,
            project: req.project,
            company: req.company,
            department: req.department,
        }
    }
}
