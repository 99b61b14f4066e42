//! The utilization report.
//!
//! [`UtilizationReport`] runs the calculation steps for every employee with
//! time logs in the requested range and assembles rows, summary and chart.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{
    LoggedHours, aggregate_time_logs, calculate_utilization, chart_series, sort_by_utilization,
    split_by_employment_degree, summarize, total_expected_hours,
};
use crate::config::HrSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeRecord, EmployeeUtilizationRow, ExpectedHoursFallback, HolidayCalendar, ReportFilters,
    RowError, UtilizationReportOutput,
};
use crate::source::HrDataSource;

/// Outcome of resolving one employee's expected hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedHoursResolution {
    /// Expected hours were computed from the employee's schedule and holidays.
    Computed(Decimal),
    /// Resolution failed; `hours` is the last total computed in this run,
    /// or zero if there is none.
    Fallback {
        /// The total used instead.
        hours: Decimal,
        /// Why resolution failed.
        reason: EngineError,
    },
}

impl ExpectedHoursResolution {
    /// The expected hours to report, computed or not.
    pub fn hours(&self) -> Decimal {
        match self {
            ExpectedHoursResolution::Computed(hours) => *hours,
            ExpectedHoursResolution::Fallback { hours, .. } => *hours,
        }
    }
}

/// A validated utilization report, ready to run against a data source.
///
/// # Example
///
/// ```
/// use utilization_engine::config::HrSettings;
/// use utilization_engine::models::ReportFilters;
/// use utilization_engine::report::UtilizationReport;
/// use utilization_engine::source::InMemoryDataSource;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let filters = ReportFilters::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// );
/// let report = UtilizationReport::new(filters, &HrSettings::new(Decimal::new(8, 0))).unwrap();
///
/// let output = report.run(&InMemoryDataSource::new()).unwrap();
/// assert!(output.rows.is_empty());
/// assert!(output.summary.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct UtilizationReport {
    filters: ReportFilters,
    standard_working_hours: Decimal,
}

impl UtilizationReport {
    /// Validates the filters and settings.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDateRange`] if `from_date` is not before `to_date`
    /// - [`EngineError::MissingStandardWorkingHours`] if the settings lack a
    ///   positive standard working hours value
    /// - [`EngineError::StandardWorkingHoursOutOfRange`] if that value is
    ///   longer than a day
    pub fn new(filters: ReportFilters, settings: &HrSettings) -> EngineResult<Self> {
        filters.validate()?;
        let standard_working_hours = settings.standard_working_hours()?;

        Ok(Self {
            filters,
            standard_working_hours,
        })
    }

    /// The filters the report runs with.
    pub fn filters(&self) -> &ReportFilters {
        &self.filters
    }

    /// Runs the report.
    ///
    /// Only a failure to fetch time logs aborts the run. Employees whose
    /// expected hours cannot be resolved fall back and are listed in
    /// `fallbacks`; employees with zero expected hours are left out of the
    /// rows and listed in `row_errors`.
    pub fn run<S: HrDataSource + ?Sized>(
        &self,
        source: &S,
    ) -> EngineResult<UtilizationReportOutput> {
        let entries = source.fetch_time_logs(&self.filters.time_log_query())?;
        let logged = aggregate_time_logs(&entries);

        debug!(
            from_date = %self.filters.from_date,
            to_date = %self.filters.to_date,
            entries = entries.len(),
            employees = logged.len(),
            "Aggregated time logs"
        );

        let mut output = UtilizationReportOutput::default();
        let mut last_computed: Option<Decimal> = None;

        for hours in &logged {
            let record = source.fetch_employee(&hours.employee_id);
            let (employee_name, department) = match &record {
                Ok(employee) => (employee.name.clone(), employee.department.clone()),
                Err(_) => (None, None),
            };

            if let Some(wanted) = self.filters.department.as_deref() {
                // Without a record the department is unknown
                if let Err(error) = &record {
                    warn!(
                        employee_id = %hours.employee_id,
                        department = wanted,
                        error = %error,
                        "Employee lookup failed under department filter"
                    );
                    output
                        .row_errors
                        .push(RowError::lookup_failed(&hours.employee_id, error));
                    continue;
                }
                if department.as_deref() != Some(wanted) {
                    continue;
                }
            }

            let computed = record.and_then(|employee| self.expected_hours(source, &employee));
            let resolution = match computed {
                Ok(total) => {
                    last_computed = Some(total);
                    ExpectedHoursResolution::Computed(total)
                }
                Err(reason) => ExpectedHoursResolution::Fallback {
                    hours: last_computed.unwrap_or(Decimal::ZERO),
                    reason,
                },
            };

            if let ExpectedHoursResolution::Fallback { hours: fallback, reason } = &resolution {
                warn!(
                    employee_id = %hours.employee_id,
                    fallback_hours = %fallback,
                    reason = %reason,
                    "Expected hours fell back"
                );
                output.fallbacks.push(ExpectedHoursFallback {
                    employee_id: hours.employee_id.clone(),
                    fallback_hours: *fallback,
                    reason: reason.to_string(),
                });
            }

            match self.build_row(hours, resolution.hours(), employee_name.clone(), department) {
                Ok(row) => output.rows.push(row),
                Err(error) => {
                    warn!(employee_id = %hours.employee_id, error = %error, "Row excluded");
                    output.row_errors.push(RowError::from_error(
                        &hours.employee_id,
                        employee_name,
                        &error,
                    ));
                }
            }
        }

        sort_by_utilization(&mut output.rows);
        output.summary = summarize(&output.rows);
        output.chart = chart_series(&output.rows);

        info!(
            rows = output.rows.len(),
            fallbacks = output.fallbacks.len(),
            row_errors = output.row_errors.len(),
            "Utilization report complete"
        );

        Ok(output)
    }

    /// Computes an employee's expected hours for the report range.
    ///
    /// Holidays are the union of the employee's own list and the default list
    /// of the employee's company. When the employee has no company, the
    /// report's company filter is used.
    pub fn expected_hours<S: HrDataSource + ?Sized>(
        &self,
        source: &S,
        employee: &EmployeeRecord,
    ) -> EngineResult<Decimal> {
        if let Some(invalid) = employee.first_invalid_degree() {
            return Err(EngineError::InvalidEmploymentDegree {
                employee_id: employee.id.clone(),
                message: format!(
                    "degree {} effective {} is outside 0-100",
                    invalid.degree, invalid.effective_date
                ),
            });
        }

        let holidays = self.holiday_calendar(source, employee)?;
        let intervals = split_by_employment_degree(
            self.filters.from_date,
            self.filters.to_date,
            &employee.employment_degrees,
        );

        Ok(total_expected_hours(
            &intervals,
            self.standard_working_hours,
            &holidays,
        ))
    }

    fn holiday_calendar<S: HrDataSource + ?Sized>(
        &self,
        source: &S,
        employee: &EmployeeRecord,
    ) -> EngineResult<HolidayCalendar> {
        let mut calendar = HolidayCalendar::new();

        if let Some(list) = employee.holiday_list.as_deref() {
            calendar.extend(source.fetch_holiday_dates(list)?);
        }

        let company = employee
            .company
            .as_deref()
            .or(self.filters.company.as_deref());
        if let Some(company) = company {
            if let Some(list) = source.fetch_company_default_holiday_list(company)? {
                calendar.extend(source.fetch_holiday_dates(&list)?);
            }
        }

        Ok(calendar)
    }

    fn build_row(
        &self,
        logged: &LoggedHours,
        total_hours: Decimal,
        employee_name: Option<String>,
        department: Option<String>,
    ) -> EngineResult<EmployeeUtilizationRow> {
        let figures = calculate_utilization(logged, total_hours)?;

        Ok(EmployeeUtilizationRow {
            employee_id: logged.employee_id.clone(),
            employee_name,
            department,
            total_hours: figures.total_hours,
            billed_hours: figures.billed_hours,
            non_billed_hours: figures.non_billed_hours,
            untracked_hours: figures.untracked_hours,
            per_util: figures.per_util,
            per_util_billed_only: figures.per_util_billed_only,
        })
    }
}
