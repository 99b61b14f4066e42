//! In-memory HR data source.

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, TimeLogEntry, TimeLogQuery};

use super::HrDataSource;

/// A single line of a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetDetail {
    /// Hours recorded on the line.
    pub hours: Decimal,
    /// Whether the hours are billable.
    #[serde(default)]
    pub is_billable: bool,
    /// Project the line is logged against.
    #[serde(default)]
    pub project: Option<String>,
    /// Start of the logged work.
    pub from_time: NaiveDateTime,
    /// End of the logged work.
    pub to_time: NaiveDateTime,
}

/// A timesheet: one employee's detail lines over a date span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Timesheet id.
    pub id: String,
    /// Owner of the timesheet; sheets without an employee are never reported.
    #[serde(default)]
    pub employee: Option<String>,
    /// Company the sheet is booked under.
    #[serde(default)]
    pub company: Option<String>,
    /// First day covered by the sheet.
    pub start_date: NaiveDate,
    /// Last day covered by the sheet.
    pub end_date: NaiveDate,
    /// Detail lines.
    #[serde(default)]
    pub time_logs: Vec<TimesheetDetail>,
}

/// A single holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday date.
    pub holiday_date: NaiveDate,
    /// Optional description, e.g. "New Year's Day".
    #[serde(default)]
    pub description: Option<String>,
}

/// A named list of holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayList {
    /// Holiday list id.
    pub id: String,
    /// The holidays of the list.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// A company and its default holiday list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company id.
    pub id: String,
    /// Holiday list applied to all employees of the company.
    #[serde(default)]
    pub default_holiday_list: Option<String>,
}

/// An [`HrDataSource`] holding all records in memory.
///
/// # Example
///
/// ```
/// use utilization_engine::source::{HrDataSource, InMemoryDataSource};
/// use utilization_engine::models::EmployeeRecord;
///
/// let source = InMemoryDataSource::new().with_employees(vec![EmployeeRecord {
///     id: "EMP-0001".to_string(),
///     name: Some("Ada Lovelace".to_string()),
///     department: Some("Engineering".to_string()),
///     company: None,
///     holiday_list: None,
///     employment_degrees: vec![],
/// }]);
///
/// assert!(source.fetch_employee("EMP-0001").is_ok());
/// assert!(source.fetch_employee("EMP-9999").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    employees: HashMap<String, EmployeeRecord>,
    holiday_lists: HashMap<String, HolidayList>,
    companies: HashMap<String, Company>,
    timesheets: Vec<Timesheet>,
}

impl InMemoryDataSource {
    /// Creates an empty data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds employee records, replacing records with the same id.
    pub fn with_employees(mut self, employees: Vec<EmployeeRecord>) -> Self {
        self.employees
            .extend(employees.into_iter().map(|e| (e.id.clone(), e)));
        self
    }

    /// Adds holiday lists, replacing lists with the same id.
    pub fn with_holiday_lists(mut self, holiday_lists: Vec<HolidayList>) -> Self {
        self.holiday_lists
            .extend(holiday_lists.into_iter().map(|h| (h.id.clone(), h)));
        self
    }

    /// Adds companies, replacing companies with the same id.
    pub fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies
            .extend(companies.into_iter().map(|c| (c.id.clone(), c)));
        self
    }

    /// Appends timesheets.
    pub fn with_timesheets(mut self, timesheets: Vec<Timesheet>) -> Self {
        self.timesheets.extend(timesheets);
        self
    }

    fn sheet_matches(sheet: &Timesheet, query: &TimeLogQuery) -> bool {
        let Some(employee) = sheet.employee.as_deref() else {
            return false;
        };
        if query.employee.as_deref().is_some_and(|e| e != employee) {
            return false;
        }
        if query
            .company
            .as_deref()
            .is_some_and(|c| sheet.company.as_deref() != Some(c))
        {
            return false;
        }
        query
            .window
            .overlaps_timesheet(sheet.start_date, sheet.end_date)
    }

    fn detail_matches(detail: &TimesheetDetail, query: &TimeLogQuery) -> bool {
        if query
            .project
            .as_deref()
            .is_some_and(|p| detail.project.as_deref() != Some(p))
        {
            return false;
        }
        query.window.contains_start(detail.from_time)
    }
}

impl HrDataSource for InMemoryDataSource {
    fn fetch_time_logs(&self, query: &TimeLogQuery) -> EngineResult<Vec<TimeLogEntry>> {
        let entries = self
            .timesheets
            .iter()
            .filter(|sheet| Self::sheet_matches(sheet, query))
            .flat_map(|sheet| {
                let employee_id = sheet.employee.clone().unwrap_or_default();
                sheet
                    .time_logs
                    .iter()
                    .filter(move |detail| Self::detail_matches(detail, query))
                    .map(move |detail| TimeLogEntry {
                        employee_id: employee_id.clone(),
                        hours: detail.hours,
                        is_billable: detail.is_billable,
                        project_id: detail.project.clone(),
                        start_time: detail.from_time,
                        end_time: detail.to_time,
                    })
            })
            .collect();

        Ok(entries)
    }

    fn fetch_employee(&self, employee_id: &str) -> EngineResult<EmployeeRecord> {
        self.employees
            .get(employee_id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn fetch_holiday_dates(&self, holiday_list: &str) -> EngineResult<BTreeSet<NaiveDate>> {
        self.holiday_lists
            .get(holiday_list)
            .map(|list| list.holidays.iter().map(|h| h.holiday_date).collect())
            .ok_or_else(|| EngineError::HolidayListNotFound {
                holiday_list: holiday_list.to_string(),
            })
    }

    fn fetch_company_default_holiday_list(&self, company: &str) -> EngineResult<Option<String>> {
        Ok(self
            .companies
            .get(company)
            .and_then(|c| c.default_holiday_list.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeLogWindow;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn detail(from: &str, hours: &str, billable: bool, project: Option<&str>) -> TimesheetDetail {
        TimesheetDetail {
            hours: dec(hours),
            is_billable: billable,
            project: project.map(str::to_string),
            from_time: make_datetime(from),
            to_time: make_datetime(from),
        }
    }

    fn sheet(
        id: &str,
        employee: Option<&str>,
        company: &str,
        start: &str,
        end: &str,
        time_logs: Vec<TimesheetDetail>,
    ) -> Timesheet {
        Timesheet {
            id: id.to_string(),
            employee: employee.map(str::to_string),
            company: Some(company.to_string()),
            start_date: make_date(start),
            end_date: make_date(end),
            time_logs,
        }
    }

    fn week_query() -> TimeLogQuery {
        TimeLogQuery {
            window: TimeLogWindow::new(make_date("2024-01-01"), make_date("2024-01-07")),
            employee: None,
            project: None,
            company: None,
        }
    }

    fn source() -> InMemoryDataSource {
        InMemoryDataSource::new().with_timesheets(vec![
            sheet(
                "TS-0001",
                Some("EMP-0001"),
                "Acme",
                "2024-01-01",
                "2024-01-05",
                vec![
                    detail("2024-01-02 09:00:00", "6", true, Some("PROJ-A")),
                    detail("2024-01-03 09:00:00", "2", false, Some("PROJ-B")),
                ],
            ),
            sheet(
                "TS-0002",
                Some("EMP-0002"),
                "Globex",
                "2023-12-28",
                "2024-01-08",
                vec![
                    detail("2023-12-29 09:00:00", "8", true, None),
                    detail("2024-01-04 09:00:00", "4", true, Some("PROJ-A")),
                    detail("2024-01-08 00:00:00", "3", true, Some("PROJ-A")),
                ],
            ),
            sheet(
                "TS-0003",
                None,
                "Acme",
                "2024-01-01",
                "2024-01-05",
                vec![detail("2024-01-02 09:00:00", "5", true, None)],
            ),
            sheet(
                "TS-0004",
                Some("EMP-0001"),
                "Acme",
                "2024-01-08",
                "2024-01-12",
                vec![detail("2024-01-07 20:00:00", "1", true, None)],
            ),
        ])
    }

    #[test]
    fn test_window_filters_sheets_and_details() {
        let logs = source().fetch_time_logs(&week_query()).unwrap();

        let summary: Vec<(&str, Decimal)> = logs
            .iter()
            .map(|l| (l.employee_id.as_str(), l.hours))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("EMP-0001", dec("6")),
                ("EMP-0001", dec("2")),
                ("EMP-0002", dec("4")),
            ]
        );
    }

    #[test]
    fn test_employee_filter() {
        let mut query = week_query();
        query.employee = Some("EMP-0002".to_string());

        let logs = source().fetch_time_logs(&query).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].employee_id, "EMP-0002");
    }

    #[test]
    fn test_company_filter() {
        let mut query = week_query();
        query.company = Some("Acme".to_string());

        let logs = source().fetch_time_logs(&query).unwrap();
        assert!(logs.iter().all(|l| l.employee_id == "EMP-0001"));
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn test_project_filter_applies_to_details() {
        let mut query = week_query();
        query.project = Some("PROJ-A".to_string());

        let logs = source().fetch_time_logs(&query).unwrap();
        let hours: Vec<Decimal> = logs.iter().map(|l| l.hours).collect();
        assert_eq!(hours, vec![dec("6"), dec("4")]);
        assert!(logs.iter().all(|l| l.project_id.as_deref() == Some("PROJ-A")));
    }

    #[test]
    fn test_unknown_employee_is_an_error() {
        assert_eq!(
            source().fetch_employee("EMP-0404"),
            Err(EngineError::EmployeeNotFound {
                employee_id: "EMP-0404".to_string()
            })
        );
    }

    #[test]
    fn test_holiday_dates_and_company_default() {
        let source = InMemoryDataSource::new()
            .with_holiday_lists(vec![HolidayList {
                id: "HL-ACME".to_string(),
                holidays: vec![
                    Holiday {
                        holiday_date: make_date("2024-01-01"),
                        description: Some("New Year's Day".to_string()),
                    },
                    Holiday {
                        holiday_date: make_date("2024-01-01"),
                        description: None,
                    },
                ],
            }])
            .with_companies(vec![
                Company {
                    id: "Acme".to_string(),
                    default_holiday_list: Some("HL-ACME".to_string()),
                },
                Company {
                    id: "Globex".to_string(),
                    default_holiday_list: None,
                },
            ]);

        let dates = source.fetch_holiday_dates("HL-ACME").unwrap();
        assert_eq!(dates.len(), 1);
        assert!(source.fetch_holiday_dates("HL-NONE").is_err());

        assert_eq!(
            source.fetch_company_default_holiday_list("Acme").unwrap(),
            Some("HL-ACME".to_string())
        );
        assert_eq!(source.fetch_company_default_holiday_list("Globex").unwrap(), None);
        assert_eq!(source.fetch_company_default_holiday_list("Initech").unwrap(), None);
    }

    #[test]
    fn test_deserialize_timesheet_yaml() {
        let yaml = r#"
id: TS-0100
employee: EMP-0001
company: Acme
start_date: 2024-01-01
end_date: 2024-01-05
time_logs:
  - hours: "7.5"
    is_billable: true
    project: PROJ-A
    from_time: 2024-01-02T09:00:00
    to_time: 2024-01-02T16:30:00
"#;
        let sheet: Timesheet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sheet.time_logs.len(), 1);
        assert_eq!(sheet.time_logs[0].hours, dec("7.5"));
        assert_eq!(sheet.start_date, make_date("2024-01-01"));
    }
}
