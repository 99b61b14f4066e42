//! Read-only access to HR data.
//!
//! The report never talks to storage directly. It asks an [`HrDataSource`]
//! for time logs, employee records and holiday lists. [`InMemoryDataSource`]
//! is the implementation backed by the YAML dataset.

mod memory;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, TimeLogEntry, TimeLogQuery};

pub use memory::{Company, Holiday, HolidayList, InMemoryDataSource, Timesheet, TimesheetDetail};

/// The queries the utilization report issues against HR data.
pub trait HrDataSource: Send + Sync {
    /// Time logs matching the query's window and filters, in storage order.
    fn fetch_time_logs(&self, query: &TimeLogQuery) -> EngineResult<Vec<TimeLogEntry>>;

    /// The employee record for an id.
    fn fetch_employee(&self, employee_id: &str) -> EngineResult<EmployeeRecord>;

    /// All dates of a holiday list.
    fn fetch_holiday_dates(&self, holiday_list: &str) -> EngineResult<BTreeSet<NaiveDate>>;

    /// The default holiday list of a company, if it has one.
    fn fetch_company_default_holiday_list(&self, company: &str) -> EngineResult<Option<String>>;
}
