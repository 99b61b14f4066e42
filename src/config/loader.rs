//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading HR settings and
//! the HR dataset from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;
use crate::source::{Company, HolidayList, InMemoryDataSource, Timesheet};

use super::types::HrSettings;

/// Loads and provides access to the report configuration and dataset.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── hr_settings.yaml    # standard_working_hours
/// ├── employees.yaml      # employee directory with degree history
/// ├── holiday_lists.yaml  # holiday lists and their dates
/// ├── companies.yaml      # companies and their default holiday list
/// └── timesheets.yaml     # timesheets with detail lines
/// ```
///
/// # Example
///
/// ```no_run
/// use utilization_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
/// println!("Standard hours: {:?}", loader.settings().standard_working_hours());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: HrSettings,
    data_source: InMemoryDataSource,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    ///
    /// An unset standard working hours value is not a load error; it is
    /// reported when a report is created.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<HrSettings>(&path.join("hr_settings.yaml"))?;
        let employees = Self::load_yaml::<Vec<EmployeeRecord>>(&path.join("employees.yaml"))?;
        let holiday_lists = Self::load_yaml::<Vec<HolidayList>>(&path.join("holiday_lists.yaml"))?;
        let companies = Self::load_yaml::<Vec<Company>>(&path.join("companies.yaml"))?;
        let timesheets = Self::load_yaml::<Vec<Timesheet>>(&path.join("timesheets.yaml"))?;

        debug!(
            path = %path.display(),
            employees = employees.len(),
            holiday_lists = holiday_lists.len(),
            companies = companies.len(),
            timesheets = timesheets.len(),
            "Loaded HR dataset"
        );

        let data_source = InMemoryDataSource::new()
            .with_employees(employees)
            .with_holiday_lists(holiday_lists)
            .with_companies(companies)
            .with_timesheets(timesheets);

        Ok(Self {
            settings,
            data_source,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the HR settings.
    pub fn settings(&self) -> &HrSettings {
        &self.settings
    }

    /// Returns the standard working hours, failing if unset.
    pub fn standard_working_hours(&self) -> EngineResult<Decimal> {
        self.settings.standard_working_hours()
    }

    /// Returns the loaded dataset.
    pub fn data_source(&self) -> &InMemoryDataSource {
        &self.data_source
    }

    /// Splits the loader into settings and dataset.
    pub fn into_parts(self) -> (HrSettings, InMemoryDataSource) {
        (self.settings, self.data_source)
    }
}
