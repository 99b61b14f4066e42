//! Employee model and related types.
//!
//! This module defines the [`EmployeeRecord`] returned by the employee directory
//! and the [`EmploymentDegreeChange`] steps that make up an employee's
//! part-time/full-time history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The degree of a full-time employee, in percent.
pub const FULL_TIME_DEGREE: Decimal = Decimal::ONE_HUNDRED;

/// A point-in-time change of an employee's work fraction.
///
/// The sequence of changes of one employee forms a step function: the degree
/// in effect on a date is the one of the latest change on or before it.
///
/// # Example
///
/// ```
/// use utilization_engine::models::EmploymentDegreeChange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let change = EmploymentDegreeChange {
///     effective_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
///     degree: Decimal::new(50, 0),
/// };
/// assert!(change.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentDegreeChange {
    /// The first day the new degree applies.
    pub effective_date: NaiveDate,
    /// Percent of full time, between 0 and 100.
    pub degree: Decimal,
}

impl EmploymentDegreeChange {
    /// Returns true if the degree lies within 0-100.
    pub fn is_valid(&self) -> bool {
        self.degree >= Decimal::ZERO && self.degree <= FULL_TIME_DEGREE
    }
}

/// An employee as seen by the utilization report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Company the employee works for.
    #[serde(default)]
    pub company: Option<String>,
    /// The employee's own holiday list.
    #[serde(default)]
    pub holiday_list: Option<String>,
    /// Employment degree history, in any order.
    #[serde(default)]
    pub employment_degrees: Vec<EmploymentDegreeChange>,
}

impl EmployeeRecord {
    /// Returns the first degree change outside 0-100, if any.
    pub fn first_invalid_degree(&self) -> Option<&EmploymentDegreeChange> {
        self.employment_degrees.iter().find(|c| !c.is_valid())
    }
}
