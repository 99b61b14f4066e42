//! Configuration types for the utilization report.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound for [`HrSettings::standard_working_hours`].
pub const MAX_STANDARD_WORKING_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// HR-wide settings the report depends on.
///
/// # Example
///
/// ```
/// use utilization_engine::config::HrSettings;
/// use rust_decimal::Decimal;
///
/// let settings = HrSettings::new(Decimal::new(8, 0));
/// assert_eq!(settings.standard_working_hours().unwrap(), Decimal::new(8, 0));
///
/// let unset = HrSettings::default();
/// assert!(unset.standard_working_hours().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrSettings {
    /// Hours per day worked by a full-time employee.
    #[serde(default)]
    standard_working_hours: Option<Decimal>,
}

impl HrSettings {
    /// Creates settings with the given standard working hours.
    pub fn new(standard_working_hours: Decimal) -> Self {
        Self {
            standard_working_hours: Some(standard_working_hours),
        }
    }

    /// Returns the standard working hours per day.
    ///
    /// Fails with [`EngineError::MissingStandardWorkingHours`] when the value
    /// is unset or not positive, and with
    /// [`EngineError::StandardWorkingHoursOutOfRange`] when it exceeds
    /// [`MAX_STANDARD_WORKING_HOURS`]. The bound keeps expected hours
    /// arithmetic far from `Decimal` overflow.
    pub fn standard_working_hours(&self) -> EngineResult<Decimal> {
        match self.standard_working_hours {
            Some(hours) if hours > MAX_STANDARD_WORKING_HOURS => {
                Err(EngineError::StandardWorkingHoursOutOfRange { hours })
            }
            Some(hours) if hours > Decimal::ZERO => Ok(hours),
            _ => Err(EngineError::MissingStandardWorkingHours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hours_count_as_missing() {
        let settings = HrSettings::new(Decimal::ZERO);
        assert_eq!(
            settings.standard_working_hours(),
            Err(EngineError::MissingStandardWorkingHours)
        );
    }

    #[test]
    fn test_negative_hours_count_as_missing() {
        let settings = HrSettings::new(Decimal::new(-8, 0));
        assert!(settings.standard_working_hours().is_err());
    }

    #[test]
    fn test_full_day_is_accepted() {
        let settings = HrSettings::new(MAX_STANDARD_WORKING_HOURS);
        assert_eq!(settings.standard_working_hours(), Ok(Decimal::new(24, 0)));
    }

    #[test]
    fn test_huge_hours_are_rejected() {
        let settings: HrSettings =
            serde_yaml::from_str("standard_working_hours: \"79228162514264337593543950335\"")
                .unwrap();
        assert!(matches!(
            settings.standard_working_hours(),
            Err(EngineError::StandardWorkingHoursOutOfRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let settings: HrSettings = serde_yaml::from_str("standard_working_hours: 7.5").unwrap();
        assert_eq!(settings.standard_working_hours().unwrap(), Decimal::new(75, 1));
    }

    #[test]
    fn test_deserialize_empty_yaml_mapping() {
        let settings: HrSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(
            settings.standard_working_hours(),
            Err(EngineError::MissingStandardWorkingHours)
        );
    }
}
