//! Utilization calculation.
//!
//! Combines logged hours with expected hours into untracked hours and the two
//! utilization percentages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_log_aggregation::LoggedHours;

/// The derived figures for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationFigures {
    /// Expected hours for the period.
    pub total_hours: Decimal,
    /// Billable hours logged.
    pub billed_hours: Decimal,
    /// Non-billable hours logged.
    pub non_billed_hours: Decimal,
    /// Expected hours not covered by logs; zero on overtime.
    pub untracked_hours: Decimal,
    /// (billed + non-billed) / total, in percent.
    pub per_util: Decimal,
    /// billed / total, in percent.
    pub per_util_billed_only: Decimal,
}

/// Calculates utilization for one employee.
///
/// - `untracked_hours = max(0, round2(total - billed - non_billed))`
/// - `per_util = round2(100 * (billed + non_billed) / total)`
/// - `per_util_billed_only = round2(100 * billed / total)`
///
/// # Errors
///
/// Returns [`EngineError::ZeroExpectedHours`] when `total_hours` is zero, since
/// both percentages are undefined then.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::{LoggedHours, calculate_utilization};
/// use rust_decimal::Decimal;
///
/// let logged = LoggedHours {
///     employee_id: "EMP-0001".to_string(),
///     billed_hours: Decimal::new(20, 0),
///     non_billed_hours: Decimal::new(10, 0),
/// };
///
/// let figures = calculate_utilization(&logged, Decimal::new(40, 0)).unwrap();
/// assert_eq!(figures.untracked_hours, Decimal::new(10, 0));
/// assert_eq!(figures.per_util, Decimal::new(75, 0));
/// assert_eq!(figures.per_util_billed_only, Decimal::new(50, 0));
/// ```
pub fn calculate_utilization(
    logged: &LoggedHours,
    total_hours: Decimal,
) -> EngineResult<UtilizationFigures> {
    let zero_hours = || EngineError::ZeroExpectedHours {
        employee_id: logged.employee_id.clone(),
    };

    let tracked = logged.tracked_hours();
    let per_util = percentage(tracked, total_hours).ok_or_else(zero_hours)?;
    let per_util_billed_only = percentage(logged.billed_hours, total_hours).ok_or_else(zero_hours)?;

    // Overtime leaves nothing untracked
    let untracked_hours = (total_hours - tracked).round_dp(2).max(Decimal::ZERO);

    Ok(UtilizationFigures {
        total_hours,
        billed_hours: logged.billed_hours,
        non_billed_hours: logged.non_billed_hours,
        untracked_hours,
        per_util,
        per_util_billed_only,
    })
}

/// `round2(100 * part / whole)`, or `None` when `whole` is zero.
fn percentage(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    (part * Decimal::ONE_HUNDRED)
        .checked_div(whole)
        .map(|ratio| ratio.round_dp(2))
}
