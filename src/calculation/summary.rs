//! Row ordering, summary statistics and chart series.

use rust_decimal::Decimal;

use crate::models::{
    CHART_ROW_LIMIT, ChartSeries, EmployeeUtilizationRow, Indicator, ReportSummary,
};

/// Sorts rows by descending `per_util`; equal values keep their order.
pub fn sort_by_utilization(rows: &mut [EmployeeUtilizationRow]) {
    rows.sort_by(|a, b| b.per_util.cmp(&a.per_util));
}

/// Summarizes report rows.
///
/// Averages are arithmetic means rounded to 2 decimals and flagged against
/// the utilization threshold; hour totals are plain sums.
///
/// # Returns
///
/// `None` when there are no rows.
///
/// # Example
///
/// ```
/// use utilization_engine::calculation::summarize;
///
/// assert!(summarize(&[]).is_none());
/// ```
pub fn summarize(rows: &[EmployeeUtilizationRow]) -> Option<ReportSummary> {
    if rows.is_empty() {
        return None;
    }

    let count = Decimal::from(rows.len());
    let sum = |field: fn(&EmployeeUtilizationRow) -> Decimal| -> Decimal {
        rows.iter().map(field).sum()
    };

    let avg_utilization = (sum(|r| r.per_util) / count).round_dp(2);
    let avg_utilization_billed_only = (sum(|r| r.per_util_billed_only) / count).round_dp(2);

    Some(ReportSummary {
        avg_utilization,
        avg_utilization_indicator: Indicator::for_average(avg_utilization),
        avg_utilization_billed_only,
        avg_utilization_billed_only_indicator: Indicator::for_average(avg_utilization_billed_only),
        total_billed_hours: sum(|r| r.billed_hours),
        total_non_billed_hours: sum(|r| r.non_billed_hours),
        total_untracked_hours: sum(|r| r.untracked_hours),
    })
}

/// Builds the stacked bar series from the first rows.
pub fn chart_series(rows: &[EmployeeUtilizationRow]) -> ChartSeries {
    let shown = &rows[..rows.len().min(CHART_ROW_LIMIT)];

    ChartSeries {
        labels: shown.iter().map(|r| r.label().to_string()).collect(),
        billed_hours: shown.iter().map(|r| r.billed_hours).collect(),
        non_billed_hours: shown.iter().map(|r| r.non_billed_hours).collect(),
        untracked_hours: shown.iter().map(|r| r.untracked_hours).collect(),
    }
}
