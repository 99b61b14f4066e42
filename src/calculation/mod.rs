//! Calculation logic for the Utilization Engine.
//!
//! This module contains the pure calculation steps of the report: time log
//! aggregation, splitting a range by employment degree, expected hours over
//! weekdays and holidays, utilization percentages, and the row ordering,
//! summary and chart series built from them.

mod employment_schedule;
mod expected_hours;
mod summary;
mod time_log_aggregation;
mod utilization;

pub use employment_schedule::split_by_employment_degree;
pub use expected_hours::{
    count_working_days, expected_hours_for_interval, is_working_day, total_expected_hours,
};
pub use summary::{chart_series, sort_by_utilization, summarize};
pub use time_log_aggregation::{LoggedHours, aggregate_time_logs};
pub use utilization::{UtilizationFigures, calculate_utilization};
