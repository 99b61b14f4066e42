//! Performance benchmarks for the Utilization Engine.
//!
//! - Expected hours for a full year with monthly degree changes
//! - Report runs over synthetic datasets of 10, 100 and 1000 employees
//! - A full HTTP round trip against the sample dataset
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use utilization_engine::api::{AppState, create_router};
use utilization_engine::calculation::{split_by_employment_degree, total_expected_hours};
use utilization_engine::config::{ConfigLoader, HrSettings};
use utilization_engine::models::{
    EmployeeRecord, EmploymentDegreeChange, HolidayCalendar, ReportFilters,
};
use utilization_engine::report::UtilizationReport;
use utilization_engine::source::{InMemoryDataSource, Timesheet, TimesheetDetail};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One degree change on the first of every month, alternating 100% and 80%.
fn monthly_degree_changes() -> Vec<EmploymentDegreeChange> {
    (1..=12)
        .map(|month| EmploymentDegreeChange {
            effective_date: date(2024, month, 1),
            degree: if month % 2 == 0 {
                Decimal::new(80, 0)
            } else {
                Decimal::ONE_HUNDRED
            },
        })
        .collect()
}

/// A month of weekday logs for `employee_count` employees.
fn create_dataset(employee_count: usize) -> InMemoryDataSource {
    let from = date(2024, 1, 1);
    let to = date(2024, 1, 31);

    let employees = (0..employee_count)
        .map(|i| EmployeeRecord {
            id: format!("EMP-{:04}", i),
            name: Some(format!("Employee {}", i)),
            department: Some(if i % 3 == 0 { "Sales" } else { "Engineering" }.to_string()),
            company: None,
            holiday_list: None,
            employment_degrees: if i % 2 == 0 {
                monthly_degree_changes()
            } else {
                vec![]
            },
        })
        .collect();

    let timesheets = (0..employee_count)
        .map(|i| Timesheet {
            id: format!("TS-{:04}", i),
            employee: Some(format!("EMP-{:04}", i)),
            company: None,
            start_date: from,
            end_date: to,
            time_logs: from
                .iter_days()
                .take_while(|day| *day <= to)
                .filter(|day| day.weekday().number_from_monday() <= 5)
                .map(|day| TimesheetDetail {
                    hours: Decimal::new(75, 1),
                    is_billable: (day.day() as usize + i) % 4 != 0,
                    project: Some("PROJ-0001".to_string()),
                    from_time: day.and_hms_opt(9, 0, 0).unwrap(),
                    to_time: day.and_hms_opt(16, 30, 0).unwrap(),
                })
                .collect(),
        })
        .collect();

    InMemoryDataSource::new()
        .with_employees(employees)
        .with_timesheets(timesheets)
}

/// Benchmark: Splitting and counting a full year for one employee.
fn bench_expected_hours_year(c: &mut Criterion) {
    let changes = monthly_degree_changes();
    let holidays: HolidayCalendar = [date(2024, 1, 1), date(2024, 12, 25), date(2024, 12, 26)]
        .into_iter()
        .collect();

    c.bench_function("expected_hours_year", |b| {
        b.iter(|| {
            let intervals = split_by_employment_degree(
                date(2024, 1, 1),
                date(2024, 12, 31),
                black_box(&changes),
            );
            black_box(total_expected_hours(&intervals, Decimal::new(8, 0), &holidays))
        })
    });
}

/// Benchmark: Report runs over growing employee counts.
fn bench_report_scaling(c: &mut Criterion) {
    let settings = HrSettings::new(Decimal::new(8, 0));
    let filters = ReportFilters::new(date(2024, 1, 1), date(2024, 1, 31));
    let report = UtilizationReport::new(filters, &settings).unwrap();

    let mut group = c.benchmark_group("report");

    for employee_count in [10, 100, 1000].iter() {
        let source = create_dataset(*employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| b.iter(|| black_box(report.run(&source).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: HTTP round trip against the sample dataset.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/sample").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = r#"{"from_date": "2024-01-01", "to_date": "2024-01-07"}"#;

    c.bench_function("http_round_trip", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/utilization")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_expected_hours_year,
    bench_report_scaling,
    bench_http_round_trip,
);
criterion_main!(benches);
