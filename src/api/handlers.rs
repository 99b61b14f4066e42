//! HTTP request handlers for the utilization API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::ReportFilters;
use crate::report::UtilizationReport;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/utilization", post(utilization_report_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for `POST /reports/utilization`.
///
/// Runs the utilization report for the posted filters against the shared
/// data source.
async fn utilization_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing utilization report request");

    let filters: ReportFilters = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_to_error(rejection, correlation_id),
            );
        }
    };

    let started = Instant::now();
    let result = UtilizationReport::new(filters.clone(), state.settings())
        .and_then(|report| report.run(state.source()));

    match result {
        Ok(output) => {
            info!(
                correlation_id = %correlation_id,
                from_date = %filters.from_date,
                to_date = %filters.to_date,
                rows = output.rows.len(),
                fallbacks = output.fallbacks.len(),
                duration_us = started.elapsed().as_micros(),
                "Utilization report generated"
            );
            json_response(
                StatusCode::OK,
                ReportResponse::new(correlation_id, filters, output),
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Utilization report failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HrSettings;
    use crate::error::{EngineError, EngineResult};
    use crate::models::{EmployeeRecord, TimeLogEntry, TimeLogQuery};
    use crate::source::{HrDataSource, InMemoryDataSource};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::BTreeSet;
    use tower::ServiceExt;

    struct UnreachableSource;

    impl HrDataSource for UnreachableSource {
        fn fetch_time_logs(&self, _query: &TimeLogQuery) -> EngineResult<Vec<TimeLogEntry>> {
            Err(EngineError::DataSourceError {
                message: "timesheet store unreachable".to_string(),
            })
        }

        fn fetch_employee(&self, employee_id: &str) -> EngineResult<EmployeeRecord> {
            Err(EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
        }

        fn fetch_holiday_dates(&self, _holiday_list: &str) -> EngineResult<BTreeSet<NaiveDate>> {
            Ok(BTreeSet::new())
        }

        fn fetch_company_default_holiday_list(
            &self,
            _company: &str,
        ) -> EngineResult<Option<String>> {
            Ok(None)
        }
    }

    fn empty_state() -> AppState {
        AppState::with_source(HrSettings::new(Decimal::new(8, 0)), InMemoryDataSource::new())
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/reports/utilization")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_body(response: Response) -> ApiError {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_empty_dataset_returns_empty_report() {
        let router = create_router(empty_state());

        let response = router
            .oneshot(post(r#"{"from_date": "2024-01-01", "to_date": "2024-01-07"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["rows"].as_array().unwrap().is_empty());
        assert!(json["summary"].is_null());
        assert!(json["chart"]["labels"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(empty_state());

        let response = router.oneshot(post("{invalid json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_date_is_validation_error() {
        let router = create_router(empty_state());

        let response = router
            .oneshot(post(r#"{"from_date": "2024-01-01"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = error_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_reversed_range_is_rejected() {
        let router = create_router(empty_state());

        let response = router
            .oneshot(post(r#"{"from_date": "2024-01-07", "to_date": "2024-01-01"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unset_working_hours_is_reported() {
        let state = AppState::with_source(HrSettings::default(), InMemoryDataSource::new());
        let router = create_router(state);

        let response = router
            .oneshot(post(r#"{"from_date": "2024-01-01", "to_date": "2024-01-07"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_body(response).await.code, "CONFIGURATION_REQUIRED");
    }

    #[tokio::test]
    async fn test_data_source_failure_returns_502() {
        let state = AppState::with_source(HrSettings::new(Decimal::new(8, 0)), UnreachableSource);
        let router = create_router(state);

        let response = router
            .oneshot(post(r#"{"from_date": "2024-01-01", "to_date": "2024-01-07"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error_body(response).await.code, "DATA_SOURCE_ERROR");
    }
}
