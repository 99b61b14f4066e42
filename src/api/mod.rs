//! HTTP API module for the Utilization Engine.
//!
//! This module exposes the utilization report over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ApiErrorResponse, ReportResponse};
pub use state::AppState;
