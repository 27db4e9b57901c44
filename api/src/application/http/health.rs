use axum::{Router, extract::State, routing::get};
use fieldforce_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub success: bool,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub success: bool,
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn live() -> Response<LivenessResponse> {
    Response::OK(LivenessResponse {
        success: true,
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Pings the database.",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 500, description = "Database unreachable"),
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(ReadinessResponse {
        success: true,
        data: status,
    }))
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health/live"), get(live))
        .route(&format!("{root_path}/health/ready"), get(ready))
}
