//! Connectivity check endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::interfaces::http::common::{domain_error_response, ErrorResponse};
use crate::interfaces::http::router::ApiState;

/// Connectivity check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Confirms the database is reachable with a no-op round trip.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
pub async fn health_check(
    State(state): State<ApiState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.service.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ok".to_string(),
        })),
        Err(e) => Err(domain_error_response(e)),
    }
}
