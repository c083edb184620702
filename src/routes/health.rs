//! Health and readiness endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub catalog: CheckStatus,
    pub advisory: CheckStatus,
}

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub healthy: bool,
    pub message: String,
}

/// GET /health
///
/// Basic health check - returns 200 if the server is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /ready
///
/// Readiness check - verifies the catalog loaded and reports whether the
/// AI advisory is configured (its absence is not a readiness failure)
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let catalog_check = CheckStatus {
        healthy: !state.catalog.is_empty(),
        message: format!("{} integrations loaded", state.catalog.len()),
    };

    let advisory_check = match &state.advisor {
        Some(_) => CheckStatus {
            healthy: true,
            message: "Configured".to_string(),
        },
        None => CheckStatus {
            healthy: true, // Running without the AI feature is OK
            message: "Not configured".to_string(),
        },
    };

    let all_healthy = catalog_check.healthy;
    let status = if all_healthy { "ready" } else { "not_ready" };
    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            status,
            checks: ReadinessChecks {
                catalog: catalog_check,
                advisory: advisory_check,
            },
        }),
    )
}
