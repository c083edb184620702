//! AI plan advisory endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::notify::Notification;
use crate::state::AppState;

/// Request body for blueprint generation
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Free-text description of the problem to solve
    pub prompt: String,
}

/// Response carrying the generated blueprint, verbatim
#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    pub plan: String,
}

/// POST /api/v1/advisory/plan
///
/// One blocking round trip to the AI provider per request; no retry, no
/// streaming. Fails with 503 when no credential is configured (checked
/// before any network attempt) and 502 on provider failure; both surface a
/// user notification.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::InvalidRequest("prompt must not be empty".into()));
    }

    let advisor = state.advisor.as_ref().ok_or_else(|| {
        let message = "AI advisory is not configured (GEMINI_API_KEY is missing)".to_string();
        state.notifier.publish(Notification::error(message.clone()));
        AppError::Configuration(message)
    })?;

    match advisor.generate_plan(&request.prompt).await {
        Ok(plan) => Ok(Json(GeneratePlanResponse { plan })),
        Err(e) => {
            warn!(error = %e, "Blueprint generation failed");
            state
                .notifier
                .publish(Notification::error("Failed to generate integration plan using AI."));
            Err(e)
        }
    }
}
