//! Webhook subscription endpoints (read-only; no delivery engine exists)

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{WebhookLog, WebhookSubscription};
use crate::state::AppState;

/// Response for the subscription listing
#[derive(Debug, Serialize)]
pub struct SubscriptionsResponse {
    pub total: usize,
    pub subscriptions: Vec<WebhookSubscription>,
}

/// GET /api/v1/developer/webhooks
pub async fn list_subscriptions(State(state): State<AppState>) -> Json<SubscriptionsResponse> {
    let subscriptions = state.portal.subscriptions().to_vec();
    Json(SubscriptionsResponse {
        total: subscriptions.len(),
        subscriptions,
    })
}

/// Response for the delivery log listing
#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub subscription_id: Uuid,
    pub count: usize,
    pub logs: Vec<WebhookLog>,
}

/// GET /api/v1/developer/webhooks/:id/logs
///
/// Sample delivery history for one subscription
pub async fn subscription_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LogsResponse>> {
    let logs = state
        .portal
        .logs_for(id)
        .ok_or_else(|| AppError::NotFound(format!("webhook subscription {id} not found")))?;

    Ok(Json(LogsResponse {
        subscription_id: id,
        count: logs.len(),
        logs: logs.into_iter().cloned().collect(),
    }))
}
