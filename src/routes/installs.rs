//! Install / disconnect endpoints driving the installation registry

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::IntegrationInstance;
use crate::notify::Notification;
use crate::state::AppState;

/// Request body for the install endpoint
#[derive(Debug, Default, Deserialize)]
pub struct InstallRequest {
    /// Selected plan; optional, recorded unvalidated
    #[serde(default)]
    pub plan_id: Option<Uuid>,
}

/// POST /api/v1/integrations/:id/install
///
/// Creates a fresh active instance for the integration. Installing an
/// already-installed integration creates a second concurrent instance.
/// Surfaces a success notification as a side effect.
pub async fn install(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<InstallRequest>,
) -> Result<(StatusCode, Json<IntegrationInstance>)> {
    let integration = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("integration {id} not found")))?;

    let instance = state.registry.install(integration, request.plan_id);
    state.notifier.publish(Notification::success(format!(
        "{} installed successfully!",
        integration.name
    )));

    Ok((StatusCode::CREATED, Json(instance)))
}

/// Response for the disconnect endpoint
#[derive(Debug, Serialize)]
pub struct DisconnectResponse {
    pub integration_id: Uuid,
    /// Instances removed; zero means the disconnect was a no-op
    pub removed: usize,
}

/// DELETE /api/v1/integrations/:id/install
///
/// Removes every instance of the integration, regardless of status.
/// Disconnecting an integration with no instances is not an error.
pub async fn disconnect(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<DisconnectResponse> {
    let removed = state.registry.disconnect(id);
    state
        .notifier
        .publish(Notification::info("Integration disconnected."));

    Json(DisconnectResponse {
        integration_id: id,
        removed,
    })
}

/// Response for the installations listing
#[derive(Debug, Serialize)]
pub struct InstallationsResponse {
    pub total: usize,
    pub instances: Vec<IntegrationInstance>,
}

/// GET /api/v1/installations
///
/// All installed instances, installation order
pub async fn list_installations(State(state): State<AppState>) -> Json<InstallationsResponse> {
    let instances = state.registry.instances();
    Json(InstallationsResponse {
        total: instances.len(),
        instances,
    })
}
