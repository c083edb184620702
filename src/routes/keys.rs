//! Developer API key endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::ApiKey;
use crate::notify::Notification;
use crate::state::AppState;

/// Response for the key listing, newest first
#[derive(Debug, Serialize)]
pub struct KeysResponse {
    pub total: usize,
    pub keys: Vec<ApiKey>,
}

/// GET /api/v1/developer/keys
pub async fn list_keys(State(state): State<AppState>) -> Json<KeysResponse> {
    let keys = state.portal.keys();
    Json(KeysResponse {
        total: keys.len(),
        keys,
    })
}

/// Request body for key creation
#[derive(Debug, Deserialize)]
pub struct CreateKeyRequest {
    pub name: String,
}

/// POST /api/v1/developer/keys
///
/// Generates a new API key and prepends it to the list
pub async fn create_key(
    State(state): State<AppState>,
    Json(request): Json<CreateKeyRequest>,
) -> Result<(StatusCode, Json<ApiKey>)> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest("key name must not be empty".into()));
    }

    let key = state.portal.add_key(&request.name);
    state
        .notifier
        .publish(Notification::success("Production API Key generated."));

    Ok((StatusCode::CREATED, Json(key)))
}

/// DELETE /api/v1/developer/keys/:id
///
/// Removes a key by id; deleting an unknown id is a silent no-op
pub async fn delete_key(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state.portal.delete_key(id);
    StatusCode::NO_CONTENT
}
