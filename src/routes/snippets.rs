//! Code snippet library endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::CodeSnippet;
use crate::state::AppState;

/// Response for the snippet listing
#[derive(Debug, Serialize)]
pub struct SnippetsResponse {
    pub total: usize,
    pub snippets: Vec<CodeSnippet>,
}

/// GET /api/v1/developer/snippets
pub async fn list_snippets(State(state): State<AppState>) -> Json<SnippetsResponse> {
    let snippets = state.catalog.snippets().to_vec();
    Json(SnippetsResponse {
        total: snippets.len(),
        snippets,
    })
}
