//! Catalog discovery and detail endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discovery::{self, ALL_CATEGORIES};
use crate::error::{AppError, Result};
use crate::flow::{self, DetailTab, InstallState};
use crate::models::{Integration, IntegrationInstance, Review};
use crate::state::AppState;

/// Query parameters for the discovery endpoint
#[derive(Debug, Deserialize)]
pub struct DiscoveryQuery {
    /// Free-text search over name and short description
    #[serde(default)]
    pub q: String,
    /// Category label, or "All"
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

/// Response for the discovery endpoint
#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub total: usize,
    pub integrations: Vec<Integration>,
}

/// GET /api/v1/integrations
///
/// Filtered catalog view, order-preserving.
///
/// Query parameters:
/// - q: case-insensitive substring over name/short description (default: "")
/// - category: category label filter (default: "All")
pub async fn list_integrations(
    State(state): State<AppState>,
    Query(params): Query<DiscoveryQuery>,
) -> Json<DiscoveryResponse> {
    let matches = discovery::filter(state.catalog.all(), &params.q, &params.category);
    Json(DiscoveryResponse {
        total: matches.len(),
        integrations: matches.into_iter().cloned().collect(),
    })
}

/// Response for the categories endpoint
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

/// GET /api/v1/integrations/categories
///
/// Distinct category labels present in the catalog, first-appearance order
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// Response for the detail/installation view
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub integration: Integration,
    pub reviews: Vec<Review>,
    pub install_state: InstallState,
    pub instances: Vec<IntegrationInstance>,
    /// First listed plan, pre-selected in the view; absent when the plan
    /// list is empty (install is still permitted then)
    pub default_plan_id: Option<Uuid>,
    /// Display tab the view opens on; never persisted across closes
    pub default_tab: DetailTab,
}

/// GET /api/v1/integrations/:id
///
/// Everything the detail view needs in one read: the catalog entry, its
/// reviews, the viewer's install state, current instances, and the default
/// plan/tab selections.
pub async fn integration_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DetailResponse>> {
    let integration = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("integration {id} not found")))?;

    Ok(Json(DetailResponse {
        integration: integration.clone(),
        reviews: state
            .catalog
            .reviews_for(id)
            .into_iter()
            .cloned()
            .collect(),
        install_state: flow::install_state(&state.registry, id),
        instances: state.registry.instances_for(id),
        default_plan_id: flow::default_plan(integration).map(|p| p.id),
        default_tab: DetailTab::default(),
    }))
}
