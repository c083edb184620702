//! HTTP route handlers and router assembly

pub mod advisory;
pub mod catalog;
pub mod health;
pub mod installs;
pub mod keys;
pub mod snippets;
pub mod webhooks;
pub mod ws;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router over shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Catalog discovery
        .route("/api/v1/integrations", get(catalog::list_integrations))
        .route(
            "/api/v1/integrations/categories",
            get(catalog::list_categories),
        )
        .route("/api/v1/integrations/{id}", get(catalog::integration_detail))
        // Installation registry
        .route(
            "/api/v1/integrations/{id}/install",
            post(installs::install).delete(installs::disconnect),
        )
        .route("/api/v1/installations", get(installs::list_installations))
        // Developer portal
        .route(
            "/api/v1/developer/keys",
            get(keys::list_keys).post(keys::create_key),
        )
        .route("/api/v1/developer/keys/{id}", delete(keys::delete_key))
        .route(
            "/api/v1/developer/webhooks",
            get(webhooks::list_subscriptions),
        )
        .route(
            "/api/v1/developer/webhooks/{id}/logs",
            get(webhooks::subscription_logs),
        )
        .route("/api/v1/developer/snippets", get(snippets::list_snippets))
        // AI advisory
        .route("/api/v1/advisory/plan", post(advisory::generate_plan))
        // Notification stream
        .route("/api/v1/notifications/ws", get(ws::ws_handler))
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::advisory::testing::{FailingAdvisor, StaticAdvisor};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(state: &AppState) -> Router {
        router(state.clone())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn discovery_endpoint_filters_and_preserves_order() {
        let state = AppState::seeded_for_tests(None);

        let response = app(&state)
            .oneshot(get("/api/v1/integrations?q=finance&category=All"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let integrations = json["integrations"].as_array().unwrap();
        assert!(!integrations.is_empty());
        for entry in integrations {
            let name = entry["name"].as_str().unwrap().to_lowercase();
            let desc = entry["short_description"].as_str().unwrap().to_lowercase();
            assert!(name.contains("finance") || desc.contains("finance"));
        }
    }

    #[tokio::test]
    async fn unfiltered_discovery_returns_the_whole_catalog() {
        let state = AppState::seeded_for_tests(None);
        let response = app(&state).oneshot(get("/api/v1/integrations")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"].as_u64().unwrap(), state.catalog.len() as u64);
    }

    #[tokio::test]
    async fn install_disconnect_cycle_through_the_api() {
        let state = AppState::seeded_for_tests(None);
        let id = state.catalog.all()[0].id;

        // Detail starts not installed, default plan is the first one.
        let detail = body_json(
            app(&state)
                .oneshot(get(&format!("/api/v1/integrations/{id}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(detail["install_state"], "not_installed");
        assert_eq!(detail["default_tab"], "overview");
        assert_eq!(
            detail["default_plan_id"],
            detail["integration"]["pricing_plans"][0]["id"]
        );

        // Install twice: two distinct concurrent instances.
        let first = app(&state)
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/integrations/{id}/install"),
                "{}",
            ))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        let first = body_json(first).await;

        let second = body_json(
            app(&state)
                .oneshot(json_request(
                    "POST",
                    &format!("/api/v1/integrations/{id}/install"),
                    "{}",
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_ne!(first["id"], second["id"]);

        let detail = body_json(
            app(&state)
                .oneshot(get(&format!("/api/v1/integrations/{id}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(detail["install_state"], "installed");
        assert_eq!(detail["instances"].as_array().unwrap().len(), 2);

        // Disconnect removes both.
        let disconnect = body_json(
            app(&state)
                .oneshot(
                    Request::builder()
                        .method("DELETE")
                        .uri(format!("/api/v1/integrations/{id}/install"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(disconnect["removed"].as_u64().unwrap(), 2);
        assert!(!state.registry.is_installed(id));
    }

    #[tokio::test]
    async fn installing_an_unknown_integration_is_not_found() {
        let state = AppState::seeded_for_tests(None);
        let response = app(&state)
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/integrations/{}/install", uuid::Uuid::new_v4()),
                "{}",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn key_lifecycle_through_the_api() {
        let state = AppState::seeded_for_tests(None);

        let created = app(&state)
            .oneshot(json_request(
                "POST",
                "/api/v1/developer/keys",
                r#"{"name":"Foo"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        assert!(created["key"].as_str().unwrap().starts_with("nk_"));

        let listed = body_json(app(&state).oneshot(get("/api/v1/developer/keys")).await.unwrap()).await;
        assert_eq!(listed["keys"][0]["id"], created["id"]);

        let deleted = app(&state)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/developer/keys/{}", created["id"].as_str().unwrap()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
        assert!(state.portal.keys().is_empty());
    }

    #[tokio::test]
    async fn empty_key_name_is_rejected() {
        let state = AppState::seeded_for_tests(None);
        let response = app(&state)
            .oneshot(json_request(
                "POST",
                "/api/v1/developer/keys",
                r#"{"name":"  "}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn advisory_without_credential_fails_before_any_network_attempt() {
        let state = AppState::seeded_for_tests(None);
        let response = app(&state)
            .oneshot(json_request(
                "POST",
                "/api/v1/advisory/plan",
                r#"{"prompt":"sync rent to Slack"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn advisory_returns_the_generated_plan_verbatim() {
        let advisor = Arc::new(StaticAdvisor {
            plan: "1. Integration Overview\n...".to_string(),
        });
        let state = AppState::seeded_for_tests(Some(advisor));

        let response = app(&state)
            .oneshot(json_request(
                "POST",
                "/api/v1/advisory/plan",
                r#"{"prompt":"sync rent to Slack"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["plan"], "1. Integration Overview\n...");
    }

    #[tokio::test]
    async fn advisory_provider_failure_maps_to_bad_gateway_and_notifies() {
        let state = AppState::seeded_for_tests(Some(Arc::new(FailingAdvisor)));
        let mut notifications = state.notifier.subscribe();

        let response = app(&state)
            .oneshot(json_request(
                "POST",
                "/api/v1/advisory/plan",
                r#"{"prompt":"anything"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let notification = notifications.try_recv().unwrap();
        assert_eq!(
            serde_json::to_value(notification.kind).unwrap(),
            serde_json::json!("error")
        );
    }

    #[tokio::test]
    async fn webhook_listing_and_logs_are_read_only_views() {
        let state = AppState::seeded_for_tests(None);

        let subs = body_json(
            app(&state)
                .oneshot(get("/api/v1/developer/webhooks"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(subs["total"].as_u64().unwrap(), 3);

        let sub_id = subs["subscriptions"][0]["id"].as_str().unwrap().to_string();
        let logs = body_json(
            app(&state)
                .oneshot(get(&format!("/api/v1/developer/webhooks/{sub_id}/logs")))
                .await
                .unwrap(),
        )
        .await;
        assert!(logs["count"].as_u64().unwrap() > 0);

        let missing = app(&state)
            .oneshot(get(&format!(
                "/api/v1/developer/webhooks/{}/logs",
                uuid::Uuid::new_v4()
            )))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
