//! Nexus Hub - integration marketplace & developer portal service

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_hub::catalog::Catalog;
use nexus_hub::routes;
use nexus_hub::services::advisory::{GeminiAdvisor, PlanAdvisor};
use nexus_hub::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_hub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration
    let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let notify_capacity: usize = std::env::var("NOTIFY_CAPACITY")
        .unwrap_or_else(|_| "64".to_string())
        .parse()?;

    // Load the seeded catalog
    let catalog = Catalog::seeded();
    info!(integrations = catalog.len(), "Catalog loaded");

    // AI plan advisory (optional; disabled without a credential)
    let advisor: Option<Arc<dyn PlanAdvisor>> = match GeminiAdvisor::from_env() {
        Some(advisor) => Some(Arc::new(advisor)),
        None => {
            info!("GEMINI_API_KEY not set, AI plan advisory disabled");
            None
        }
    };

    let state = AppState::new(catalog, advisor, notify_capacity);
    let app = routes::router(state);

    info!(
        "Nexus Hub v{} starting on {}",
        env!("CARGO_PKG_VERSION"),
        listen_addr
    );

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
