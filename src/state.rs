//! Application state shared across handlers

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::ids;
use crate::notify::NotificationHub;
use crate::portal::DeveloperStore;
use crate::registry::InstallRegistry;
use crate::services::advisory::PlanAdvisor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Immutable integration catalog (integrations, reviews, snippets)
    pub catalog: Arc<Catalog>,
    /// Mutable registry of installed instances
    pub registry: InstallRegistry,
    /// Mutable developer resources (keys) plus read-only webhooks
    pub portal: DeveloperStore,
    /// Optional AI plan advisor (absent when no credential is configured)
    pub advisor: Option<Arc<dyn PlanAdvisor>>,
    /// One-shot user notification hub
    pub notifier: NotificationHub,
}

impl AppState {
    /// Create application state over a catalog and an optional advisor
    pub fn new(
        catalog: Catalog,
        advisor: Option<Arc<dyn PlanAdvisor>>,
        notify_capacity: usize,
    ) -> Self {
        let ids = ids::random();
        Self {
            catalog: Arc::new(catalog),
            registry: InstallRegistry::new(ids.clone()),
            portal: DeveloperStore::new(ids),
            advisor,
            notifier: NotificationHub::new(notify_capacity),
        }
    }

    /// Seeded state for tests and local runs
    #[cfg(test)]
    pub fn seeded_for_tests(advisor: Option<Arc<dyn PlanAdvisor>>) -> Self {
        Self::new(Catalog::seeded(), advisor, 16)
    }
}
