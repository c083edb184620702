//! Developer resource store
//!
//! Exclusively owns `ApiKey` and `WebhookSubscription` records for the
//! developer portal. Keys are mutable (create/delete); webhook
//! subscriptions and their delivery logs are seeded and read-only, since no
//! delivery engine exists behind them.

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::ids::SharedIds;
use crate::models::{ApiKey, KeyPermission, WebhookLog, WebhookSubscription};
use crate::seed;

/// Token prefix for generated API keys
pub const KEY_PREFIX: &str = "nk_";

/// Placeholder developer identity until real authentication exists
pub const PLACEHOLDER_DEVELOPER: &str = "dev-1";

/// Store of a developer's API keys and webhook registrations
#[derive(Clone)]
pub struct DeveloperStore {
    keys: Arc<RwLock<Vec<ApiKey>>>,
    subscriptions: Arc<Vec<WebhookSubscription>>,
    logs: Arc<Vec<WebhookLog>>,
    ids: SharedIds,
}

impl DeveloperStore {
    pub fn new(ids: SharedIds) -> Self {
        let subscriptions = seed::webhook_subscriptions();
        let logs = seed::webhook_logs(&subscriptions);
        Self {
            keys: Arc::new(RwLock::new(Vec::new())),
            subscriptions: Arc::new(subscriptions),
            logs: Arc::new(logs),
            ids,
        }
    }

    /// Create a new API key and prepend it to the list.
    ///
    /// The token is the fixed prefix plus a separator-free v4 identifier;
    /// once created it never changes. Newest-first ordering is a contract
    /// of the portal list view, not incidental.
    pub fn add_key(&self, name: &str) -> ApiKey {
        let key = ApiKey {
            id: self.ids.next_id(),
            key: format!("{KEY_PREFIX}{}", self.ids.next_id().simple()),
            name: name.to_string(),
            developer_id: PLACEHOLDER_DEVELOPER.to_string(),
            created_at: Utc::now(),
            permissions: vec![KeyPermission::ReadBanking, KeyPermission::ManageWebhooks],
            is_active: true,
        };

        self.keys.write().insert(0, key.clone());
        info!(key_id = %key.id, name = %key.name, "API key generated");
        key
    }

    /// Delete a key by id; silent no-op when absent. Returns whether a key
    /// was removed.
    pub fn delete_key(&self, id: Uuid) -> bool {
        let mut keys = self.keys.write();
        let before = keys.len();
        keys.retain(|k| k.id != id);
        let removed = before != keys.len();
        drop(keys);

        if removed {
            info!(key_id = %id, "API key deleted");
        }
        removed
    }

    /// Snapshot of all keys, newest first
    pub fn keys(&self) -> Vec<ApiKey> {
        self.keys.read().clone()
    }

    /// All webhook subscriptions (read-only)
    pub fn subscriptions(&self) -> &[WebhookSubscription] {
        &self.subscriptions
    }

    /// Delivery logs for one subscription, or `None` if the subscription
    /// does not exist
    pub fn logs_for(&self, subscription_id: Uuid) -> Option<Vec<&WebhookLog>> {
        if !self.subscriptions.iter().any(|s| s.id == subscription_id) {
            return None;
        }
        Some(
            self.logs
                .iter()
                .filter(|l| l.subscription_id == subscription_id)
                .collect(),
        )
    }
}
