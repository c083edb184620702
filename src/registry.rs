//! Installation registry
//!
//! Exclusively owns `IntegrationInstance` records. All mutation happens
//! behind one write lock and replaces the collection in a single step, so
//! readers only ever observe complete states.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::ids::SharedIds;
use crate::models::{InstanceStatus, Integration, IntegrationInstance};

/// Placeholder identity until real authentication exists
pub const PLACEHOLDER_USER: &str = "current-user-id";

/// Mutable registry of installed integration instances
#[derive(Clone)]
pub struct InstallRegistry {
    instances: Arc<RwLock<Vec<IntegrationInstance>>>,
    ids: SharedIds,
}

impl InstallRegistry {
    pub fn new(ids: SharedIds) -> Self {
        Self {
            instances: Arc::new(RwLock::new(Vec::new())),
            ids,
        }
    }

    /// Install an integration, creating a fresh active instance.
    ///
    /// Never rejects and never deduplicates: installing an integration that
    /// is already installed creates a second concurrent instance. The plan
    /// id is recorded as supplied, unvalidated against the integration's
    /// plan list.
    pub fn install(
        &self,
        integration: &Integration,
        plan_id: Option<Uuid>,
    ) -> IntegrationInstance {
        let instance = IntegrationInstance {
            id: self.ids.next_id(),
            integration_id: integration.id,
            user_id: PLACEHOLDER_USER.to_string(),
            installed_at: Utc::now(),
            status: InstanceStatus::Active,
            configuration: BTreeMap::new(),
            plan_id,
        };

        self.instances.write().push(instance.clone());
        info!(
            integration_id = %integration.id,
            instance_id = %instance.id,
            name = %integration.name,
            "Integration installed"
        );
        instance
    }

    /// Remove every instance of the given integration, regardless of
    /// status. Removing zero instances is a silent no-op. Returns the
    /// number of instances removed.
    pub fn disconnect(&self, integration_id: Uuid) -> usize {
        let mut instances = self.instances.write();
        let before = instances.len();
        instances.retain(|i| i.integration_id != integration_id);
        let removed = before - instances.len();
        drop(instances);

        if removed > 0 {
            info!(integration_id = %integration_id, removed, "Integration disconnected");
        }
        removed
    }

    /// True iff at least one instance of the integration exists, whatever
    /// its status field says. An `Error`-status instance still counts.
    pub fn is_installed(&self, integration_id: Uuid) -> bool {
        self.instances
            .read()
            .iter()
            .any(|i| i.integration_id == integration_id)
    }

    /// Snapshot of all instances, installation order
    pub fn instances(&self) -> Vec<IntegrationInstance> {
        self.instances.read().clone()
    }

    /// Snapshot of the instances for one integration
    pub fn instances_for(&self, integration_id: Uuid) -> Vec<IntegrationInstance> {
        self.instances
            .read()
            .iter()
            .filter(|i| i.integration_id == integration_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    #[cfg(test)]
    fn set_status(&self, instance_id: Uuid, status: InstanceStatus) {
        let mut instances = self.instances.write();
        if let Some(instance) = instances.iter_mut().find(|i| i.id == instance_id) {
            instance.status = status;
        }
    }
}
