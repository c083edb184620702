//! Detail-view installation flow
//!
//! The viewer-facing state machine for one integration:
//! `NotInstalled -> install -> Installed -> disconnect -> NotInstalled`.
//! Disconnect is a hard reset; nothing survives back into a later install.
//! Tabs are pure display state and reset to Overview on every open.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Integration, PricingPlan};
use crate::registry::InstallRegistry;

/// Install state of an integration as the viewer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallState {
    NotInstalled,
    Installed,
}

/// Display tab in the detail view; independent of the install state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    #[default]
    Overview,
    Features,
    Reviews,
}

/// Compute the viewer's install state for one integration
pub fn install_state(registry: &InstallRegistry, integration_id: Uuid) -> InstallState {
    if registry.is_installed(integration_id) {
        InstallState::Installed
    } else {
        InstallState::NotInstalled
    }
}

/// The plan pre-selected when the detail view opens: the first listed plan.
/// `None` when the plan list is empty, in which case install is still
/// permitted with no plan.
pub fn default_plan(integration: &Integration) -> Option<&PricingPlan> {
    integration.pricing_plans.first()
}
