//! Core domain models for the integration marketplace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Category an integration is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationCategory {
    #[serde(rename = "CRM")]
    Crm,
    Analytics,
    Marketing,
    Finance,
    Communication,
    Productivity,
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    Security,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "E-commerce")]
    Ecommerce,
    #[serde(rename = "Data Sync")]
    DataSync,
    #[serde(rename = "AI & ML")]
    AiMl,
}

impl IntegrationCategory {
    /// All categories, in catalog display order
    pub const ALL: [IntegrationCategory; 12] = [
        IntegrationCategory::Crm,
        IntegrationCategory::Analytics,
        IntegrationCategory::Marketing,
        IntegrationCategory::Finance,
        IntegrationCategory::Communication,
        IntegrationCategory::Productivity,
        IntegrationCategory::DeveloperTools,
        IntegrationCategory::Security,
        IntegrationCategory::Hr,
        IntegrationCategory::Ecommerce,
        IntegrationCategory::DataSync,
        IntegrationCategory::AiMl,
    ];

    /// Human-readable label, as exposed in filter parameters
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationCategory::Crm => "CRM",
            IntegrationCategory::Analytics => "Analytics",
            IntegrationCategory::Marketing => "Marketing",
            IntegrationCategory::Finance => "Finance",
            IntegrationCategory::Communication => "Communication",
            IntegrationCategory::Productivity => "Productivity",
            IntegrationCategory::DeveloperTools => "Developer Tools",
            IntegrationCategory::Security => "Security",
            IntegrationCategory::Hr => "HR",
            IntegrationCategory::Ecommerce => "E-commerce",
            IntegrationCategory::DataSync => "Data Sync",
            IntegrationCategory::AiMl => "AI & ML",
        }
    }
}

/// Marketing tag attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationTag {
    Popular,
    New,
    Free,
    Premium,
    Enterprise,
    DataSync,
    Automation,
    Reporting,
    Notifications,
    Payments,
    DevOps,
}

/// How an integration is priced overall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    Free,
    Freemium,
    Subscription,
    #[serde(rename = "Per-usage")]
    PerUsage,
    Enterprise,
}

/// Billing interval for a paid plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanInterval {
    Month,
    Year,
    OneTime,
}

/// One purchasable tier of an integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Display price in `currency` units; no payment processing happens here
    pub price: f64,
    pub currency: String,
    pub interval: Option<PlanInterval>,
    pub features: Vec<String>,
    pub is_trial_available: bool,
    pub trial_duration_days: Option<u32>,
}

/// Listing status of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationStatus {
    Active,
    PendingReview,
    Rejected,
    Draft,
    Archived,
}

/// A single advertised capability of an integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationFeature {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// A catalog entry: a third-party connector to the banking platform.
///
/// Immutable after catalog load; there are no mutation operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    /// Unique across the catalog
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub long_description: String,
    pub logo_url: String,
    pub banner_url: Option<String>,
    pub category: IntegrationCategory,
    pub tags: Vec<IntegrationTag>,
    pub developer_id: Uuid,
    pub developer_name: String,
    pub website: String,
    pub documentation_url: String,
    pub support_email: String,
    pub features: Vec<IntegrationFeature>,
    pub pricing_model: PricingModel,
    /// Non-empty whenever `pricing_model` is not `Free`
    pub pricing_plans: Vec<PricingPlan>,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub installation_count: u64,
    pub status: IntegrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub setup_guide_markdown: String,
    pub api_endpoints_needed: Vec<String>,
}

/// Health of an installed instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    Active,
    Disconnected,
    Error,
}

/// A user's installed copy of an integration, with its own configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationInstance {
    pub id: Uuid,
    pub integration_id: Uuid,
    pub user_id: String,
    pub installed_at: DateTime<Utc>,
    pub status: InstanceStatus,
    /// Opaque per-instance settings; never interpreted by the registry
    #[serde(default)]
    pub configuration: BTreeMap<String, serde_json::Value>,
    pub plan_id: Option<Uuid>,
}

/// A user review of a catalog entry. Seed data only; no create path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub integration_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    /// Always within 1..=5
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Permission grantable to an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPermission {
    ReadBanking,
    ManageWebhooks,
}

/// A developer's API credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: Uuid,
    /// Opaque secret token; immutable once created
    pub key: String,
    pub name: String,
    pub developer_id: String,
    pub created_at: DateTime<Utc>,
    pub permissions: Vec<KeyPermission>,
    pub is_active: bool,
}

/// Platform event a webhook subscription can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEvent {
    #[serde(rename = "customer.created")]
    CustomerCreated,
    #[serde(rename = "customer.updated")]
    CustomerUpdated,
    #[serde(rename = "transaction.completed")]
    TransactionCompleted,
    #[serde(rename = "transaction.failed")]
    TransactionFailed,
    #[serde(rename = "invoice.paid")]
    InvoicePaid,
    #[serde(rename = "invoice.created")]
    InvoiceCreated,
    #[serde(rename = "integration.installed")]
    IntegrationInstalled,
    #[serde(rename = "integration.uninstalled")]
    IntegrationUninstalled,
}

/// Delivery state of a webhook subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    Active,
    Inactive,
    Suspended,
}

/// A developer's webhook endpoint registration. Read-only in this service;
/// there is no delivery engine behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSubscription {
    pub id: Uuid,
    pub developer_id: String,
    pub integration_id: Option<Uuid>,
    pub callback_url: String,
    pub events: Vec<WebhookEvent>,
    pub secret: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_triggered_at: Option<DateTime<Utc>>,
    pub failure_count: u32,
    pub status: WebhookStatus,
}

/// A historical delivery attempt for a webhook subscription (sample data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookLog {
    pub id: Uuid,
    pub subscription_id: Uuid,
    pub event_type: WebhookEvent,
    pub payload: String,
    pub status_code: u16,
    pub response_body: String,
    pub attempted_at: DateTime<Utc>,
    pub is_success: bool,
    pub error: Option<String>,
}

/// Language of a sample code snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    Javascript,
    Python,
    Go,
    Ruby,
    Java,
    Curl,
    Shell,
}

/// A ready-made code example from the snippet library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub id: Uuid,
    pub name: String,
    pub language: SnippetLanguage,
    pub description: String,
    pub code: String,
    pub api_endpoints_used: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_serde() {
        for category in IntegrationCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: IntegrationCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn webhook_events_use_dotted_names() {
        let json = serde_json::to_string(&WebhookEvent::TransactionCompleted).unwrap();
        assert_eq!(json, "\"transaction.completed\"");
    }

    #[test]
    fn instance_status_is_snake_case() {
        let json = serde_json::to_string(&InstanceStatus::Disconnected).unwrap();
        assert_eq!(json, "\"disconnected\"");
    }
}
