//! Deterministic seed data for the marketplace
//!
//! Mirrors the production catalog shape: 24 integrations cycling the 12
//! categories, each with a free Starter and a paid Business plan and three
//! reviews, plus sample webhook subscriptions, delivery logs, and the code
//! snippet library. No RNG: every derived number comes from the entry index
//! so tests can assert on the output.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{
    CodeSnippet, Integration, IntegrationCategory, IntegrationFeature, IntegrationStatus,
    IntegrationTag, PlanInterval, PricingModel, PricingPlan, Review, SnippetLanguage,
    WebhookEvent, WebhookLog, WebhookStatus, WebhookSubscription,
};

/// Number of integrations in the seeded catalog
pub const CATALOG_SIZE: usize = 24;

/// Reviews attached to each seeded integration
pub const REVIEWS_PER_INTEGRATION: usize = 3;

const TAGS: [IntegrationTag; 11] = [
    IntegrationTag::Popular,
    IntegrationTag::New,
    IntegrationTag::Free,
    IntegrationTag::Premium,
    IntegrationTag::Enterprise,
    IntegrationTag::DataSync,
    IntegrationTag::Automation,
    IntegrationTag::Reporting,
    IntegrationTag::Notifications,
    IntegrationTag::Payments,
    IntegrationTag::DevOps,
];

const API_ENDPOINTS: [&str; 10] = [
    "GET /customers",
    "POST /customers",
    "PUT /customers/{id}",
    "GET /transactions",
    "POST /transactions",
    "GET /accounts/{id}/balance",
    "POST /payments",
    "GET /invoices",
    "POST /webhooks/subscribe",
    "GET /webhooks/events",
];

struct SeedDeveloper {
    id: Uuid,
    name: String,
    email: String,
    website: String,
}

fn seed_developers() -> Vec<SeedDeveloper> {
    (1..=5)
        .map(|i| SeedDeveloper {
            id: Uuid::new_v4(),
            name: format!("Dev Corp {i}"),
            email: format!("support@devcorp{i}.com"),
            website: format!("https://devcorp{i}.com"),
        })
        .collect()
}

fn seed_plans(currency: &str) -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: Uuid::new_v4(),
            name: "Starter".to_string(),
            description: "Good for small teams.".to_string(),
            price: 0.0,
            currency: currency.to_string(),
            interval: None,
            features: vec!["Basic Sync".to_string(), "5 Users".to_string()],
            is_trial_available: false,
            trial_duration_days: None,
        },
        PricingPlan {
            id: Uuid::new_v4(),
            name: "Business".to_string(),
            description: "Advanced features.".to_string(),
            price: 49.0,
            currency: currency.to_string(),
            interval: Some(PlanInterval::Month),
            features: vec![
                "Advanced Analytics".to_string(),
                "Unlimited Users".to_string(),
                "Priority Support".to_string(),
            ],
            is_trial_available: true,
            trial_duration_days: Some(14),
        },
    ]
}

/// Build the seeded integration catalog
pub fn integrations() -> Vec<Integration> {
    let developers = seed_developers();
    let now = Utc::now();

    (0..CATALOG_SIZE)
        .map(|i| {
            let dev = &developers[i % developers.len()];
            let category = IntegrationCategory::ALL[i % IntegrationCategory::ALL.len()];
            let name = format!("{} Suite {}", category.label(), i + 1);
            let slug = name.to_lowercase().replace(' ', "-");
            let category_lower = category.label().to_lowercase();

            Integration {
                id: Uuid::new_v4(),
                name,
                slug: slug.clone(),
                short_description: format!(
                    "Streamline your {category_lower} workflows with deep Demo Bank integration."
                ),
                long_description: format!(
                    "This integration provides end-to-end connectivity between your existing \
                     {category_lower} tools and our core banking APIs. Automate data entry, \
                     synchronize customer profiles, and generate real-time financial reports \
                     without leaving your dashboard."
                ),
                logo_url: format!("https://picsum.photos/seed/{slug}/200/200"),
                banner_url: Some(format!("https://picsum.photos/seed/{slug}banner/1200/400")),
                category,
                tags: vec![TAGS[i % TAGS.len()], IntegrationTag::Popular],
                developer_id: dev.id,
                developer_name: dev.name.clone(),
                website: dev.website.clone(),
                documentation_url: format!("{}/docs", dev.website),
                support_email: dev.email.clone(),
                features: vec![
                    IntegrationFeature {
                        id: Uuid::new_v4(),
                        name: "Live Sync".to_string(),
                        description: "Instant synchronization of all core entities.".to_string(),
                    },
                    IntegrationFeature {
                        id: Uuid::new_v4(),
                        name: "Audit Logging".to_string(),
                        description: "Comprehensive logs of every API interaction.".to_string(),
                    },
                ],
                pricing_model: PricingModel::Freemium,
                pricing_plans: seed_plans("USD"),
                average_rating: 3.5 + (i % 4) as f64 * 0.5,
                total_reviews: 12 + (i as u32 * 37) % 500,
                installation_count: 100 + (i as u64 * 913) % 10_000,
                status: IntegrationStatus::Active,
                created_at: now - Duration::days(30 + i as i64),
                updated_at: now,
                setup_guide_markdown: "# Setup Guide\n1. Generate an API Key\n\
                                       2. Configure the sync interval\n3. Start the service."
                    .to_string(),
                api_endpoints_needed: vec![
                    API_ENDPOINTS[0].to_string(),
                    API_ENDPOINTS[1].to_string(),
                ],
            }
        })
        .collect()
}

/// Build seeded reviews, three per catalog entry, ratings alternating 4/5
pub fn reviews(catalog: &[Integration]) -> Vec<Review> {
    let now = Utc::now();
    catalog
        .iter()
        .flat_map(|integration| {
            (0..REVIEWS_PER_INTEGRATION).map(move |i| Review {
                id: Uuid::new_v4(),
                integration_id: integration.id,
                user_id: Uuid::new_v4(),
                user_name: format!("User {}", i + 1),
                rating: 4 + (i as u8 % 2),
                title: "Excellent Integration".to_string(),
                comment: "Worked seamlessly with our existing infrastructure. Highly \
                          recommend for any enterprise looking to automate financial data."
                    .to_string(),
                created_at: now - Duration::days(i as i64),
            })
        })
        .collect()
}

/// Sample webhook subscriptions for the developer portal list view
pub fn webhook_subscriptions() -> Vec<WebhookSubscription> {
    let now = Utc::now();
    let entries: [(&str, &[WebhookEvent], WebhookStatus, u32); 3] = [
        (
            "https://hooks.devcorp1.com/bank-events",
            &[
                WebhookEvent::CustomerCreated,
                WebhookEvent::CustomerUpdated,
                WebhookEvent::TransactionCompleted,
            ],
            WebhookStatus::Active,
            0,
        ),
        (
            "https://hooks.devcorp1.com/invoices",
            &[WebhookEvent::InvoicePaid, WebhookEvent::InvoiceCreated],
            WebhookStatus::Inactive,
            2,
        ),
        (
            "https://legacy.devcorp1.com/callback",
            &[WebhookEvent::IntegrationInstalled],
            WebhookStatus::Suspended,
            17,
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (url, events, status, failures))| WebhookSubscription {
            id: Uuid::new_v4(),
            developer_id: "dev-1".to_string(),
            integration_id: None,
            callback_url: url.to_string(),
            events: events.to_vec(),
            secret: format!("whsec_{}", Uuid::new_v4().simple()),
            is_active: status == WebhookStatus::Active,
            created_at: now - Duration::days(90 - i as i64 * 10),
            updated_at: now - Duration::days(i as i64),
            last_triggered_at: (failures == 0).then(|| now - Duration::hours(1)),
            failure_count: failures,
            status,
        })
        .collect()
}

/// Sample delivery logs attached to the seeded subscriptions
pub fn webhook_logs(subscriptions: &[WebhookSubscription]) -> Vec<WebhookLog> {
    let now = Utc::now();
    subscriptions
        .iter()
        .flat_map(|sub| {
            sub.events.iter().enumerate().map(move |(i, &event)| {
                let ok = sub.status == WebhookStatus::Active;
                WebhookLog {
                    id: Uuid::new_v4(),
                    subscription_id: sub.id,
                    event_type: event,
                    payload: format!("{{\"event\":{}}}", serde_json::json!(event)),
                    status_code: if ok { 200 } else { 503 },
                    response_body: if ok { "ok".to_string() } else { String::new() },
                    attempted_at: now - Duration::minutes(i as i64 * 5),
                    is_success: ok,
                    error: (!ok).then(|| "endpoint unavailable".to_string()),
                }
            })
        })
        .collect()
}

/// The read-only code snippet library
pub fn code_snippets() -> Vec<CodeSnippet> {
    vec![
        CodeSnippet {
            id: Uuid::new_v4(),
            name: "Basic Auth Example".to_string(),
            language: SnippetLanguage::Javascript,
            description: "How to authenticate against our banking APIs.".to_string(),
            code: "const fetch = require('node-fetch');\n\n\
                   async function getBalance(accId) {\n  \
                   const res = await fetch(`https://api.demobank.com/accounts/${accId}/balance`, {\n    \
                   headers: { 'Authorization': 'Bearer YOUR_KEY' }\n  });\n  \
                   return res.json();\n}"
                .to_string(),
            api_endpoints_used: vec!["GET /accounts/{id}/balance".to_string()],
        },
        CodeSnippet {
            id: Uuid::new_v4(),
            name: "Python Transaction Sync".to_string(),
            language: SnippetLanguage::Python,
            description: "Syncing transactions with a local database.".to_string(),
            code: "import requests\n\ndef sync_transactions():\n    \
                   headers = {\"Authorization\": \"Bearer YOUR_KEY\"}\n    \
                   r = requests.get(\"https://api.demobank.com/transactions\", headers=headers)\n    \
                   for txn in r.json():\n        process_transaction(txn)"
                .to_string(),
            api_endpoints_used: vec!["GET /transactions".to_string()],
        },
    ]
}
