//! Discovery filter over the integration catalog
//!
//! A pure, stable filter: the result preserves catalog order and is a
//! function of exactly its three inputs. Handlers recompute it per request;
//! memoization would be an optimization, never a correctness requirement.

use crate::models::Integration;

/// Category value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "All";

/// Filter the catalog by free-text query and category selection.
///
/// An integration matches when the category is [`ALL_CATEGORIES`] or equals
/// its category label, and the query is empty or a case-insensitive
/// substring of its name or short description. The query is not trimmed: a
/// whitespace-only query is an ordinary substring query.
pub fn filter<'a>(
    catalog: &'a [Integration],
    query: &str,
    category: &str,
) -> Vec<&'a Integration> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|integration| {
            let category_matches =
                category == ALL_CATEGORIES || integration.category.label() == category;
            let query_matches = needle.is_empty()
                || integration.name.to_lowercase().contains(&needle)
                || integration.short_description.to_lowercase().contains(&needle);
            category_matches && query_matches
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IntegrationCategory, IntegrationStatus, PricingModel};
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(name: &str, short_description: &str, category: IntegrationCategory) -> Integration {
        Integration {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            short_description: short_description.to_string(),
            long_description: String::new(),
            logo_url: String::new(),
            banner_url: None,
            category,
            tags: vec![],
            developer_id: Uuid::new_v4(),
            developer_name: "Dev Corp".to_string(),
            website: String::new(),
            documentation_url: String::new(),
            support_email: String::new(),
            features: vec![],
            pricing_model: PricingModel::Free,
            pricing_plans: vec![],
            average_rating: 4.0,
            total_reviews: 0,
            installation_count: 0,
            status: IntegrationStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            setup_guide_markdown: String::new(),
            api_endpoints_needed: vec![],
        }
    }

    fn sample_catalog() -> Vec<Integration> {
        vec![
            entry(
                "Finance Suite 1",
                "Streamline your finance workflows.",
                IntegrationCategory::Finance,
            ),
            entry(
                "Analytics Hub",
                "Dashboards over banking data.",
                IntegrationCategory::Analytics,
            ),
            entry(
                "Payroll Connect",
                "HR and payroll finance sync.",
                IntegrationCategory::Hr,
            ),
        ]
    }

    #[test]
    fn empty_query_and_all_category_return_whole_catalog() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "", ALL_CATEGORIES);
        assert_eq!(result.len(), catalog.len());
        let ids: Vec<Uuid> = result.iter().map(|i| i.id).collect();
        let expected: Vec<Uuid> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "finance", ALL_CATEGORIES);
        // "Finance Suite 1" by name, "Payroll Connect" by description.
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Finance Suite 1");
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "zzz", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn category_without_entries_returns_empty() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "", "CRM").is_empty());
    }

    #[test]
    fn category_and_query_combine_conjunctively() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "finance", "HR");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Payroll Connect");
    }

    #[test]
    fn result_is_subset_and_order_preserving() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "a", ALL_CATEGORIES);
        let catalog_ids: Vec<Uuid> = catalog.iter().map(|i| i.id).collect();
        let mut last_pos = 0;
        for item in &result {
            let pos = catalog_ids.iter().position(|id| *id == item.id).unwrap();
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = sample_catalog();
        let once: Vec<Integration> = filter(&catalog, "finance", ALL_CATEGORIES)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, "finance", ALL_CATEGORIES);
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let catalog = vec![
            entry("NoSpacesHere", "compact", IntegrationCategory::Finance),
            entry("Finance Suite 1", "has spaces", IntegrationCategory::Finance),
        ];
        let result = filter(&catalog, " ", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Finance Suite 1");
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter(&[], "", ALL_CATEGORIES).is_empty());
    }
}
