//! Immutable catalog store
//!
//! Exclusively owns `Integration` and `Review` records plus the read-only
//! code snippet library. Everything here is fixed at construction; the rest
//! of the system only reads.

use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{CodeSnippet, Integration, PricingModel, Review};
use crate::seed;

/// The marketplace catalog, loaded once at startup
pub struct Catalog {
    integrations: Vec<Integration>,
    reviews: Vec<Review>,
    snippets: Vec<CodeSnippet>,
}

impl Catalog {
    /// Build a catalog from explicit collections, checking the catalog
    /// invariants: unique integration ids, plans present on paid pricing
    /// models, reviews referencing existing entries with ratings in 1..=5.
    ///
    /// Panics on violation; seed data is the only source of these records
    /// and a bad seed is a programming error.
    pub fn new(
        integrations: Vec<Integration>,
        reviews: Vec<Review>,
        snippets: Vec<CodeSnippet>,
    ) -> Self {
        let mut seen = HashSet::new();
        for integration in &integrations {
            assert!(
                seen.insert(integration.id),
                "duplicate integration id {}",
                integration.id
            );
            assert!(
                integration.pricing_model == PricingModel::Free
                    || !integration.pricing_plans.is_empty(),
                "integration {} is paid but has no pricing plans",
                integration.name
            );
        }
        for review in &reviews {
            assert!(
                seen.contains(&review.integration_id),
                "review {} references unknown integration",
                review.id
            );
            assert!(
                (1..=5).contains(&review.rating),
                "review {} rating out of bounds",
                review.id
            );
        }

        Self {
            integrations,
            reviews,
            snippets,
        }
    }

    /// Catalog with the standard seed data
    pub fn seeded() -> Self {
        let integrations = seed::integrations();
        let reviews = seed::reviews(&integrations);
        Self::new(integrations, reviews, seed::code_snippets())
    }

    /// All integrations in catalog order
    pub fn all(&self) -> &[Integration] {
        &self.integrations
    }

    /// Look up one integration by id
    pub fn get(&self, id: Uuid) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.id == id)
    }

    /// Distinct category labels, in first-appearance order
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.integrations
            .iter()
            .map(|i| i.category.label())
            .filter(|label| seen.insert(*label))
            .collect()
    }

    /// Reviews for one integration, seed order preserved
    pub fn reviews_for(&self, integration_id: Uuid) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.integration_id == integration_id)
            .collect()
    }

    /// The code snippet library
    pub fn snippets(&self) -> &[CodeSnippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.integrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.integrations.is_empty()
    }
}
