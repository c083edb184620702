//! AI plan advisory boundary
//!
//! A single capability: turn a free-text problem statement into a formatted
//! integration blueprint. The provider sits behind [`PlanAdvisor`] so tests
//! substitute a deterministic stub instead of a live call. One blocking
//! round trip per request; no retry, no streaming, no cancellation.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{AppError, Result};

/// Default Gemini model used for blueprint generation
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Generates integration blueprints from natural-language prompts
#[async_trait]
pub trait PlanAdvisor: Send + Sync {
    /// Produce a blueprint for the given problem statement. The response
    /// is unstructured text, rendered verbatim by clients.
    async fn generate_plan(&self, prompt: &str) -> Result<String>;
}

/// Wrap the user's prompt in the fixed architect template
pub fn build_prompt(prompt: &str) -> String {
    format!(
        "You are an expert enterprise software architect. Provide a high-level \
         technical integration plan for: \"{prompt}\".\n\n\
         Structure the response as follows:\n\
         1. Integration Overview\n\
         2. Recommended Tech Stack\n\
         3. Key Demo Bank API Endpoints Required (use REST style e.g., GET /accounts)\n\
         4. Potential Challenges & Mitigation\n\
         5. Recommended Integration Category\n\n\
         Keep it professional, concise and architecturally sound."
    )
}

/// Gemini-backed advisor
pub struct GeminiAdvisor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiAdvisor {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Build from `GEMINI_API_KEY` / `GEMINI_MODEL`. Returns `None` when no
    /// credential is configured; the feature is then disabled and callers
    /// fail with a configuration error before any network attempt.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok()?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        info!(model = %model, "AI plan advisory enabled");
        Some(Self::new(api_key, model))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl PlanAdvisor for GeminiAdvisor {
    async fn generate_plan(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_prompt(prompt) }]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "topP": 0.9,
                "maxOutputTokens": 1024,
            }
        });

        debug!(model = %self.model, "Requesting integration blueprint");

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "provider returned {status}: {detail}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("malformed response: {e}")))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::Generation(
                "no response generated from AI".to_string(),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Deterministic advisor returning a canned blueprint
    pub struct StaticAdvisor {
        pub plan: String,
    }

    #[async_trait]
    impl PlanAdvisor for StaticAdvisor {
        async fn generate_plan(&self, _prompt: &str) -> Result<String> {
            Ok(self.plan.clone())
        }
    }

    /// Advisor whose provider always fails
    pub struct FailingAdvisor;

    #[async_trait]
    impl PlanAdvisor for FailingAdvisor {
        async fn generate_plan(&self, _prompt: &str) -> Result<String> {
            Err(AppError::Generation("provider exploded".to_string()))
        }
    }
}
