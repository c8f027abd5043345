// ABOUTME: Client asking the generative text service for three more recipes
// ABOUTME: Builds the schema-constrained request and parses the JSON answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # Recipe Generation
//!
//! [`RecipeGenerator::request_more`] sends one request per call and returns
//! the parsed recipes; it never touches the catalog. Appending the result is
//! the caller's job, usually through [`crate::session::Session`].
//!
//! Nothing here retries. A failed call is reported once and the catalog stays
//! as it was.

/// Prompt template and response schema
pub mod prompt;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::{AppError, ErrorCode, GenerationError};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider, ResponseFormat};
use crate::models::Recipe;

/// Number of recipes the prompt asks for
pub const RECIPES_PER_REQUEST: usize = 3;

/// Generates new recipes for a subcategory through an [`LlmProvider`]
#[derive(Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
    temperature: Option<f32>,
}

impl RecipeGenerator {
    /// Wrap a provider.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the provider cannot constrain its output
    /// to JSON.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Result<Self, AppError> {
        if !provider.capabilities().supports_json_mode() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "{} cannot produce JSON output and cannot generate recipes",
                    provider.display_name()
                ),
            ));
        }
        Ok(Self {
            provider,
            model: None,
            temperature: None,
        })
    }

    /// Override the provider's default model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Provider behind this generator
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    fn build_request(&self, category_name: &str, category_description: &str) -> ChatRequest {
        let user_prompt = prompt::more_recipes_prompt(category_name, category_description);
        let messages = if self.provider.capabilities().supports_system_messages() {
            vec![
                ChatMessage::system(prompt::NUTRITIONIST_PERSONA),
                ChatMessage::user(user_prompt),
            ]
        } else {
            vec![ChatMessage::user(format!(
                "{} {user_prompt}",
                prompt::NUTRITIONIST_PERSONA
            ))]
        };
        let mut request = ChatRequest::new(messages);
        if self.provider.capabilities().supports_response_schema() {
            request = request
                .with_response_format(ResponseFormat::json_schema(prompt::recipe_array_schema()));
        } else {
            request = request.with_response_format(ResponseFormat {
                mime_type: "application/json".to_owned(),
                schema: None,
            });
        }
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        request
    }

    /// Ask for new recipes for the named subcategory.
    ///
    /// The returned recipes still carry whatever `id` and `category` the model
    /// produced; `Catalog::append_recipes` binds them to the subcategory.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Provider`] for transport, HTTP or API failures
    /// - [`GenerationError::EmptyResponse`] when the answer has no text or
    ///   only whitespace
    /// - [`GenerationError::MalformedResponse`] when the text is not a JSON
    ///   array of recipes
    #[instrument(skip(self, category_description), fields(provider = self.provider.name()))]
    pub async fn request_more(
        &self,
        category_name: &str,
        category_description: &str,
    ) -> Result<Vec<Recipe>, GenerationError> {
        let request = self.build_request(category_name, category_description);

        info!("Requesting more recipes");
        let response = self.provider.complete(&request).await?;

        let recipes = parse_recipes(&response.content)?;
        if recipes.len() != RECIPES_PER_REQUEST {
            warn!(
                expected = RECIPES_PER_REQUEST,
                received = recipes.len(),
                "Unexpected number of generated recipes"
            );
        }

        info!(
            count = recipes.len(),
            model = %response.model,
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            finish_reason = response.finish_reason.as_deref(),
            "Received generated recipes"
        );
        Ok(recipes)
    }
}

impl std::fmt::Debug for RecipeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeGenerator")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Parse the model's answer as a JSON array of recipes
///
/// # Errors
///
/// Returns `EmptyResponse` for blank text and `MalformedResponse` for
/// anything that does not deserialize into `Vec<Recipe>`.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(GenerationError::malformed)
}

/// Subcategories with a generation request in flight.
///
/// Advisory only: it lets a front end show a busy indicator and refuse a
/// second request for the same subcategory. Different subcategories never
/// block each other.
#[derive(Debug, Clone, Default)]
pub struct PendingGenerations {
    subcategories: HashSet<String>,
}

impl PendingGenerations {
    /// Empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a subcategory as pending; `false` if it already was
    pub fn start(&mut self, subcategory_id: &str) -> bool {
        self.subcategories.insert(subcategory_id.to_owned())
    }

    /// Clear the pending mark; `false` if it was not set
    pub fn finish(&mut self, subcategory_id: &str) -> bool {
        self.subcategories.remove(subcategory_id)
    }

    /// Whether a request for the subcategory is in flight
    #[must_use]
    pub fn is_pending(&self, subcategory_id: &str) -> bool {
        self.subcategories.contains(subcategory_id)
    }

    /// Whether any request is in flight
    #[must_use]
    pub fn any(&self) -> bool {
        !self.subcategories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipes_accepts_missing_chef_tip() {
        let text = r#"[{
            "id": "x1", "name": "Sopa", "time": "20", "difficulty": "Fácil",
            "functionalAction": "Aquece", "ingredients": ["água"],
            "steps": ["ferver"], "category": "Detox"
        }]"#;
        let recipes = parse_recipes(text).unwrap();
        assert_eq!(recipes.len(), 1);
        assert!(recipes[0].chef_tip.is_none());
        assert!(!recipes[0].is_featured);
    }

    #[test]
    fn test_parse_recipes_rejects_blank_and_non_arrays() {
        assert!(matches!(parse_recipes("  \n"), Err(GenerationError::EmptyResponse)));
        assert!(matches!(
            parse_recipes(r#"{"id": "x1"}"#),
            Err(GenerationError::MalformedResponse { .. })
        ));
        assert!(matches!(
            parse_recipes(r#"[{"id": "x1", "name": "Sem passos"}]"#),
            Err(GenerationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_pending_generations_are_per_subcategory() {
        let mut pending = PendingGenerations::new();
        assert!(pending.start("detox"));
        assert!(!pending.start("detox"));
        assert!(pending.start("dor"));
        assert!(pending.finish("detox"));
        assert!(!pending.is_pending("detox"));
        assert!(pending.is_pending("dor"));
        assert!(pending.any());
    }
}
