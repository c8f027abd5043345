// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a scripted LLM provider and seeded catalog helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `biocozinha`

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use biocozinha::catalog::Seed;
use biocozinha::errors::AppError;
use biocozinha::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use biocozinha::models::Catalog;
use biocozinha::session::Session;

/// Seed catalog shipped with the crate
pub fn seed_catalog() -> Catalog {
    Seed::load().unwrap().catalog
}

/// Fresh session on the seed catalog, past the welcome screen
pub fn dashboard_session() -> Session {
    let mut session = Session::from_seed().unwrap();
    session.enter_dashboard();
    session
}

/// JSON for `count` generated recipes with ids `gen-1..` and the given category
pub fn generated_recipes_json(count: usize, category: &str) -> String {
    let recipes: Vec<serde_json::Value> = (1..=count)
        .map(|n| {
            serde_json::json!({
                "id": format!("gen-{n}"),
                "name": format!("Receita Gerada {n}"),
                "time": "15",
                "difficulty": "Fácil",
                "functionalAction": "Apoio funcional gerado",
                "ingredients": ["ingrediente a", "ingrediente b"],
                "steps": ["passo 1", "passo 2"],
                "category": category
            })
        })
        .collect();
    serde_json::Value::Array(recipes).to_string()
}

/// LLM provider answering from a script and recording every request
pub struct ScriptedProvider {
    capabilities: LlmCapabilities,
    responses: Mutex<VecDeque<Result<String, AppError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Structured-output provider with the given answers, used in order
    pub fn new(responses: Vec<Result<String, AppError>>) -> Arc<Self> {
        Arc::new(Self {
            capabilities: LlmCapabilities::structured_output(),
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider answering once with `text`
    pub fn answering(text: impl Into<String>) -> Arc<Self> {
        Self::new(vec![Ok(text.into())])
    }

    /// Provider with custom capabilities and no answers
    pub fn with_capabilities(capabilities: LlmCapabilities) -> Arc<Self> {
        Arc::new(Self {
            capabilities,
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["scripted-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("scripted provider ran out of answers")));
        next.map(|content| ChatResponse {
            content,
            model: request
                .model
                .clone()
                .unwrap_or_else(|| "scripted-model".to_owned()),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }
}
