// ABOUTME: LLM provider abstraction used by the recipe generation client
// ABOUTME: Defines chat request/response types and the async provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # LLM Provider Interface
//!
//! The generation client talks to a text model through [`LlmProvider`], so
//! the Gemini implementation can be swapped for a fake in tests.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: bitflags describing provider features
//! - **`ChatRequest`**: messages plus model, temperature and an optional
//!   structured-output constraint
//! - **`ResponseFormat`**: JSON mime type and schema the model must follow
//!
//! ## Example
//!
//! ```rust,no_run
//! use biocozinha::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};
//! use biocozinha::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_env()?;
//!     let request = ChatRequest::new(vec![ChatMessage::user("Olá!")]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider supports system messages
        const SYSTEM_MESSAGES = 0b0000_0001;
        /// Provider can constrain output to JSON
        const JSON_MODE = 0b0000_0010;
        /// Provider accepts a response schema alongside JSON mode
        const RESPONSE_SCHEMA = 0b0000_0100;
    }
}

impl LlmCapabilities {
    /// Capabilities of a plain text provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::SYSTEM_MESSAGES
    }

    /// Capabilities of a provider with schema-constrained JSON output
    #[must_use]
    pub const fn structured_output() -> Self {
        Self::SYSTEM_MESSAGES
            .union(Self::JSON_MODE)
            .union(Self::RESPONSE_SCHEMA)
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if a response schema is honored
    #[must_use]
    pub const fn supports_response_schema(&self) -> bool {
        self.contains(Self::RESPONSE_SCHEMA)
    }

    /// Check if system messages are supported
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Structured output constraint for a completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Mime type the model must answer with
    pub mime_type: String,
    /// Schema the answer must conform to (provider dialect)
    pub schema: Option<serde_json::Value>,
}

impl ResponseFormat {
    /// JSON output following `schema`
    #[must_use]
    pub fn json_schema(schema: serde_json::Value) -> Self {
        Self {
            mime_type: "application/json".to_owned(),
            schema: Some(schema),
        }
    }
}

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Structured output constraint
    pub response_format: Option<ResponseFormat>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            response_format: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Constrain the answer format
    #[must_use]
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for chat completion
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Available models for this provider
    fn available_models(&self) -> &'static [&'static str];

    /// Perform a chat completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let text = LlmCapabilities::text_only();
        assert!(text.supports_system_messages());
        assert!(!text.supports_json_mode());

        let structured = LlmCapabilities::structured_output();
        assert!(structured.supports_json_mode());
        assert!(structured.supports_response_schema());
    }

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new(vec![ChatMessage::user("Olá")])
            .with_model("gemini-3-flash-preview")
            .with_temperature(0.7)
            .with_response_format(ResponseFormat::json_schema(serde_json::json!({"type": "ARRAY"})));

        assert_eq!(request.model.as_deref(), Some("gemini-3-flash-preview"));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(
            request.response_format.map(|f| f.mime_type),
            Some("application/json".to_owned())
        );
    }
}
