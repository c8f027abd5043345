// ABOUTME: Error type for AI recipe generation calls
// ABOUTME: Distinguishes provider failures from malformed model output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Failure of a single "generate more recipes" call.
///
/// None of these are retried. The caller logs the error, clears the pending
/// flag of the subcategory and leaves the catalog untouched.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport, HTTP status or API-level failure from the LLM provider
    #[error("recipe generation request failed: {0}")]
    Provider(#[from] AppError),

    /// Provider answered with no text or only whitespace
    #[error("recipe generation returned an empty response")]
    EmptyResponse,

    /// Response text is not a JSON array of recipe objects
    #[error("recipe generation returned malformed JSON: {reason}")]
    MalformedResponse {
        /// Parser diagnostic
        reason: String,
    },

    /// Target subcategory does not exist in the catalog
    #[error("subcategory `{id}` does not exist")]
    UnknownSubcategory {
        /// Requested subcategory identifier
        id: String,
    },
}

impl GenerationError {
    /// Create a malformed-response error from any parser diagnostic
    #[must_use]
    pub fn malformed(reason: impl ToString) -> Self {
        Self::MalformedResponse {
            reason: reason.to_string(),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::Provider(inner) => inner,
            GenerationError::EmptyResponse => Self::new(
                ErrorCode::ExternalServiceError,
                "recipe generation returned an empty response",
            ),
            GenerationError::MalformedResponse { reason } => Self::new(
                ErrorCode::SerializationError,
                format!("recipe generation returned malformed JSON: {reason}"),
            ),
            GenerationError::UnknownSubcategory { id } => {
                Self::not_found(format!("Subcategory {id}")).with_resource_id(id)
            }
        }
    }
}
