// ABOUTME: Environment-only configuration for the generation client and logging
// ABOUTME: Reads API key, model, endpoint, timeout and temperature from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # Configuration
//!
//! All settings come from environment variables; there is no config file.
//!
//! | Variable | Default |
//! |---|---|
//! | `GEMINI_API_KEY` | required for generation |
//! | `BIOCOZINHA_LLM_MODEL` | `gemini-3-flash-preview` |
//! | `BIOCOZINHA_LLM_BASE_URL` | Gemini `v1beta` endpoint |
//! | `BIOCOZINHA_LLM_TIMEOUT_SECS` | `30` |
//! | `BIOCOZINHA_LLM_TEMPERATURE` | provider default |

/// Enum types parsed from configuration strings
pub mod types;

pub use types::{Environment, LogFormat, LogLevel};

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Default Gemini model for recipe generation
pub const DEFAULT_LLM_MODEL: &str = "gemini-3-flash-preview";

/// Default base URL of the Gemini REST API
pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout in seconds
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Settings for the generative text service
#[derive(Clone)]
pub struct LlmConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Sampling temperature, provider default when `None`
    pub temperature: Option<f32>,
}

impl LlmConfig {
    /// Environment variable holding the API key
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";
    /// Environment variable overriding the model
    pub const MODEL_ENV: &'static str = "BIOCOZINHA_LLM_MODEL";
    /// Environment variable overriding the base URL
    pub const BASE_URL_ENV: &'static str = "BIOCOZINHA_LLM_BASE_URL";
    /// Environment variable overriding the timeout
    pub const TIMEOUT_ENV: &'static str = "BIOCOZINHA_LLM_TIMEOUT_SECS";
    /// Environment variable setting the temperature
    pub const TEMPERATURE_ENV: &'static str = "BIOCOZINHA_LLM_TEMPERATURE";

    /// Configuration with defaults and the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_LLM_MODEL.to_owned(),
            base_url: DEFAULT_LLM_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            temperature: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the API key is unset or blank, and
    /// `ConfigInvalid` when the timeout or temperature cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let api_key = non_empty_var(Self::API_KEY_ENV).ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!("{} environment variable not set", Self::API_KEY_ENV),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Some(model) = non_empty_var(Self::MODEL_ENV) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(Self::BASE_URL_ENV) {
            config.base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(raw) = non_empty_var(Self::TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{} must be a whole number of seconds, got `{raw}`", Self::TIMEOUT_ENV),
                )
            })?;
            if secs == 0 {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{} must be greater than zero", Self::TIMEOUT_ENV),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = non_empty_var(Self::TEMPERATURE_ENV) {
            let temperature: f32 = raw.trim().parse().map_err(|_| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{} must be a number, got `{raw}`", Self::TEMPERATURE_ENV),
                )
            })?;
            if !(0.0..=2.0).contains(&temperature) {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{} must be between 0.0 and 2.0", Self::TEMPERATURE_ENV),
                ));
            }
            config.temperature = Some(temperature);
        }

        Ok(config)
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LlmConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = LlmConfig::new("key");
        assert_eq!(config.model, DEFAULT_LLM_MODEL);
        assert_eq!(config.base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS));
        assert!(config.temperature.is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", LlmConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
