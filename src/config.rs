// ABOUTME: Environment-based application configuration for procoach
// ABOUTME: Carries the API credential, model identifier, and prompt template overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Configuration
//!
//! Environment-only configuration in the spirit of twelve-factor deployment.
//! [`AppConfig`] is plain data handed to the plan generation service; the
//! engine never reads the environment after construction, so tests can build
//! configurations directly.

use std::env;
use std::fs;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{defaults, env_config};
use crate::errors::{CoachError, CoachResult};
use crate::prompts;

/// Application configuration for plan generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Gemini API credential. An empty value makes both plan operations fail
    /// fast with a configuration error before any network attempt.
    pub api_key: String,
    /// Model identifier for the completion endpoint
    pub model: String,
    /// Custom initial-generation template; `None` or empty uses the built-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_plan_template: Option<String>,
    /// Custom iteration template; `None` or empty uses the built-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterate_plan_template: Option<String>,
}

impl AppConfig {
    /// Create a configuration with the given credential and the default model
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: defaults::MODEL.to_owned(),
            initial_plan_template: None,
            iterate_plan_template: None,
        }
    }

    /// Set the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` supplies the credential (absent means empty, which
    /// the plan operations reject at call time). `PROCOACH_MODEL` overrides
    /// the default model. The two `*_TEMPLATE_FILE` variables point at files
    /// whose contents replace the built-in prompt templates.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a template file is named but
    /// cannot be read.
    pub fn from_env() -> CoachResult<Self> {
        let api_key = env::var(env_config::GEMINI_API_KEY).unwrap_or_default();
        let model =
            env::var(env_config::MODEL).unwrap_or_else(|_| defaults::MODEL.to_owned());

        let initial_plan_template =
            read_template_override(env_config::INITIAL_PLAN_TEMPLATE_FILE)?;
        let iterate_plan_template =
            read_template_override(env_config::ITERATE_PLAN_TEMPLATE_FILE)?;

        if initial_plan_template.is_some() || iterate_plan_template.is_some() {
            info!("Custom prompt templates loaded from environment");
        }

        Ok(Self {
            api_key,
            model,
            initial_plan_template,
            iterate_plan_template,
        })
    }

    /// Template for initial plan generation, falling back to the built-in
    /// default when the override is absent or empty.
    #[must_use]
    pub fn initial_template(&self) -> &str {
        resolve_template(
            self.initial_plan_template.as_deref(),
            prompts::DEFAULT_INITIAL_PLAN_TEMPLATE,
        )
    }

    /// Template for plan iteration, falling back to the built-in default
    /// when the override is absent or empty.
    #[must_use]
    pub fn iterate_template(&self) -> &str {
        resolve_template(
            self.iterate_plan_template.as_deref(),
            prompts::DEFAULT_ITERATE_PLAN_TEMPLATE,
        )
    }

    /// Whether a usable API credential is present
    #[must_use]
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn resolve_template<'a>(custom: Option<&'a str>, default: &'a str) -> &'a str {
    match custom {
        Some(template) if !template.trim().is_empty() => template,
        _ => default,
    }
}

fn read_template_override(var: &str) -> CoachResult<Option<String>> {
    match env::var(var) {
        Ok(path) if !path.trim().is_empty() => {
            let contents = fs::read_to_string(&path).map_err(|e| {
                CoachError::config(format!("failed to read template file {path}: {e}"))
            })?;
            Ok(Some(contents))
        }
        _ => Ok(None),
    }
}
