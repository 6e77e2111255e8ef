// ABOUTME: Completion backend abstraction for schema-constrained plan generation
// ABOUTME: Defines the contract the Gemini client implements and tests mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Completion Backend Service Provider Interface
//!
//! This module defines the contract between the plan generation service and
//! the generative model endpoint. A request carries the rendered prompt, a
//! persona system instruction, and a structural output schema forcing the
//! response body to be JSON matching the training plan shape; the response
//! is the raw text the model produced.
//!
//! The trait is the seam for tests: the service layer is generic over
//! [`CompletionBackend`], so a mock backend with a call counter stands in
//! for the network during integration tests.

mod gemini;
pub mod schema;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoachResult;

/// A schema-constrained completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier (endpoint-specific)
    pub model: String,
    /// Rendered prompt, the sole user content
    pub prompt: String,
    /// Persona instruction for the assistant
    pub system_instruction: String,
    /// Structural constraint the response body must conform to
    pub response_schema: Value,
}

impl CompletionRequest {
    /// Create a new completion request
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        system_instruction: impl Into<String>,
        response_schema: Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            response_schema,
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Raw response text; on success a JSON document matching the schema
    pub text: String,
}

/// Completion backend trait for plan generation
///
/// Implement this trait to target a different completion endpoint. The
/// engine issues exactly one non-streaming request per plan operation.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Unique backend identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Perform a schema-constrained completion
    async fn complete(&self, request: &CompletionRequest) -> CoachResult<CompletionResponse>;
}
