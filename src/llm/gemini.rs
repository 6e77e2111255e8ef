// ABOUTME: Google Gemini completion backend with structured JSON output
// ABOUTME: Issues generateContent requests constrained by a response schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Gemini Backend
//!
//! Implementation of the [`CompletionBackend`] trait for Google's Gemini
//! models via the Generative Language API.
//!
//! Every request sets `response_mime_type` to `application/json` and carries
//! the training plan schema in `generation_config`, so a successful response
//! is a JSON document rather than prose.
//!
//! ## Error classification
//!
//! Transport failures (connect, timeout, interrupted body) become
//! `TransientNetwork` errors, the only class the retry wrapper re-attempts.
//! Any answer the service actually produced — an HTTP error status or an
//! error object in the body — becomes `RequestRejected` and propagates
//! immediately.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{CompletionBackend, CompletionRequest, CompletionResponse};
use crate::errors::{CoachError, CoachResult};

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    system_instruction: GeminiContent,
    generation_config: GenerationConfig,
}

/// Content structure for the Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// Text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

/// Generation configuration carrying the structural output constraint
#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// Google Gemini completion backend
///
/// Constructed per call with the caller-supplied credential; the handle is
/// ephemeral and holds no state beyond the HTTP client.
pub struct GeminiClient {
    api_key: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini backend with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Build the API URL for a model
    fn build_url(&self, model: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{model}:generateContent?key={}",
            self.api_key
        )
    }

    /// Build a Gemini API request from a `CompletionRequest`
    fn build_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart {
                    text: request.prompt.clone(),
                }],
            }],
            system_instruction: GeminiContent {
                role: None,
                parts: vec![ContentPart {
                    text: request.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_owned(),
                response_schema: request.response_schema.clone(),
            },
        }
    }

    /// Extract the response text from the first candidate
    fn extract_text(response: GeminiResponse) -> CoachResult<String> {
        response
            .candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| CoachError::malformed("no content in Gemini response"))
    }

    /// Map a non-success HTTP status to a rejection carrying the service message
    fn map_api_error(status: u16, response_text: &str) -> CoachError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        CoachError::rejected(format!("Gemini API error ({status}): {message}"))
    }

    /// Classify a reqwest failure. Everything that happens before the service
    /// answers is transport-level and therefore transient.
    fn map_transport_error(context: &str, e: reqwest::Error) -> CoachError {
        // reqwest errors can Display the request URL, which embeds the key
        let sanitized = e.without_url();
        CoachError::network(format!("{context}: {sanitized}")).with_source(sanitized)
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> CoachResult<CompletionResponse> {
        let url = self.build_url(&request.model);
        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending plan generation request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| Self::map_transport_error("HTTP request failed", e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Self::map_transport_error("failed to read response body", e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response envelope");
                CoachError::malformed(format!("failed to parse Gemini response: {e}"))
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(CoachError::rejected(format!(
                "Gemini API error: {}",
                api_error.message
            )));
        }

        let text = Self::extract_text(gemini_response)?;

        debug!("Successfully received structured response from Gemini");

        Ok(CompletionResponse { text })
    }
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_maps_to_rejection_with_service_message() {
        let body = r#"{"error": {"message": "API key not valid"}}"#;
        let error = GeminiClient::map_api_error(400, body);
        assert!(!error.is_transient());
        assert!(error.message.contains("API key not valid"));
        assert!(error.message.contains("400"));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let error = GeminiClient::map_api_error(503, "upstream unavailable");
        assert!(error.message.contains("upstream unavailable"));
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let response = GeminiResponse {
            candidates: Some(vec![]),
            error: None,
        };
        assert!(GeminiClient::extract_text(response).is_err());
    }

    #[test]
    fn test_request_serializes_schema_into_generation_config() {
        let request = CompletionRequest::new(
            "gemini-2.5-flash",
            "prompt",
            "system",
            json!({"type": "OBJECT"}),
        );
        let wire = GeminiClient::build_gemini_request(&request);
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            value["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert_eq!(
            value["generation_config"]["response_schema"]["type"],
            "OBJECT"
        );
        assert_eq!(value["contents"][0]["role"], "user");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = GeminiClient::new("secret-key");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
