// ABOUTME: Unified error handling for the procoach engine
// ABOUTME: Defines the error taxonomy and the retry classification predicate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Error Handling
//!
//! Every fallible operation in this crate returns [`CoachError`]. The error
//! code determines how callers react: configuration errors fail fast before
//! any network activity, transient network errors are the only class the
//! retry wrapper re-attempts, and rejected requests or malformed responses
//! surface immediately with the underlying message.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Required configuration (API credential) is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,
    /// Transport-layer failure reaching the completion endpoint
    #[serde(rename = "TRANSIENT_NETWORK")]
    TransientNetwork,
    /// The completion endpoint rejected the request (auth, quota, bad request)
    #[serde(rename = "REQUEST_REJECTED")]
    RequestRejected,
    /// The completion endpoint returned a body that does not match the plan shape
    #[serde(rename = "MALFORMED_RESPONSE")]
    MalformedResponse,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ConfigMissing => "Required configuration is missing",
            Self::TransientNetwork => "Network request to the AI service failed",
            Self::RequestRejected => "The AI service rejected the request",
            Self::MalformedResponse => "The AI service returned an unusable response",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct CoachError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message (never contains the API credential)
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CoachError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Missing configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Transport-layer failure (the only retryable class)
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransientNetwork, message)
    }

    /// Non-retryable rejection from the completion endpoint
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequestRejected, message)
    }

    /// Response body absent, unparsable, or shape-violating
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedResponse, message)
    }

    /// Whether the retry wrapper may re-attempt the operation.
    ///
    /// Only transport-layer failures qualify; rejections carry a definitive
    /// answer from the service and repeating them cannot succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self.code, ErrorCode::TransientNetwork)
    }
}

impl fmt::Display for CoachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type CoachResult<T> = Result<T, CoachError>;
