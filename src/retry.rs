// ABOUTME: Bounded retry with exponential backoff for transient network failures
// ABOUTME: Re-attempts only errors classified transient, wrapping exhaustion with guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Retry Wrapper
//!
//! Wraps the completion call with a bounded retry loop. Classification is
//! delegated to [`CoachError::is_transient`]: transport failures are
//! re-attempted after a real asynchronous backoff, anything the service
//! actually answered propagates immediately. When attempts are exhausted the
//! final error is wrapped with a user-facing message that keeps the original
//! error text and source chain.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::constants::defaults;
use crate::errors::{CoachError, CoachResult};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retry attempts beyond the initial one
    pub max_retries: u32,
    /// Backoff before the first retry
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each retry
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: defaults::MAX_RETRIES,
            initial_delay: Duration::from_millis(defaults::INITIAL_BACKOFF_MS),
            backoff_factor: defaults::BACKOFF_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Override the retry count
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Run `op`, re-attempting transient failures per the policy.
///
/// The operation runs once plus up to `max_retries` additional attempts.
/// Non-transient errors short-circuit with no delay. The loop suspends
/// cooperatively during backoff; there is no separate thread of control.
///
/// # Errors
///
/// Propagates the operation's error. Exhausted transient failures are
/// wrapped in a persistent-network-failure message carrying the original
/// error as source.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> CoachResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CoachResult<T>>,
{
    let mut delay = policy.initial_delay;
    let mut retries_used = 0u32;

    loop {
        let error = match op().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !error.is_transient() {
            return Err(error);
        }

        if retries_used >= policy.max_retries {
            return Err(CoachError::network(format!(
                "Network request failed after multiple retries. Please check your \
                 internet connection or proxy settings. Original error: {}",
                error.message
            ))
            .with_source(error));
        }

        retries_used += 1;
        let remaining = policy.max_retries - retries_used;
        warn!(
            retries_used,
            remaining, "Network error detected, retrying after backoff"
        );

        tokio::time::sleep(delay).await;
        delay = delay.mul_f64(policy.backoff_factor);
    }
}
