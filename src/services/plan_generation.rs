// ABOUTME: Plan generation domain service for initial and iterated microcycles
// ABOUTME: Composes prompts, dispatches schema-constrained completions, parses plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Plan Generation Service
//!
//! Orchestrates one request/response cycle against the completion backend:
//! compose the prompt, dispatch with retry, parse and validate the response,
//! assemble the immutable [`TrainingPlan`].
//!
//! The public entry points construct an ephemeral Gemini backend from the
//! caller-supplied credential. The `generate_*`/`iterate_*` functions are
//! generic over [`CompletionBackend`] so tests can inject a mock and count
//! attempts.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{CoachError, CoachResult};
use crate::llm::{schema, CompletionBackend, CompletionRequest, GeminiClient};
use crate::models::{AthleteProfile, DailyFeedback, TrainingDay, TrainingPlan};
use crate::prompts;
use crate::retry::{with_retry, RetryPolicy};

/// The model-authored portion of a plan response
#[derive(Debug, Deserialize)]
struct PlanPayload {
    summary: String,
    days: Vec<TrainingDay>,
}

/// Request the first weekly microcycle for an athlete.
///
/// Business rules:
/// - Fails fast with a configuration error when the credential is absent,
///   before any network attempt
/// - The returned plan carries a fresh identifier, the current timestamp,
///   and `week_number = 1`
///
/// # Errors
///
/// Returns a configuration error on a missing credential, a transient
/// network error after retries are exhausted, a rejection for any other
/// endpoint failure, and a malformed-response error when the body does not
/// match the plan shape.
pub async fn request_initial_plan(
    profile: &AthleteProfile,
    config: &AppConfig,
) -> CoachResult<TrainingPlan> {
    let backend = GeminiClient::new(config.api_key.clone());
    generate_initial_plan(&backend, profile, config, &RetryPolicy::default()).await
}

/// Request the next weekly microcycle from the prior plan and its feedback.
///
/// Business rules:
/// - `feedbacks` is filtered to entries whose `plan_id` matches the current
///   plan before summarization; callers may pass an unfiltered history
/// - The prior plan is never mutated; the new plan gets
///   `week_number = current + 1`, a fresh identifier and timestamp
///
/// # Errors
///
/// Same error surface as [`request_initial_plan`].
pub async fn request_iterated_plan(
    current_plan: &TrainingPlan,
    feedbacks: &[DailyFeedback],
    profile: &AthleteProfile,
    config: &AppConfig,
) -> CoachResult<TrainingPlan> {
    let backend = GeminiClient::new(config.api_key.clone());
    iterate_plan(
        &backend,
        current_plan,
        feedbacks,
        profile,
        config,
        &RetryPolicy::default(),
    )
    .await
}

/// Backend-generic initial generation, the seam for tests
///
/// # Errors
///
/// See [`request_initial_plan`].
pub async fn generate_initial_plan(
    backend: &dyn CompletionBackend,
    profile: &AthleteProfile,
    config: &AppConfig,
    policy: &RetryPolicy,
) -> CoachResult<TrainingPlan> {
    ensure_credential(config)?;

    let prompt = prompts::initial_plan_prompt(profile, config.initial_template());
    let request = CompletionRequest::new(
        config.model.clone(),
        prompt,
        prompts::INITIAL_PLAN_SYSTEM_INSTRUCTION,
        schema::plan_response_schema(),
    );

    info!(sport = %profile.sport, "Requesting initial training plan");

    let response = with_retry(policy, || backend.complete(&request)).await?;
    let payload = parse_plan_payload(&response.text)?;

    assemble_plan(payload, 1)
}

/// Backend-generic iteration, the seam for tests
///
/// # Errors
///
/// See [`request_iterated_plan`].
pub async fn iterate_plan(
    backend: &dyn CompletionBackend,
    current_plan: &TrainingPlan,
    feedbacks: &[DailyFeedback],
    profile: &AthleteProfile,
    config: &AppConfig,
    policy: &RetryPolicy,
) -> CoachResult<TrainingPlan> {
    ensure_credential(config)?;

    // Defensive: callers may hand over the full feedback history
    let relevant: Vec<DailyFeedback> = feedbacks
        .iter()
        .filter(|f| f.plan_id == current_plan.id)
        .cloned()
        .collect();

    let prompt = prompts::iteration_prompt(
        current_plan,
        &relevant,
        profile,
        config.iterate_template(),
    );
    let request = CompletionRequest::new(
        config.model.clone(),
        prompt,
        prompts::ITERATE_PLAN_SYSTEM_INSTRUCTION,
        schema::plan_response_schema(),
    );

    info!(
        week = current_plan.week_number,
        feedback_entries = relevant.len(),
        "Requesting iterated training plan"
    );

    let response = with_retry(policy, || backend.complete(&request)).await?;
    let payload = parse_plan_payload(&response.text)?;

    assemble_plan(payload, current_plan.week_number + 1)
}

fn ensure_credential(config: &AppConfig) -> CoachResult<()> {
    if config.has_credential() {
        Ok(())
    } else {
        Err(CoachError::config("missing API key"))
    }
}

/// Parse the response body into the plan payload.
///
/// An empty or unparsable body is an explicit malformed-response error, not
/// a plan with missing fields.
fn parse_plan_payload(text: &str) -> CoachResult<PlanPayload> {
    if text.trim().is_empty() {
        return Err(CoachError::malformed("model returned an empty response body"));
    }

    serde_json::from_str(text)
        .map_err(|e| CoachError::malformed(format!("plan response is not valid JSON: {e}")))
}

fn assemble_plan(payload: PlanPayload, week_number: u32) -> CoachResult<TrainingPlan> {
    let plan = TrainingPlan {
        id: Uuid::new_v4().to_string(),
        start_date: Utc::now(),
        week_number,
        summary: payload.summary,
        days: payload.days,
    };

    plan.validate()?;

    info!(plan_id = %plan.id, week = plan.week_number, "Training plan assembled");

    Ok(plan)
}
