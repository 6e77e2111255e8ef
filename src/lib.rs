// ABOUTME: Main library entry point for the procoach coaching engine
// ABOUTME: Generates and iterates weekly training microcycles via Gemini
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

#![deny(unsafe_code)]

//! # ProCoach
//!
//! The coaching engine behind an AI training assistant for athletes. The
//! engine renders an athlete profile into a generation prompt, issues a
//! JSON-schema-constrained completion request against Google Gemini, retries
//! transient network failures with exponential backoff, and parses the
//! structured result into a weekly [`models::TrainingPlan`]. A week of
//! subjective [`models::DailyFeedback`] drives the next iteration.
//!
//! ## Features
//!
//! - **Structured output**: every request carries a response schema, so the
//!   model answers in the plan shape rather than prose
//! - **Resilient delivery**: bounded retry with 1.5x exponential backoff for
//!   transport failures; definitive rejections surface immediately
//! - **Customizable prompts**: `{{PLACEHOLDER}}` templates with built-in
//!   defaults, overridable per deployment
//! - **Plain data in, plain data out**: no persistence layer; callers own
//!   storage of profiles, plans, and feedback
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use procoach::config::AppConfig;
//! use procoach::models::{AthleteProfile, InjuryStatus, Sport};
//! use procoach::services::plan_generation::request_initial_plan;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), procoach::errors::CoachError> {
//!     let config = AppConfig::from_env()?;
//!     let profile = AthleteProfile {
//!         name: "Alex".into(),
//!         age: 24,
//!         height_cm: 180.0,
//!         weight_kg: 75.0,
//!         body_fat_percentage: None,
//!         sport: Sport::Football,
//!         training_age: 5,
//!         injury_history: "None".into(),
//!         injury_status: InjuryStatus::None,
//!         strength_squat: None,
//!         speed_10m: None,
//!         endurance_vo2: None,
//!         sport_specific_stats: String::new(),
//!         goals: "Increase explosive power".into(),
//!         constraints: "4 days a week, gym access".into(),
//!     };
//!
//!     let plan = request_initial_plan(&profile, &config).await?;
//!     println!("Week {}: {}", plan.week_number, plan.summary);
//!     Ok(())
//! }
//! ```

/// Environment-based application configuration
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Unified error handling with the retry classification predicate
pub mod errors;

/// Completion backend abstraction and the Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Core data models: profiles, plans, feedback
pub mod models;

/// Prompt composition from templates and athlete data
pub mod prompts;

/// Bounded retry with exponential backoff
pub mod retry;

/// Domain service layer for plan generation
pub mod services;
