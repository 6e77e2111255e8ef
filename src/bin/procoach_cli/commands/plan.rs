// ABOUTME: Plan subcommand handlers for generate and iterate operations
// ABOUTME: Bridges JSON documents on disk to the plan generation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use procoach::config::AppConfig;
use procoach::models::{AthleteProfile, DailyFeedback, TrainingPlan};
use procoach::services::plan_generation::{request_initial_plan, request_iterated_plan};

/// Generate the first weekly plan for a profile
pub async fn generate(profile_path: &Path, output: Option<&Path>) -> Result<()> {
    let config = AppConfig::from_env()?;
    let profile: AthleteProfile = read_json(profile_path)?;

    let plan = request_initial_plan(&profile, &config).await?;

    write_plan(&plan, output)
}

/// Iterate a plan into the next week using the provided feedback
pub async fn iterate(
    plan_path: &Path,
    feedback_path: &Path,
    profile_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let config = AppConfig::from_env()?;
    let current_plan: TrainingPlan = read_json(plan_path)?;
    let feedbacks: Vec<DailyFeedback> = read_json(feedback_path)?;
    let profile: AthleteProfile = read_json(profile_path)?;

    let plan = request_iterated_plan(&current_plan, &feedbacks, &profile, &config).await?;

    write_plan(&plan, output)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn write_plan(plan: &TrainingPlan, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(plan).context("failed to serialize plan")?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(plan_id = %plan.id, week = plan.week_number, path = %path.display(), "Plan written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
