// ABOUTME: Prompt composition for plan generation, loaded at compile time
// ABOUTME: Renders {{PLACEHOLDER}} templates from athlete, plan, and feedback data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Prompt Composer
//!
//! Deterministic rendering of prompt templates. Templates carry
//! `{{PLACEHOLDER}}` tokens from a closed, per-operation vocabulary;
//! rendering replaces every occurrence of a known placeholder with the string
//! form of its value and leaves unknown tokens untouched, so partial custom
//! templates degrade gracefully instead of erroring.
//!
//! Default templates are embedded at compile time from markdown files for
//! easy maintenance.

use crate::models::{AthleteProfile, DailyFeedback, InjuryStatus, TrainingPlan};

/// Built-in template for initial plan generation
pub const DEFAULT_INITIAL_PLAN_TEMPLATE: &str = include_str!("initial_plan.md");

/// Built-in template for weekly plan iteration
pub const DEFAULT_ITERATE_PLAN_TEMPLATE: &str = include_str!("iterate_plan.md");

/// Persona instruction sent alongside initial generation requests
pub const INITIAL_PLAN_SYSTEM_INSTRUCTION: &str = "You are an expert sports scientist and coach. \
     You prioritize safety, specificity, and progressive overload.";

/// Persona instruction sent alongside iteration requests
pub const ITERATE_PLAN_SYSTEM_INSTRUCTION: &str = "You are an adaptive AI coach. \
     You listen to athlete bio-feedback to optimize performance and prevent overtraining.";

/// Replace every `{{KEY}}` occurrence for each mapping entry with the value.
///
/// Placeholders without a matching key pass through verbatim. Pure function:
/// identical inputs always yield an identical string.
#[must_use]
pub fn render_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut rendered = template.to_owned();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}

/// Render the initial-generation prompt for an athlete profile
#[must_use]
pub fn initial_plan_prompt(profile: &AthleteProfile, template: &str) -> String {
    render_template(template, &initial_plan_vars(profile))
}

/// Placeholder mapping for initial plan generation.
///
/// Missing optional performance metrics substitute the literal `"N/A"`.
#[must_use]
pub fn initial_plan_vars(profile: &AthleteProfile) -> Vec<(&'static str, String)> {
    vec![
        ("SPORT", profile.sport.to_string()),
        ("AGE", profile.age.to_string()),
        ("HEIGHT", profile.height_cm.to_string()),
        ("WEIGHT", profile.weight_kg.to_string()),
        ("TRAINING_AGE", profile.training_age.to_string()),
        ("INJURY_HISTORY", profile.injury_history.clone()),
        ("INJURY_STATUS", profile.injury_status.to_string()),
        ("GOALS", profile.goals.clone()),
        ("SQUAT", metric_or_na(profile.strength_squat)),
        ("SPEED", metric_or_na(profile.speed_10m)),
        ("ENDURANCE", metric_or_na(profile.endurance_vo2)),
        ("SPORT_SPECIFIC", profile.sport_specific_stats.clone()),
        ("CONSTRAINTS", profile.constraints.clone()),
    ]
}

/// Render the iteration prompt from the prior plan and its feedback.
///
/// `feedbacks` must already be filtered to the current plan; the mapping
/// includes the next week number (`week_number + 1`).
#[must_use]
pub fn iteration_prompt(
    plan: &TrainingPlan,
    feedbacks: &[DailyFeedback],
    profile: &AthleteProfile,
    template: &str,
) -> String {
    render_template(template, &iteration_vars(plan, feedbacks, profile))
}

/// Placeholder mapping for plan iteration
#[must_use]
pub fn iteration_vars(
    plan: &TrainingPlan,
    feedbacks: &[DailyFeedback],
    profile: &AthleteProfile,
) -> Vec<(&'static str, String)> {
    let injury_text = if profile.injury_status == InjuryStatus::Active {
        "ACTIVE ISSUE"
    } else {
        "Stable"
    };

    vec![
        ("SPORT", profile.sport.to_string()),
        ("GOALS", profile.goals.clone()),
        ("INJURY_STATUS_TEXT", injury_text.to_owned()),
        ("PLAN_ID", plan.id.clone()),
        ("WEEK_NUMBER", plan.week_number.to_string()),
        ("PLAN_SUMMARY", plan.summary.clone()),
        ("FEEDBACK_SUMMARY", feedback_summary(feedbacks)),
        ("NEXT_WEEK_NUMBER", (plan.week_number + 1).to_string()),
    ]
}

/// Summarize feedback entries, one line per entry in the given order.
///
/// An empty feedback set yields an empty string.
#[must_use]
pub fn feedback_summary(feedbacks: &[DailyFeedback]) -> String {
    feedbacks
        .iter()
        .map(|f| {
            format!(
                "Day {}: Completed {}%, RPE {}/10, Fatigue {}/10, Pain {}/10 ({}). Notes: {}",
                f.day_index,
                f.completion_rate,
                f.rpe,
                f.fatigue,
                f.pain_level,
                f.pain_location.as_deref().unwrap_or("None"),
                f.notes.as_deref().unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn metric_or_na(metric: Option<f64>) -> String {
    metric.map_or_else(|| "N/A".to_owned(), |value| value.to_string())
}
