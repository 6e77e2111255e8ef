// ABOUTME: Integration tests for prompt template rendering
// ABOUTME: Covers placeholder completeness, N/A substitution, and feedback summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use common::{feedback_entry, sample_plan, tennis_profile};
use procoach::models::{DailyFeedback, InjuryStatus};
use procoach::prompts::{
    feedback_summary, initial_plan_prompt, iteration_prompt, render_template,
    DEFAULT_INITIAL_PLAN_TEMPLATE, DEFAULT_ITERATE_PLAN_TEMPLATE,
};

const INITIAL_PLACEHOLDERS: [&str; 13] = [
    "SPORT",
    "AGE",
    "HEIGHT",
    "WEIGHT",
    "TRAINING_AGE",
    "INJURY_HISTORY",
    "INJURY_STATUS",
    "GOALS",
    "SQUAT",
    "SPEED",
    "ENDURANCE",
    "SPORT_SPECIFIC",
    "CONSTRAINTS",
];

#[test]
fn test_rendering_is_idempotent() {
    let profile = tennis_profile();
    let first = initial_plan_prompt(&profile, DEFAULT_INITIAL_PLAN_TEMPLATE);
    let second = initial_plan_prompt(&profile, DEFAULT_INITIAL_PLAN_TEMPLATE);
    assert_eq!(first, second);
}

#[test]
fn test_default_template_renders_every_placeholder() {
    let rendered = initial_plan_prompt(&tennis_profile(), DEFAULT_INITIAL_PLAN_TEMPLATE);
    for placeholder in INITIAL_PLACEHOLDERS {
        assert!(
            !rendered.contains(&format!("{{{{{placeholder}}}}}")),
            "placeholder {placeholder} was not substituted"
        );
    }
    assert!(rendered.contains("Sport: Tennis"));
    assert!(rendered.contains("Age: 22"));
}

#[test]
fn test_missing_optional_metrics_render_na() {
    let mut profile = tennis_profile();
    profile.strength_squat = None;
    profile.speed_10m = None;
    profile.endurance_vo2 = None;

    let rendered = initial_plan_prompt(&profile, DEFAULT_INITIAL_PLAN_TEMPLATE);
    assert!(rendered.contains("Squat N/A, Speed N/A, Endurance N/A"));
}

#[test]
fn test_unknown_placeholders_survive_custom_templates() {
    let rendered = render_template(
        "Coach for {{SPORT}} with {{MY_CUSTOM_TOKEN}}",
        &[("SPORT", "Tennis".into())],
    );
    assert_eq!(rendered, "Coach for Tennis with {{MY_CUSTOM_TOKEN}}");
}

#[test]
fn test_iteration_prompt_advances_week_number() {
    let plan = sample_plan(3);
    let rendered = iteration_prompt(&plan, &[], &tennis_profile(), DEFAULT_ITERATE_PLAN_TEMPLATE);
    assert!(rendered.contains("(Week 3)"));
    assert!(rendered.contains("Generate Week 4."));
    assert!(rendered.contains(&plan.id));
}

#[test]
fn test_iteration_prompt_flags_active_injury() {
    let plan = sample_plan(1);
    let mut profile = tennis_profile();

    profile.injury_status = InjuryStatus::Active;
    let rendered = iteration_prompt(&plan, &[], &profile, DEFAULT_ITERATE_PLAN_TEMPLATE);
    assert!(rendered.contains("Injuries: ACTIVE ISSUE"));

    profile.injury_status = InjuryStatus::Recovering;
    let rendered = iteration_prompt(&plan, &[], &profile, DEFAULT_ITERATE_PLAN_TEMPLATE);
    assert!(rendered.contains("Injuries: Stable"));
}

#[test]
fn test_feedback_summary_line_format() {
    let feedback = DailyFeedback {
        plan_id: "plan-1".into(),
        day_index: 2,
        rpe: 7,
        fatigue: 5,
        sleep_quality: 4,
        pain_level: 2,
        pain_location: Some("knee".into()),
        completion_rate: 85,
        notes: Some("felt strong".into()),
    };

    let summary = feedback_summary(&[feedback]);
    assert_eq!(
        summary,
        "Day 2: Completed 85%, RPE 7/10, Fatigue 5/10, Pain 2/10 (knee). Notes: felt strong"
    );
}

#[test]
fn test_feedback_summary_defaults_missing_pain_location() {
    let summary = feedback_summary(&[feedback_entry("plan-1", 0, 8, 0)]);
    assert!(summary.contains("Pain 0/10 (None)."));
}

#[test]
fn test_feedback_summary_one_line_per_entry_in_order() {
    let entries: Vec<DailyFeedback> = (0..5).map(|i| feedback_entry("plan-1", i, 9, 1)).collect();
    let summary = feedback_summary(&entries);

    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 5);
    for (i, line) in lines.iter().enumerate() {
        assert!(
            line.starts_with(&format!("Day {i}: Completed")),
            "unexpected line: {line}"
        );
    }
}

#[test]
fn test_empty_feedback_set_yields_empty_summary() {
    assert_eq!(feedback_summary(&[]), "");
}
