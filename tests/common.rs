// ABOUTME: Shared test utilities for procoach integration tests
// ABOUTME: Provides a scriptable mock completion backend and fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `procoach`
//!
//! The mock backend counts attempts and captures every request it receives,
//! so tests can assert both retry behavior and prompt content without any
//! network access.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use procoach::config::AppConfig;
use procoach::errors::{CoachError, CoachResult};
use procoach::llm::{CompletionBackend, CompletionRequest, CompletionResponse};
use procoach::models::{
    AthleteProfile, DailyFeedback, InjuryStatus, Sport, TrainingDay, TrainingPlan,
};
use procoach::retry::RetryPolicy;

/// One scripted reply from the mock backend
#[derive(Clone)]
pub enum MockReply {
    /// Successful completion with the given response text
    Text(String),
    /// Transient transport failure
    Network(String),
    /// Non-retryable endpoint rejection
    Rejected(String),
}

/// Scriptable completion backend with an attempt counter
///
/// Replies are consumed front to back; the last reply repeats once the
/// script runs out, so a single entry models a backend that always behaves
/// the same way.
pub struct MockBackend {
    calls: AtomicUsize,
    captured: Mutex<Vec<CompletionRequest>>,
    script: Mutex<VecDeque<MockReply>>,
}

impl MockBackend {
    pub fn new(script: Vec<MockReply>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
            script: Mutex::new(script.into()),
        }
    }

    /// Backend that replies the same way on every attempt
    pub fn always(reply: MockReply) -> Self {
        Self::new(vec![reply])
    }

    /// Backend that succeeds with a full valid plan document
    pub fn returning_plan() -> Self {
        Self::always(MockReply::Text(plan_response_json()))
    }

    /// Total attempts made against this backend
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts of every captured request, in arrival order
    pub fn captured_prompts(&self) -> Vec<String> {
        self.captured
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }

    /// All captured requests, in arrival order
    pub fn captured_requests(&self) -> Vec<CompletionRequest> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> CoachResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(request.clone());

        let reply = {
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front().unwrap()
            } else {
                script.front().cloned().expect("mock script is empty")
            }
        };

        match reply {
            MockReply::Text(text) => Ok(CompletionResponse { text }),
            MockReply::Network(message) => Err(CoachError::network(message)),
            MockReply::Rejected(message) => Err(CoachError::rejected(message)),
        }
    }
}

/// Retry policy with millisecond delays so retry tests stay fast
pub fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_delay: Duration::from_millis(1),
        backoff_factor: 1.5,
    }
}

/// Configuration with a usable test credential
pub fn test_config() -> AppConfig {
    AppConfig::new("test-api-key")
}

/// Young tennis player with complete performance metrics
pub fn tennis_profile() -> AthleteProfile {
    AthleteProfile {
        name: "Iga".into(),
        age: 22,
        height_cm: 176.0,
        weight_kg: 65.0,
        body_fat_percentage: None,
        sport: Sport::Tennis,
        training_age: 8,
        injury_history: "Mild ankle sprain 2023".into(),
        injury_status: InjuryStatus::None,
        strength_squat: Some(95.0),
        speed_10m: Some(1.85),
        endurance_vo2: Some(52.0),
        sport_specific_stats: "First serve 178 km/h".into(),
        goals: "Improve court speed and shoulder resilience".into(),
        constraints: "5 sessions a week, full gym access".into(),
    }
}

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A complete, schema-conformant plan response body
pub fn plan_response_json() -> String {
    let days: Vec<serde_json::Value> = (0..7)
        .map(|i| {
            let rest_day = i == 6;
            serde_json::json!({
                "dayIndex": i,
                "dayName": DAY_NAMES[i as usize],
                "focus": if rest_day { "Recovery" } else { "Strength" },
                "description": "Session details",
                "isRestDay": rest_day,
                "exercises": if rest_day {
                    serde_json::json!([])
                } else {
                    serde_json::json!([{
                        "name": "Back Squat",
                        "sets": 5,
                        "reps": "5",
                        "intensity": "RPE 8",
                        "rest": "3 min"
                    }])
                },
            })
        })
        .collect();

    serde_json::json!({
        "summary": "Foundation strength week",
        "days": days,
    })
    .to_string()
}

/// An assembled plan for iteration tests
pub fn sample_plan(week_number: u32) -> TrainingPlan {
    let days = (0..7)
        .map(|i| TrainingDay {
            day_index: i,
            day_name: DAY_NAMES[i as usize].into(),
            focus: "Strength".into(),
            description: "Session details".into(),
            is_rest_day: i == 6,
            exercises: vec![],
        })
        .collect();

    TrainingPlan {
        id: format!("plan-week-{week_number}"),
        start_date: Utc::now(),
        week_number,
        summary: "Foundation strength week".into(),
        days,
    }
}

/// A feedback entry tied to the given plan
pub fn feedback_entry(plan_id: &str, day_index: u8, rpe: u8, pain_level: u8) -> DailyFeedback {
    DailyFeedback {
        plan_id: plan_id.to_owned(),
        day_index,
        rpe,
        fatigue: 6,
        sleep_quality: 4,
        pain_level,
        pain_location: None,
        completion_rate: 90,
        notes: None,
    }
}
