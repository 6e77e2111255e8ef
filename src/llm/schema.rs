// ABOUTME: Structural output schema for training plan completions
// ABOUTME: Declares the TrainingPlan/TrainingDay/Exercise shape the model must emit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Response Schema
//!
//! The schema transmitted with every completion request. It constrains the
//! model's output to the training plan shape, eliminating free-form prose.
//! Field names match the serde renames in [`crate::models`], so the response
//! text deserializes directly.

use serde_json::{json, Value};

/// Schema for one exercise prescription
#[must_use]
pub fn exercise_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "sets": { "type": "NUMBER" },
            "reps": { "type": "STRING" },
            "intensity": { "type": "STRING" },
            "rest": { "type": "STRING" },
            "notes": { "type": "STRING" },
        },
        "required": ["name", "sets", "reps", "intensity"],
    })
}

/// Schema for one day of the microcycle
#[must_use]
pub fn day_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dayIndex": { "type": "INTEGER" },
            "dayName": { "type": "STRING" },
            "focus": { "type": "STRING" },
            "description": { "type": "STRING" },
            "isRestDay": { "type": "BOOLEAN" },
            "exercises": {
                "type": "ARRAY",
                "items": exercise_schema(),
            },
        },
        "required": ["dayIndex", "dayName", "focus", "isRestDay", "exercises"],
    })
}

/// Schema for a full weekly training plan response
#[must_use]
pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "Executive summary of the training phase",
            },
            "days": {
                "type": "ARRAY",
                "items": day_schema(),
            },
        },
        "required": ["summary", "days"],
    })
}
