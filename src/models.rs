// ABOUTME: Core data models for the procoach engine
// ABOUTME: Defines AthleteProfile, TrainingPlan, TrainingDay, Exercise and DailyFeedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Data Models
//!
//! This module contains the data structures exchanged between the engine and
//! its callers. JSON field names are camelCase so documents written by
//! existing front ends stay readable by this crate.
//!
//! ## Design Principles
//!
//! - **Plain data**: the engine accepts and returns these types; it owns no
//!   persistence layer
//! - **Immutable plans**: iteration produces a new [`TrainingPlan`] with the
//!   week number advanced, never a mutation of the prior week
//! - **Serializable**: all models round-trip through JSON

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CoachError, CoachResult};

/// Number of days in one training microcycle
pub const DAYS_PER_WEEK: usize = 7;

/// Sport discipline of the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sport {
    /// Association football
    #[serde(rename = "Football (Soccer)")]
    Football,
    /// Basketball
    Basketball,
    /// Track sprinting
    #[serde(rename = "Sprint (Track)")]
    Sprint,
    /// Tennis
    Tennis,
    /// Any discipline not listed above
    Other,
}

impl Display for Sport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Football => write!(f, "Football (Soccer)"),
            Self::Basketball => write!(f, "Basketball"),
            Self::Sprint => write!(f, "Sprint (Track)"),
            Self::Tennis => write!(f, "Tennis"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Current injury situation of the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InjuryStatus {
    /// No injury concerns
    #[default]
    None,
    /// Past injury still in rehabilitation
    Recovering,
    /// An injury currently limiting training
    #[serde(rename = "Active Issue")]
    Active,
}

impl Display for InjuryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => write!(f, "None"),
            Self::Recovering => write!(f, "Recovering"),
            Self::Active => write!(f, "Active Issue"),
        }
    }
}

/// Demographic and performance snapshot of one athlete
///
/// Created during onboarding and treated as immutable for the duration of a
/// single generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Athlete name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage, when measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Primary sport
    pub sport: Sport,
    /// Years of structured training experience
    pub training_age: u32,
    /// Free-text injury history
    pub injury_history: String,
    /// Current injury status
    pub injury_status: InjuryStatus,
    /// Estimated squat 1RM in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_squat: Option<f64>,
    /// 10m sprint time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_10m: Option<f64>,
    /// VO2max estimate or Cooper test distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endurance_vo2: Option<f64>,
    /// Free-text sport-specific statistics
    pub sport_specific_stats: String,
    /// Free-text training goals
    pub goals: String,
    /// Free-text constraints (days per week, equipment, travel)
    pub constraints: String,
}

/// One exercise prescription within a training day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetition scheme, free-form to allow ranges or "AMRAP"
    pub reps: String,
    /// Intensity prescription: RPE, %1RM, or zone label
    pub intensity: String,
    /// Rest interval between sets; the model may omit it
    #[serde(default)]
    pub rest: String,
    /// Coaching notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One day of a weekly microcycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    /// Chronological index within the week (0-6)
    pub day_index: u8,
    /// Human day name (Monday, Tuesday, ...)
    pub day_name: String,
    /// Session focus (Hypertrophy, Power, Recovery, ...)
    pub focus: String,
    /// Session description; the model may omit it
    #[serde(default)]
    pub description: String,
    /// Whether this is a rest day
    pub is_rest_day: bool,
    /// Prescribed exercises, empty on rest days
    pub exercises: Vec<Exercise>,
}

/// One weekly training microcycle
///
/// Created by the plan generation service from a model response. Plans are
/// never mutated: iterating on a plan yields a fresh one with
/// `week_number + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Opaque identifier assigned at generation time
    pub id: String,
    /// Timestamp the plan was generated
    pub start_date: DateTime<Utc>,
    /// Week counter, starts at 1 and increases strictly across iterations
    pub week_number: u32,
    /// Natural-language summary of the training phase
    pub summary: String,
    /// Exactly seven days, indices covering 0-6
    pub days: Vec<TrainingDay>,
}

impl TrainingPlan {
    /// Verify the microcycle invariant: exactly seven days whose indices are
    /// unique and cover 0-6.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError`] with `MalformedResponse` when the day set is
    /// incomplete, duplicated, or out of range.
    pub fn validate(&self) -> CoachResult<()> {
        if self.days.len() != DAYS_PER_WEEK {
            return Err(CoachError::malformed(format!(
                "plan has {} days, expected {DAYS_PER_WEEK}",
                self.days.len()
            )));
        }

        let indices: HashSet<u8> = self.days.iter().map(|d| d.day_index).collect();
        let complete = (0..DAYS_PER_WEEK as u8).all(|i| indices.contains(&i));
        if indices.len() != DAYS_PER_WEEK || !complete {
            return Err(CoachError::malformed(
                "plan day indices must be unique and cover 0-6",
            ));
        }

        Ok(())
    }
}

/// Subjective training log for one day of one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFeedback {
    /// Identifier of the plan this entry belongs to
    pub plan_id: String,
    /// Day index within the plan (0-6)
    pub day_index: u8,
    /// Rating of perceived exertion, 1-10
    pub rpe: u8,
    /// Fatigue level, 1-10
    pub fatigue: u8,
    /// Sleep quality, 1-5
    pub sleep_quality: u8,
    /// Pain level, 1-10
    pub pain_level: u8,
    /// Pain location when pain was reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_location: Option<String>,
    /// Percentage of the session completed, 0-100
    pub completion_rate: u8,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
