//! Core domain types for the workout log pipeline.
//!
//! This module defines the data flowing through the system:
//! - Raw workout entries (one row of the exported log)
//! - Aggregated per-session summaries
//! - Per-exercise progression series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Raw Entries
// ============================================================================

/// One recorded set, as read from a row of the exported log
///
/// Numeric fields are already coerced: missing or non-numeric values are 0.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    /// Date label exactly as exported (may carry a time component)
    pub date: String,
    pub workout_name: String,
    /// Session duration label, passed through untouched
    pub duration: String,
    pub exercise_name: String,
    pub set_order: u32,
    pub weight: f64,
    pub reps: f64,
    pub distance: f64,
    pub seconds: f64,
    pub rpe: String,
}

// ============================================================================
// Aggregated Sessions
// ============================================================================

/// Summary of every set of one exercise within one dated workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedWorkoutData {
    pub date: NaiveDate,
    pub workout_name: String,
    pub exercise_name: String,
    pub max_weight: f64,
    pub total_volume: f64,
    pub avg_reps: f64,
    pub sets: u32,
    #[serde(rename = "estimated1RM")]
    pub estimated_1rm: f64,
}

// ============================================================================
// Progression Series
// ============================================================================

/// A single point on an exercise's progression chart
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionPoint {
    pub date: NaiveDate,
    pub max_weight: f64,
    pub total_volume: f64,
    pub avg_reps: f64,
    pub sets: u32,
    #[serde(rename = "estimated1RM")]
    pub estimated_1rm: f64,
}

impl From<&ProcessedWorkoutData> for ProgressionPoint {
    fn from(summary: &ProcessedWorkoutData) -> Self {
        ProgressionPoint {
            date: summary.date,
            max_weight: summary.max_weight,
            total_volume: summary.total_volume,
            avg_reps: summary.avg_reps,
            sets: summary.sets,
            estimated_1rm: summary.estimated_1rm,
        }
    }
}

/// Date-ordered series for one exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgression {
    pub exercise_name: String,
    pub data: Vec<ProgressionPoint>,
}

impl ExerciseProgression {
    /// True when no sessions matched the exercise
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Best estimated one-rep max across the whole series
    pub fn best_estimated_1rm(&self) -> Option<f64> {
        self.data
            .iter()
            .map(|p| p.estimated_1rm)
            .fold(None, |best, v| Some(best.map_or(v, |b: f64| b.max(v))))
    }
}
