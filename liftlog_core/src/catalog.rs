//! Catalog of workout and exercise names present in a log.
//!
//! Workout names are listed alphabetically. Exercise names are ranked by how
//! many set rows reference them, so the most trained lifts come first.

use crate::WorkoutEntry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Ordering applied to the exercise catalog
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseOrder {
    /// Most set rows first, ties alphabetical
    #[default]
    Frequency,
    /// Plain alphabetical
    Alphabetical,
}

/// Distinct workout names in ascending lexicographic order
pub fn workout_names(entries: &[WorkoutEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.workout_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Distinct exercise names, most frequent first
pub fn exercise_names(entries: &[WorkoutEntry]) -> Vec<String> {
    exercise_names_by(entries, ExerciseOrder::Frequency)
}

/// Distinct exercise names in the requested order
pub fn exercise_names_by(entries: &[WorkoutEntry], order: ExerciseOrder) -> Vec<String> {
    exercise_counts_by(entries, order)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

/// Exercise names paired with their set-row counts, most frequent first
pub fn exercise_counts(entries: &[WorkoutEntry]) -> Vec<(String, usize)> {
    exercise_counts_by(entries, ExerciseOrder::Frequency)
}

/// Exercise names paired with their set-row counts, in the requested order
pub fn exercise_counts_by(
    entries: &[WorkoutEntry],
    order: ExerciseOrder,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.exercise_name.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    match order {
        ExerciseOrder::Frequency => {
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        }
        ExerciseOrder::Alphabetical => ranked.sort_by(|a, b| a.0.cmp(b.0)),
    }

    ranked
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}
