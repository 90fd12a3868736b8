//! Session aggregation.
//!
//! Groups workout entries by (date, workout name, exercise name) and
//! reduces each group into one [`ProcessedWorkoutData`] summary.

use crate::{ProcessedWorkoutData, WorkoutEntry};
use crate::dates::parse_calendar_date;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Estimated one-rep max using the Epley formula
///
/// `weight * (1 + reps / 30)`. Zero weight gives zero.
pub fn estimated_1rm(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / 30.0)
}

/// Running reduction of one group of sets
struct GroupTotals<'a> {
    date: &'a str,
    workout_name: &'a str,
    exercise_name: &'a str,
    max_weight: f64,
    total_volume: f64,
    reps_sum: f64,
    sets: u32,
    best_1rm: f64,
}

impl<'a> GroupTotals<'a> {
    fn new(entry: &'a WorkoutEntry) -> Self {
        Self {
            date: &entry.date,
            workout_name: &entry.workout_name,
            exercise_name: &entry.exercise_name,
            max_weight: f64::NEG_INFINITY,
            total_volume: 0.0,
            reps_sum: 0.0,
            sets: 0,
            best_1rm: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, entry: &WorkoutEntry) {
        self.max_weight = self.max_weight.max(entry.weight);
        self.total_volume += entry.weight * entry.reps;
        self.reps_sum += entry.reps;
        self.sets += 1;
        // per set, never on the aggregated totals
        self.best_1rm = self.best_1rm.max(estimated_1rm(entry.weight, entry.reps));
    }

    fn finish(self, date: NaiveDate) -> ProcessedWorkoutData {
        ProcessedWorkoutData {
            date,
            workout_name: self.workout_name.to_string(),
            exercise_name: self.exercise_name.to_string(),
            max_weight: self.max_weight,
            total_volume: self.total_volume,
            avg_reps: self.reps_sum / f64::from(self.sets),
            sets: self.sets,
            estimated_1rm: self.best_1rm,
        }
    }
}

/// Aggregate entries into per-session, per-exercise summaries
///
/// Output is sorted by calendar date. Groups sharing a date keep the order in
/// which they first appear in `entries`. A group whose date is not an ISO 8601
/// label (see [`parse_calendar_date`]) is dropped with a warning.
pub fn aggregate(entries: &[WorkoutEntry]) -> Vec<ProcessedWorkoutData> {
    let mut index: HashMap<(&str, &str, &str), usize> = HashMap::new();
    let mut groups: Vec<GroupTotals<'_>> = Vec::new();

    for entry in entries {
        let key = (
            entry.date.as_str(),
            entry.workout_name.as_str(),
            entry.exercise_name.as_str(),
        );
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(GroupTotals::new(entry));
            groups.len() - 1
        });
        groups[slot].add(entry);
    }

    let mut processed: Vec<ProcessedWorkoutData> = Vec::with_capacity(groups.len());
    for group in groups {
        match parse_calendar_date(group.date) {
            Some(date) => processed.push(group.finish(date)),
            None => tracing::warn!(
                "Skipping {} set(s) of {:?} in {:?}: unrecognised date {:?}",
                group.sets,
                group.exercise_name,
                group.workout_name,
                group.date
            ),
        }
    }

    processed.sort_by_key(|p| p.date);

    tracing::debug!(
        "Aggregated {} entries into {} sessions",
        entries.len(),
        processed.len()
    );

    processed
}
