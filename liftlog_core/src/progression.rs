//! Per-exercise progression series for charting.

use crate::{ExerciseProgression, ProcessedWorkoutData, ProgressionPoint};

/// Build the date-ordered progression of a single exercise
///
/// Matching is exact and case-sensitive. An exercise with no sessions
/// yields an empty series rather than an error.
pub fn progression(
    summaries: &[ProcessedWorkoutData],
    exercise_name: &str,
) -> ExerciseProgression {
    let mut data: Vec<ProgressionPoint> = summaries
        .iter()
        .filter(|s| s.exercise_name == exercise_name)
        .map(ProgressionPoint::from)
        .collect();

    data.sort_by_key(|p| p.date);

    if data.is_empty() {
        tracing::debug!("No sessions found for exercise {:?}", exercise_name);
    }

    ExerciseProgression {
        exercise_name: exercise_name.to_string(),
        data,
    }
}
