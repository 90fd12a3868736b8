//! CSV export of aggregated sessions and progression series.
//!
//! Column names match the JSON field names so either output can feed the
//! same charting code. Dates are written as `YYYY-MM-DD`.

use crate::{ExerciseProgression, ProcessedWorkoutData, ProgressionPoint, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A row in the session summary CSV
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRow<'a> {
    date: String,
    workout_name: &'a str,
    exercise_name: &'a str,
    max_weight: f64,
    total_volume: f64,
    avg_reps: f64,
    sets: u32,
    #[serde(rename = "estimated1RM")]
    estimated_1rm: f64,
}

impl<'a> From<&'a ProcessedWorkoutData> for SummaryRow<'a> {
    fn from(summary: &'a ProcessedWorkoutData) -> Self {
        SummaryRow {
            date: summary.date.format("%Y-%m-%d").to_string(),
            workout_name: &summary.workout_name,
            exercise_name: &summary.exercise_name,
            max_weight: summary.max_weight,
            total_volume: summary.total_volume,
            avg_reps: summary.avg_reps,
            sets: summary.sets,
            estimated_1rm: summary.estimated_1rm,
        }
    }
}

/// A row in a progression CSV
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressionRow<'a> {
    exercise_name: &'a str,
    date: String,
    max_weight: f64,
    total_volume: f64,
    avg_reps: f64,
    sets: u32,
    #[serde(rename = "estimated1RM")]
    estimated_1rm: f64,
}

impl<'a> ProgressionRow<'a> {
    fn new(exercise_name: &'a str, point: &ProgressionPoint) -> Self {
        ProgressionRow {
            exercise_name,
            date: point.date.format("%Y-%m-%d").to_string(),
            max_weight: point.max_weight,
            total_volume: point.total_volume,
            avg_reps: point.avg_reps,
            sets: point.sets,
            estimated_1rm: point.estimated_1rm,
        }
    }
}

/// Write session summaries as CSV, returning the number of rows written
pub fn write_summaries<W: Write>(out: W, summaries: &[ProcessedWorkoutData]) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    let count = write_rows(&mut writer, summaries.iter().map(SummaryRow::from))?;
    writer.flush()?;
    Ok(count)
}

/// Write one exercise's progression as CSV, returning the number of rows written
pub fn write_progression<W: Write>(out: W, progression: &ExerciseProgression) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    let count = write_rows(&mut writer, progression_rows(progression))?;
    writer.flush()?;
    Ok(count)
}

/// Export session summaries to a CSV file, replacing any existing file
pub fn export_summaries_to_path(path: &Path, summaries: &[ProcessedWorkoutData]) -> Result<usize> {
    export_to_path(path, summaries.iter().map(SummaryRow::from))
}

/// Export one exercise's progression to a CSV file, replacing any existing file
pub fn export_progression_to_path(path: &Path, progression: &ExerciseProgression) -> Result<usize> {
    export_to_path(path, progression_rows(progression))
}

fn progression_rows(progression: &ExerciseProgression) -> impl Iterator<Item = ProgressionRow<'_>> {
    progression
        .data
        .iter()
        .map(move |point| ProgressionRow::new(&progression.exercise_name, point))
}

fn write_rows<W: Write, R: Serialize>(
    writer: &mut csv::Writer<W>,
    rows: impl IntoIterator<Item = R>,
) -> Result<usize> {
    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }
    Ok(count)
}

/// Write rows to `path`, then flush and sync to disk
fn export_to_path<R: Serialize>(path: &Path, rows: impl IntoIterator<Item = R>) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    let count = write_rows(&mut writer, rows)?;

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    file.sync_all()?;

    tracing::info!("Wrote {} rows to {:?}", count, path);
    Ok(count)
}
