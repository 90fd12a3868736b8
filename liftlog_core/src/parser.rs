//! Record parser for exported workout logs.
//!
//! Converts header-first CSV text into typed [`WorkoutEntry`] records.
//! Parsing is best-effort: numeric fields are coerced (missing or
//! non-numeric values become 0) and input that is not table-shaped yields
//! an empty sequence instead of an error.

use crate::WorkoutEntry;
use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Entry field a header column maps onto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Date,
    WorkoutName,
    Duration,
    ExerciseName,
    SetOrder,
    Weight,
    Reps,
    Distance,
    Seconds,
    Rpe,
}

/// Accepted header labels, in both display style and camel style.
/// Matching is case-sensitive.
static HEADER_ALIASES: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    HashMap::from([
        ("Date", Field::Date),
        ("date", Field::Date),
        ("Workout Name", Field::WorkoutName),
        ("workoutName", Field::WorkoutName),
        ("Duration", Field::Duration),
        ("duration", Field::Duration),
        ("Exercise Name", Field::ExerciseName),
        ("exerciseName", Field::ExerciseName),
        ("Set Order", Field::SetOrder),
        ("setOrder", Field::SetOrder),
        ("Weight", Field::Weight),
        ("weight", Field::Weight),
        ("Reps", Field::Reps),
        ("reps", Field::Reps),
        ("Distance", Field::Distance),
        ("distance", Field::Distance),
        ("Seconds", Field::Seconds),
        ("seconds", Field::Seconds),
        ("RPE", Field::Rpe),
        ("rpe", Field::Rpe),
    ])
});

/// Parse raw CSV text into workout entries
///
/// - The first row is the header; unknown columns are ignored.
/// - Rows whose every field is empty are skipped.
/// - Row order is preserved.
/// - Returns an empty vector when no header column is recognised.
pub fn parse(raw: &str) -> Vec<WorkoutEntry> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(raw.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            tracing::warn!("Unable to read header row: {}. No entries parsed.", e);
            return Vec::new();
        }
    };

    let columns: Vec<Option<Field>> = headers
        .iter()
        .map(|label| HEADER_ALIASES.get(label).copied())
        .collect();

    if columns.iter().all(Option::is_none) {
        if !headers.is_empty() {
            tracing::warn!(
                "Header row {:?} has no recognised columns. No entries parsed.",
                headers
            );
        }
        return Vec::new();
    }

    let mut entries = Vec::new();
    for (row_num, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping unreadable row {}: {}", row_num + 2, e);
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        entries.push(entry_from_record(&columns, &record));
    }

    tracing::debug!("Parsed {} workout entries", entries.len());
    entries
}

fn entry_from_record(columns: &[Option<Field>], record: &StringRecord) -> WorkoutEntry {
    let mut entry = WorkoutEntry::default();

    for (field, value) in columns.iter().zip(record.iter()) {
        let Some(field) = field else { continue };
        match field {
            Field::Date => entry.date = value.to_string(),
            Field::WorkoutName => entry.workout_name = value.to_string(),
            Field::Duration => entry.duration = value.to_string(),
            Field::ExerciseName => entry.exercise_name = value.to_string(),
            // `as` saturates: negatives become 0
            Field::SetOrder => entry.set_order = coerce_number(value) as u32,
            Field::Weight => entry.weight = coerce_number(value),
            Field::Reps => entry.reps = coerce_number(value),
            Field::Distance => entry.distance = coerce_number(value),
            Field::Seconds => entry.seconds = coerce_number(value),
            Field::Rpe => entry.rpe = value.to_string(),
        }
    }

    entry
}

/// Best-effort numeric coercion
///
/// Parses the longest leading numeric prefix (`"82.5kg"` is 82.5).
/// Empty, non-numeric or non-finite values become 0.
pub fn coerce_number(value: &str) -> f64 {
    let s = value.trim();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digit_count += frac_end - (end + 1);
        end = frac_end;
    }

    if digit_count == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
