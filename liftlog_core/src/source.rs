//! Retrieval of the raw workout log.
//!
//! Fetching is the only fallible step before the pipeline runs. Callers that
//! want the pipeline's "no data" semantics use [`load_entries`], which logs a
//! failed fetch and returns no entries instead of propagating the error.

use crate::{Error, Result, WorkoutEntry};
use std::path::PathBuf;

/// Supplies the raw CSV text of a workout log
pub trait WorkoutSource {
    fn fetch(&self) -> Result<String>;

    /// Human-readable location, used in log messages
    fn describe(&self) -> String;
}

/// Workout log stored as a local CSV file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkoutSource for FileSource {
    fn fetch(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(Error::Source(format!(
                "workout log not found at {:?}",
                self.path
            )));
        }

        let bytes = std::fs::read(&self.path)?;
        // exports from spreadsheet tools are not always valid UTF-8
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetch and parse a workout log, degrading to no entries on failure
pub fn load_entries(source: &dyn WorkoutSource) -> Vec<WorkoutEntry> {
    let raw = match source.fetch() {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(
                "Error loading workout data from {}: {}",
                source.describe(),
                e
            );
            return Vec::new();
        }
    };

    let entries = crate::parser::parse(&raw);
    tracing::info!(
        "Loaded {} workout entries from {}",
        entries.len(),
        source.describe()
    );
    entries
}
