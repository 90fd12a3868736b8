#![forbid(unsafe_code)]

//! Core data pipeline for the liftlog workout log analyser.
//!
//! This crate provides:
//! - Domain types (entries, session summaries, progressions)
//! - CSV record parsing with best-effort numeric coercion
//! - Session aggregation and one-rep-max estimation
//! - Workout/exercise catalogs and per-exercise progression series
//! - Source retrieval, display formatting and CSV export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod parser;
pub mod dates;
pub mod aggregate;
pub mod catalog;
pub mod progression;
pub mod source;
pub mod display;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use parser::parse;
pub use aggregate::{aggregate, estimated_1rm};
pub use catalog::{exercise_names, exercise_names_by, workout_names, ExerciseOrder};
pub use progression::progression;
pub use source::{load_entries, FileSource, WorkoutSource};
pub use display::{format_date, format_duration};
