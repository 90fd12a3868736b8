use clap::{Parser, Subcommand};
use liftlog_core::catalog::exercise_counts_by;
use liftlog_core::display::{format_date_with, format_number};
use liftlog_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Workout log analyser: session summaries and lift progression", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workout log CSV (overrides data.log_path)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Load configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-session summaries for each exercise
    Summary {
        /// Only show this exercise (exact name)
        #[arg(long)]
        exercise: Option<String>,

        /// Only show this workout (exact name)
        #[arg(long)]
        workout: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List distinct workout names
    Workouts {
        #[arg(long)]
        json: bool,
    },

    /// List exercises, most trained first
    Exercises {
        #[arg(long)]
        json: bool,
    },

    /// Show the progression series for one exercise
    Progression {
        /// Exercise name (exact, case-sensitive)
        exercise: String,

        #[arg(long)]
        json: bool,

        /// Also write the series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Export all session summaries to a CSV file
    Export {
        /// Destination CSV file
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    liftlog_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let log_path = cli.file.clone().unwrap_or_else(|| config.data.log_path.clone());

    let entries = load_entries(&FileSource::new(&log_path));

    match cli.command {
        Commands::Summary {
            exercise,
            workout,
            json,
        } => cmd_summary(&entries, exercise, workout, json, &config),
        Commands::Workouts { json } => cmd_workouts(&entries, json),
        Commands::Exercises { json } => cmd_exercises(&entries, json, &config),
        Commands::Progression {
            exercise,
            json,
            csv,
        } => cmd_progression(&entries, &exercise, json, csv, &config),
        Commands::Export { out } => cmd_export(&entries, out),
    }
}

fn cmd_summary(
    entries: &[WorkoutEntry],
    exercise: Option<String>,
    workout: Option<String>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let summaries: Vec<ProcessedWorkoutData> = aggregate(entries)
        .into_iter()
        .filter(|s| exercise.as_ref().map_or(true, |e| &s.exercise_name == e))
        .filter(|s| workout.as_ref().map_or(true, |w| &s.workout_name == w))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        print_no_data();
        return Ok(());
    }

    println!(
        "{:<14} {:<20} {:<28} {:>8} {:>10} {:>8} {:>5} {:>8}",
        "Date", "Workout", "Exercise", "Max", "Volume", "Reps", "Sets", "e1RM"
    );
    for s in &summaries {
        println!(
            "{:<14} {:<20} {:<28} {:>8} {:>10} {:>8} {:>5} {:>8}",
            format_date_with(s.date, &config.display.date_format),
            s.workout_name,
            s.exercise_name,
            format_number(s.max_weight),
            format_number(s.total_volume),
            format_number(s.avg_reps),
            s.sets,
            format_number(s.estimated_1rm),
        );
    }

    Ok(())
}

fn cmd_workouts(entries: &[WorkoutEntry], json: bool) -> Result<()> {
    let names = workout_names(entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else if names.is_empty() {
        print_no_data();
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}

fn cmd_exercises(entries: &[WorkoutEntry], json: bool, config: &Config) -> Result<()> {
    if json {
        let names = exercise_names_by(entries, config.catalog.exercise_order);
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    let counts = exercise_counts_by(entries, config.catalog.exercise_order);
    if counts.is_empty() {
        print_no_data();
        return Ok(());
    }

    for (name, sets) in counts {
        println!("{:>5} sets  {}", sets, name);
    }

    Ok(())
}

fn cmd_progression(
    entries: &[WorkoutEntry],
    exercise: &str,
    json: bool,
    csv: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let series = progression(&aggregate(entries), exercise);

    if let Some(path) = csv {
        let count = liftlog_core::export::export_progression_to_path(&path, &series)?;
        eprintln!("✓ Wrote {} points to {}", count, path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    if series.is_empty() {
        println!("No sessions found for exercise '{}'.", exercise);
        return Ok(());
    }

    println!("{}", series.exercise_name);
    println!(
        "{:<14} {:>8} {:>10} {:>8} {:>5} {:>8}",
        "Date", "Max", "Volume", "Reps", "Sets", "e1RM"
    );
    for point in &series.data {
        println!(
            "{:<14} {:>8} {:>10} {:>8} {:>5} {:>8}",
            format_date_with(point.date, &config.display.date_format),
            format_number(point.max_weight),
            format_number(point.total_volume),
            format_number(point.avg_reps),
            point.sets,
            format_number(point.estimated_1rm),
        );
    }

    if let Some(best) = series.best_estimated_1rm() {
        println!();
        println!("Best estimated 1RM: {}", format_number(best));
    }

    Ok(())
}

fn cmd_export(entries: &[WorkoutEntry], out: PathBuf) -> Result<()> {
    let summaries = aggregate(entries);
    let count = liftlog_core::export::export_summaries_to_path(&out, &summaries)?;

    tracing::debug!("Exported {} sessions", count);
    println!("✓ Exported {} sessions to {}", count, out.display());
    Ok(())
}

fn print_no_data() {
    println!("No workout data found.");
}
