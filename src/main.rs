mod config;
mod exercises;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;

use config::{Cli, Config};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Runs the selected exercises, returns false if any example failed.
fn run() -> Result<bool, Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config::build_config(cli)?;
    let selected = config.selected_exercises()?;

    logging::init_tracing_in(&config.log_dir, &config.log_level, "leetcode");
    tracing::info!("Starting with config:\n{config}");

    let mut total = 0;
    let mut failed = 0;

    for exercise in selected {
        for outcome in exercise.run() {
            total += 1;
            if outcome.passed {
                tracing::info!("{exercise} / {} ok", outcome.label);
            } else {
                failed += 1;
                tracing::error!("{exercise} / {} FAILED: {}", outcome.label, outcome.detail);
                eprintln!("{exercise} / {} FAILED: {}", outcome.label, outcome.detail);
            }
        }
    }

    tracing::info!(total, failed, "run completed");
    println!("{total} examples, {failed} failed");

    Ok(failed == 0)
}
