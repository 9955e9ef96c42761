use std::{fmt::Display, fs::File, io::BufReader, path::{Path, PathBuf}};
use std::error::Error;
use serde::Deserialize;
use clap::Parser;

use crate::exercises::Exercise;


#[derive(Parser, Debug)]
#[command(version, about = "Run the regression examples of each exercise", long_about = None)]
pub struct Cli {
    /// Sets a custom config file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exercise to run, can be repeated (default: all)
    #[arg(short = 'e', long = "exercise", value_name = "NAME")]
    exercises: Vec<String>,

    /// Directory for the log file
    #[arg(short = 'l', long, value_name = "DIRECTORY")]
    log_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
/// Configuration structure for the runner
pub struct Config {
    /// Exercises to run, empty means all of them
    pub exercises: Vec<String>,
    /// Where `leetcode.log` is written
    pub log_dir: PathBuf,
    /// Filter used when RUST_LOG is not set
    pub log_level: String,
}

/// Reads the configuration from a JSON file
/// # Arguments
/// * `path` - A path to the configuration file
/// # Returns
/// A Result containing the Config instance or an error
fn read_config_from_file<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config = serde_json::from_reader(reader)?;

    Ok(config)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exercises: Vec::new(),
            log_dir: PathBuf::from(logging::DEFAULT_LOG_DIR),
            log_level: String::from(logging::DEFAULT_LOG_LEVEL),
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let exercises = if self.exercises.is_empty() {
            String::from("all")
        } else {
            self.exercises.join(", ")
        };
        write!(f, "exercises : {}\nlog_dir : {}\nlog_level : {}",
            exercises,
            self.log_dir.display(),
            self.log_level)
    }
}

impl Config {
    /// Build configuration from command line arguments
    /// # Arguments
    /// * `cli` - The parsed command line arguments
    /// # Returns
    /// A Config instance, command line values taking precedence over the file
    pub fn build_config(cli : Cli) -> Result<Config, Box<dyn Error>>
    {
        let mut config = match cli.config {
            Some(path) => match read_config_from_file(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    return Err(format!("Failed to read config file {}: {}", path.display(), e).into());
                }
            },
            None => Config::default(),
        };

        if !cli.exercises.is_empty() {
            config.exercises = cli.exercises;
        }
        if let Some(log_dir) = cli.log_dir {
            config.log_dir = log_dir;
        }

        Ok(config)
    }

    /// Resolve the configured exercise names, all of them when none is given.
    pub fn selected_exercises(&self) -> Result<Vec<Exercise>, Box<dyn Error>> {
        if self.exercises.is_empty() {
            return Ok(Exercise::ALL.to_vec());
        }

        self.exercises
            .iter()
            .map(|name| name.parse::<Exercise>().map_err(Into::into))
            .collect()
    }
}
