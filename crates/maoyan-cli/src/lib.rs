//! Maoyan Schedule command-line front end
//!
//! This crate wires `maoyan-core` into a single-shot program: read
//! `config.json`, fetch the cinema's schedule, append it to
//! `filmdata.csv`.
//!
//! # Usage
//!
//! ```text
//! maoyan-schedule                      # config.json -> filmdata.csv
//! maoyan-schedule --config other.json --output out.csv --verbose
//! ```

pub mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use maoyan_core::{ClientConfig, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};

pub use pipeline::{run, RunOptions, RunOutcome};

/// Command-line arguments. Every flag is optional.
#[derive(Debug, Parser)]
#[command(name = "maoyan-schedule")]
#[command(about = "Append a Maoyan cinema's showtimes to a CSV file")]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, help = "Configuration file path")]
    pub config: PathBuf,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH, help = "CSV file to append to")]
    pub output: PathBuf,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,
}

impl Cli {
    /// Options for a run against the live Maoyan endpoint
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            output_path: self.output.clone(),
            client: ClientConfig::default(),
        }
    }
}

/// Install the stdout log subscriber
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
