//! Maoyan Schedule Core Library
//!
//! This crate provides the building blocks for exporting the showtime
//! schedule of a single Maoyan (m.maoyan.com) cinema to a CSV file.
//!
//! # Features
//! - Load the cinema identifier from a JSON config file
//! - Fetch the cinema detail endpoint with a randomized User-Agent
//! - Flatten movie / day-group / showing data into flat rows
//! - Append rows to a CSV file, writing the header only once

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod user_agent;

// Re-export main types for convenience
pub use client::{ClientConfig, MaoyanClient};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use error::{MaoyanError, Result};
pub use export::{CsvExporter, ExportSummary, DEFAULT_OUTPUT_PATH};
pub use scraper::{FetchOutcome, MaoyanScraper};
pub use types::{CinemaId, DayGroup, FieldValue, Movie, OutputRow, ShowData, Showing};
pub use user_agent::UserAgentPool;
