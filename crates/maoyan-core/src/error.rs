//! Error types for the Maoyan schedule exporter
//!
//! This module defines all error types used throughout the library.
//! Configuration errors are fatal to a run, fetch errors are degraded to
//! an empty result by the scraper, and write errors surface to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for Maoyan schedule operations
#[derive(Error, Debug)]
pub enum MaoyanError {
    /// Config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file exists but could not be read
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// Config file is not valid JSON or has the wrong shape
    #[error("Malformed config file: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// Config has no usable `cinemaId`
    #[error("Config is missing the 'cinemaId' field")]
    MissingCinemaId,

    /// HTTP request failed (network, timeout or non-2xx status)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Response JSON does not have the expected structure
    #[error("Unexpected response structure: {0}")]
    UnexpectedShape(String),

    /// Filesystem error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for Maoyan schedule operations
pub type Result<T> = std::result::Result<T, MaoyanError>;
