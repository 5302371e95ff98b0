//! Parsers for Maoyan responses
//!
//! This module contains:
//! - `show_data`: Extract the `showData` object from a `cinemaDetail` body
//! - `rows`: Flatten movies into one output row per showing

pub mod rows;
pub mod show_data;

// Re-export main parsing functions
pub use rows::{flatten_rows, format_crawl_time};
pub use show_data::parse_show_data;
