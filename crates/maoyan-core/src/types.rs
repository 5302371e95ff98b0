//! Data types for the Maoyan schedule exporter
//!
//! This module contains the structures deserialized from the
//! `cinemaDetail` endpoint (`ShowData` → `Movie` → `DayGroup` → `Showing`)
//! and the flat `OutputRow` written to CSV.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder written for fields missing from the response
pub const MISSING: &str = "N/A";

/// Opaque cinema identifier, kept in its textual form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CinemaId(String);

impl CinemaId {
    /// Create a cinema identifier from its textual form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CinemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loosely typed scalar taken from the response JSON.
///
/// Distinguishes a missing key (rendered as `N/A`) from an explicit
/// `null` (rendered as an empty cell).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValue(Option<Value>);

impl FieldValue {
    /// Whether the key was absent from the JSON object
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Render the value as a CSV cell
    pub fn render(&self) -> String {
        match &self.0 {
            None => MISSING.to_string(),
            Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self(Some(value))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present, so `null` stays distinguishable
        Value::deserialize(deserializer).map(FieldValue::from)
    }
}

/// Treat an absent or `null` list as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The `showData` object of a `cinemaDetail` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShowData {
    /// Movies currently scheduled at the cinema
    #[serde(default, deserialize_with = "null_as_empty")]
    pub movies: Vec<Movie>,
}

impl ShowData {
    /// Total number of showings across all movies
    pub fn showing_count(&self) -> usize {
        self.movies.iter().map(Movie::showing_count).sum()
    }
}

/// A movie with its grouped showings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Movie {
    /// Maoyan movie identifier
    #[serde(default)]
    pub id: FieldValue,
    /// Movie name
    #[serde(default)]
    pub nm: FieldValue,
    /// Showings grouped (nominally) per day
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shows: Vec<DayGroup>,
}

impl Movie {
    /// Number of showings across all day groups
    pub fn showing_count(&self) -> usize {
        self.shows.iter().map(|day| day.plist.len()).sum()
    }
}

/// Intermediate grouping level of the response.
///
/// The group carries its own date field upstream but it is unreliable,
/// so only the showing list is kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DayGroup {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plist: Vec<Showing>,
}

/// One scheduled screening
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Showing {
    /// Date (`YYYY-MM-DD`)
    #[serde(default)]
    pub dt: FieldValue,
    /// Start time (`HH:MM`)
    #[serde(default)]
    pub tm: FieldValue,
    /// Hall name
    #[serde(default)]
    pub th: FieldValue,
    #[serde(default)]
    pub lang: FieldValue,
    /// Version, e.g. `2D` or `IMAX 3D`
    #[serde(default)]
    pub tp: FieldValue,
    #[serde(default, rename = "discountSellPrice")]
    pub discount_sell_price: FieldValue,
    #[serde(default, rename = "seqNo")]
    pub seq_no: FieldValue,
}

/// One flattened CSV row, one per showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub cinema_id: String,
    pub movie_id: String,
    pub movie_name: String,
    pub date: String,
    pub start_time: String,
    pub hall: String,
    pub language: String,
    pub version: String,
    pub price: String,
    pub seq_no: String,
    pub crawl_time: String,
}

impl OutputRow {
    /// Column names of the output file, in order
    pub const HEADER: [&'static str; 11] = [
        "cinema_id",
        "movie_id",
        "movie_name",
        "date",
        "start_time",
        "hall",
        "language",
        "version",
        "price",
        "seq_no",
        "crawl_time",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_rendering() {
        assert_eq!(FieldValue::default().render(), "N/A");
        assert_eq!(FieldValue::from(Value::Null).render(), "");
        assert_eq!(FieldValue::from(json!("Hall 1")).render(), "Hall 1");
        assert_eq!(FieldValue::from(json!(50)).render(), "50");
        assert_eq!(FieldValue::from(json!(39.9)).render(), "39.9");
        assert_eq!(FieldValue::from(json!(true)).render(), "true");
    }

    #[test]
    fn test_showing_missing_vs_null() {
        let showing: Showing = serde_json::from_value(json!({ "dt": null })).unwrap();
        assert!(!showing.dt.is_missing());
        assert_eq!(showing.dt.render(), "");
        assert!(showing.tm.is_missing());
        assert_eq!(showing.tm.render(), "N/A");
    }

    #[test]
    fn test_showing_renamed_fields() {
        let showing: Showing = serde_json::from_value(json!({
            "discountSellPrice": "35.9",
            "seqNo": "202401010001"
        }))
        .unwrap();
        assert_eq!(showing.discount_sell_price.render(), "35.9");
        assert_eq!(showing.seq_no.render(), "202401010001");
    }

    #[test]
    fn test_null_lists_are_empty() {
        let data: ShowData = serde_json::from_value(json!({ "movies": null })).unwrap();
        assert!(data.movies.is_empty());

        let movie: Movie = serde_json::from_value(json!({ "id": 1, "shows": null })).unwrap();
        assert!(movie.shows.is_empty());

        let day: DayGroup = serde_json::from_value(json!({ "dateShow": "today" })).unwrap();
        assert!(day.plist.is_empty());
    }

    #[test]
    fn test_showing_count() {
        let data: ShowData = serde_json::from_value(json!({
            "movies": [
                { "id": 1, "shows": [{ "plist": [{}, {}] }, { "plist": [{}] }] },
                { "id": 2, "shows": [] },
                { "id": 3 }
            ]
        }))
        .unwrap();
        assert_eq!(data.movies.len(), 3);
        assert_eq!(data.showing_count(), 3);
    }

    #[test]
    fn test_cinema_id_display() {
        let id = CinemaId::new("12345");
        assert_eq!(id.to_string(), "12345");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12345\"");
    }
}
