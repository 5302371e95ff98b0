//! `cinemaDetail` response parser
//!
//! The endpoint answers `{ "showData": { "movies": [...] }, ... }`.

use serde_json::Value;

use crate::error::{MaoyanError, Result};
use crate::types::ShowData;

/// Parse the `showData` object out of a `cinemaDetail` response body.
///
/// # Returns
/// * `Ok(Some(ShowData))` when the field is present
/// * `Ok(None)` when the body is JSON but has no (or a `null`) `showData`
/// * `Err(MaoyanError::InvalidJson)` when the body is not JSON
/// * `Err(MaoyanError::UnexpectedShape)` when `showData` has the wrong structure
///
/// # Examples
/// ```
/// use maoyan_core::parser::parse_show_data;
///
/// let data = parse_show_data(r#"{"showData": {"movies": []}}"#).unwrap();
/// assert!(data.unwrap().movies.is_empty());
///
/// assert!(parse_show_data("{}").unwrap().is_none());
/// ```
pub fn parse_show_data(body: &str) -> Result<Option<ShowData>> {
    let mut root: Value = serde_json::from_str(body).map_err(MaoyanError::InvalidJson)?;

    let show_data = match root.get_mut("showData").map(Value::take) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    serde_json::from_value(show_data)
        .map(Some)
        .map_err(|e| MaoyanError::UnexpectedShape(format!("showData: {e}")))
}
