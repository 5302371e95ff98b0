//! JSON configuration file
//!
//! The config holds a single `cinemaId`, given either as a string or a
//! number: `{"cinemaId": 12345}`.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::error;

use crate::error::{MaoyanError, Result};
use crate::types::CinemaId;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Run configuration loaded from `config.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(rename = "cinemaId", default, deserialize_with = "deserialize_cinema_id")]
    cinema_id: Option<CinemaId>,
}

impl Config {
    /// Load the config from a JSON file.
    ///
    /// # Errors
    /// - `MaoyanError::ConfigNotFound` - the file does not exist
    /// - `MaoyanError::ConfigParse` - the file is not valid JSON or has the wrong shape
    /// - `MaoyanError::ConfigRead` - any other read failure
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(
                    "{} not found; create it next to the program and set cinemaId",
                    path.display()
                );
                return Err(MaoyanError::ConfigNotFound(path.to_path_buf()));
            }
            Err(e) => {
                error!("Unexpected error reading {}: {}", path.display(), e);
                return Err(MaoyanError::ConfigRead(e));
            }
        };

        Self::from_json(&contents).inspect_err(|_| {
            error!("{} is not a valid config file", path.display());
        })
    }

    /// Parse the config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(MaoyanError::ConfigParse)
    }

    /// Build a config for a known cinema
    pub fn with_cinema_id(cinema_id: CinemaId) -> Self {
        Self {
            cinema_id: Some(cinema_id),
        }
    }

    /// The configured cinema.
    ///
    /// # Errors
    /// Returns `MaoyanError::MissingCinemaId` if the key is absent or empty.
    pub fn cinema_id(&self) -> Result<&CinemaId> {
        self.cinema_id.as_ref().ok_or(MaoyanError::MissingCinemaId)
    }
}

/// Accept strings and numbers; `null`, `""`, `0` and `false` count as absent.
fn deserialize_cinema_id<'de, D>(deserializer: D) -> std::result::Result<Option<CinemaId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(CinemaId::new(s))),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(CinemaId::new(n.to_string()))),
        Some(other) => Err(D::Error::custom(format!(
            "cinemaId must be a string or a number, got {other}"
        ))),
    }
}
