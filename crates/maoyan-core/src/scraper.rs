//! Main Maoyan scraper API
//!
//! Combines the HTTP client with the response parser. Fetch problems are
//! never escalated: they are reported and returned as a `FetchOutcome`
//! so callers can treat them the same as "no schedule".

use tracing::{error, warn};

use crate::client::MaoyanClient;
use crate::error::{MaoyanError, Result};
use crate::parser::parse_show_data;
use crate::types::{CinemaId, Movie, ShowData};

/// Result of fetching a cinema's schedule
#[derive(Debug)]
pub enum FetchOutcome {
    /// Response contained a `showData` object
    Data(ShowData),
    /// Response was JSON but had no `showData`
    Empty,
    /// Request failed or the body could not be parsed
    Failed(MaoyanError),
}

impl FetchOutcome {
    /// Movies from the response; empty unless the fetch produced data
    pub fn into_movies(self) -> Vec<Movie> {
        match self {
            FetchOutcome::Data(data) => data.movies,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, FetchOutcome::Data(_))
    }
}

/// Scraper for a Maoyan cinema's schedule
///
/// # Example
/// ```no_run
/// use maoyan_core::{CinemaId, MaoyanScraper};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = MaoyanScraper::new()?;
///     let movies = scraper
///         .fetch_show_data(&CinemaId::new("24311"))
///         .await
///         .into_movies();
///     println!("Found {} movies", movies.len());
///     Ok(())
/// }
/// ```
pub struct MaoyanScraper {
    client: MaoyanClient,
}

impl MaoyanScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = MaoyanClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need custom client configuration.
    pub fn with_client(client: MaoyanClient) -> Self {
        Self { client }
    }

    /// Fetch and parse the schedule of one cinema.
    ///
    /// Issues a single request; there is no retry.
    pub async fn fetch_show_data(&self, cinema_id: &CinemaId) -> FetchOutcome {
        let body = match self.client.fetch_cinema_detail(cinema_id).await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to fetch cinema data: {}", e);
                return FetchOutcome::Failed(e);
            }
        };

        match parse_show_data(&body) {
            Ok(Some(data)) => FetchOutcome::Data(data),
            Ok(None) => {
                warn!("Response JSON has no 'showData' field; the API may have changed");
                FetchOutcome::Empty
            }
            Err(e) => {
                warn!("Could not parse cinema data: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }
}
