//! HTTP client for m.maoyan.com
//!
//! This module provides the client for the mobile site's `cinemaDetail`
//! endpoint. Every request carries a User-Agent drawn from a per-client
//! randomized pool and a Referer pointing at the cinema's own page.

use std::time::Duration;

use reqwest::header;
use tracing::{debug, info};

use crate::error::Result;
use crate::types::CinemaId;
use crate::user_agent::UserAgentPool;

/// Base URL for the Maoyan mobile site
pub const MAOYAN_BASE_URL: &str = "https://m.maoyan.com";

/// Configuration for the Maoyan HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host requests are sent to (default: `https://m.maoyan.com`)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: MAOYAN_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the Maoyan cinema endpoints
///
/// The User-Agent pool is generated once when the client is built and
/// reused for every request it sends.
pub struct MaoyanClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    base_url: String,
    user_agents: UserAgentPool,
}

impl MaoyanClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration and a freshly
    /// generated User-Agent pool
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let pool = UserAgentPool::generate(&mut rand::thread_rng());
        Self::with_user_agents(config, pool)
    }

    /// Create a new client with an explicit User-Agent pool
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_user_agents(config: ClientConfig, user_agents: UserAgentPool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agents,
        })
    }

    /// URL of the cinema detail endpoint (query string excluded)
    pub fn detail_url(&self) -> String {
        format!("{}/ajax/cinemaDetail", self.base_url)
    }

    /// Referer sent along with requests about `cinema_id`
    pub fn referer(&self, cinema_id: &CinemaId) -> String {
        format!("{}/cinema/{}", self.base_url, cinema_id)
    }

    /// Fetch the raw body of the cinema detail endpoint
    ///
    /// # Errors
    /// - `MaoyanError::HttpError` - network error, timeout, or non-2xx status
    pub async fn fetch_cinema_detail(&self, cinema_id: &CinemaId) -> Result<String> {
        let user_agent = self.user_agents.choose(&mut rand::thread_rng());
        info!("Using User-Agent: {}", user_agent);

        let url = self.detail_url();
        debug!("GET {}?cinemaId={}", url, cinema_id);

        let response = self
            .client
            .get(&url)
            .query(&[("cinemaId", cinema_id.as_str())])
            .header(header::USER_AGENT, user_agent)
            .header(header::REFERER, self.referer(cinema_id))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// Get the User-Agent pool used by this client
    pub fn user_agents(&self) -> &UserAgentPool {
        &self.user_agents
    }
}
