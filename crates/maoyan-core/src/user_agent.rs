//! Randomized User-Agent pool
//!
//! Each run builds a fresh pool of browser identification strings from
//! fixed templates with randomized version and build numbers, so that
//! consecutive runs do not present the same request fingerprint.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of entries in a generated pool
pub const POOL_SIZE: usize = 10;

/// Used when a pool is built from an empty list of entries
const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Pool of User-Agent strings to pick from per request
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    entries: Vec<String>,
}

impl UserAgentPool {
    /// Generate a pool of `POOL_SIZE` desktop and mobile browser strings
    ///
    /// # Example
    /// ```
    /// use maoyan_core::UserAgentPool;
    ///
    /// let pool = UserAgentPool::generate(&mut rand::thread_rng());
    /// assert_eq!(pool.len(), 10);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let entries = vec![
            format!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.{}.0 Safari/537.36",
                rng.gen_range(1000..=5000)
            ),
            format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.{} Safari/605.1.15",
                rng.gen_range(1..=9)
            ),
            format!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{}.0) Gecko/20100101 Firefox/{}.0",
                rng.gen_range(80..=123),
                rng.gen_range(80..=123)
            ),
            format!(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.{}.0 Safari/537.36",
                rng.gen_range(1000..=4000)
            ),
            format!(
                "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.{}.0 Safari/537.36",
                rng.gen_range(1000..=4000)
            ),
            format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.{} Safari/605.1.15",
                rng.gen_range(1..=9)
            ),
            format!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/119.0.{}.{} Safari/537.36",
                rng.gen_range(0..=9999),
                rng.gen_range(0..=999)
            ),
            format!(
                "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.{} Mobile Safari/537.36",
                rng.gen_range(2000..=6000)
            ),
            format!(
                "Mozilla/5.0 (iPhone; CPU iPhone OS 16_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.{}",
                rng.gen_range(1..=9)
            ),
            format!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/121.0.{}.{} Safari/537.36",
                rng.gen_range(0..=9999),
                rng.gen_range(0..=999)
            ),
        ];

        Self { entries }
    }

    /// Build a pool from explicit entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Pick one entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.entries
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_USER_AGENT)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
