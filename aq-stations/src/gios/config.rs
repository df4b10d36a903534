//! Client configuration.

use std::time::Duration;

use super::retry::RetryPolicy;

/// Default base URL for the station API.
pub const DEFAULT_BASE_URL: &str = "https://api.gios.gov.pl/pjp-api/v1/rest/station/";

/// Default page size. 500 is the largest page the API will serve.
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Default number of attempts per request when rate limited.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default maximum number of requests in flight at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Default cap on the number of pages read from one listing.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Default backoff unit: the wait after the first 429.
const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Configuration for [`GiosClient`](super::GiosClient) and the fetch engine.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API (defaults to production GIOŚ)
    pub base_url: String,
    /// Records requested per page
    pub page_size: u32,
    /// Attempts per request before giving up on repeated 429s
    pub max_retries: u32,
    /// Wait after the first 429; doubles on each consecutive one
    pub backoff: Duration,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Largest `totalPages` a listing may declare
    pub max_pages: u32,
}

impl ClientConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: DEFAULT_BACKOFF,
            timeout_secs: 30,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set the number of attempts made when rate limited.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the backoff unit.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the largest page count accepted from a listing.
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }

    /// The retry policy described by this config.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.backoff)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ClientConfig::new();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 500);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.backoff, Duration::from_secs(1));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.max_pages, 10_000);
    }

    #[test]
    fn config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_page_size(1)
            .with_max_retries(3)
            .with_backoff(Duration::from_millis(10))
            .with_timeout(5)
            .with_max_concurrent(2)
            .with_max_pages(7);

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff, Duration::from_millis(10));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.max_pages, 7);
    }

    #[test]
    fn retry_policy_follows_config() {
        let policy = ClientConfig::new()
            .with_max_retries(4)
            .with_backoff(Duration::from_millis(250))
            .retry_policy();

        assert_eq!(policy.max_retries(), 4);
        assert_eq!(policy.delay_for(0), Duration::from_millis(250));
    }
}
