//! GIOŚ HTTP client.
//!
//! Fetches page documents from the station API with retry on rate limiting.
//! A semaphore caps the number of requests in flight; a permit is held for
//! one HTTP exchange only, never across a backoff sleep.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::fetch::{PageSource, Resource};

use super::config::ClientConfig;
use super::error::FetchError;
use super::retry::{Attempt, RetryPolicy, retry_with_backoff};

/// Longest body excerpt kept in error messages.
const MAX_ERROR_BODY: usize = 500;

/// Client for the GIOŚ station API.
#[derive(Debug, Clone)]
pub struct GiosClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
    semaphore: Arc<Semaphore>,
}

impl GiosClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry_policy(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Full URL of a listing resource, without the page query.
    pub fn url_for(&self, resource: &Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// GET a JSON document, retrying while the API answers 429.
    pub async fn fetch_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, FetchError> {
        retry_with_backoff(&self.retry, url, move || self.get_once(url, query)).await
    }

    async fn get_once(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Attempt<Value>, FetchError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FetchError::Status {
                status: 0,
                url: url.to_string(),
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Attempt::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map(Attempt::Done)
            .map_err(|e| FetchError::Json {
                message: format!(
                    "{e} (body: {})",
                    body.chars().take(MAX_ERROR_BODY).collect::<String>()
                ),
            })
    }
}

impl PageSource for GiosClient {
    async fn fetch_page(
        &self,
        resource: &Resource,
        page: u32,
        size: u32,
    ) -> Result<Value, FetchError> {
        let url = self.url_for(resource);
        debug!(%url, page, size, "fetching page");
        self.fetch_json(&url, &[("page", page.to_string()), ("size", size.to_string())])
            .await
    }
}
