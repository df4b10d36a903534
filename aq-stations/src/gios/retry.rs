//! Retry with exponential backoff on rate limiting.
//!
//! The API answers HTTP 429 when hit too hard. We wait one backoff unit after
//! the first 429 and double the wait on each consecutive one (1, 2, 4, ...).
//! Any other failure is terminal for the request and is returned immediately.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use super::error::FetchError;

/// Outcome of a single request attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    /// The request succeeded.
    Done(T),
    /// The server asked us to slow down (HTTP 429).
    RateLimited,
}

/// How many times to try a rate-limited request and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy making up to `max_retries` attempts.
    ///
    /// At least one attempt is always made, even if `max_retries` is zero.
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Maximum number of attempts.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Wait after the `attempt`-th consecutive 429 (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Run `op` until it succeeds, fails, or has been rate limited too often.
///
/// `url` only labels log events and errors.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    url: &str,
    mut op: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Attempt<T>, FetchError>>,
{
    let attempts = policy.max_retries.max(1);

    for attempt in 0..attempts {
        match op().await {
            Ok(Attempt::Done(value)) => {
                if attempt > 0 {
                    debug!(url, attempt = attempt + 1, "request succeeded after retry");
                }
                return Ok(value);
            }
            Ok(Attempt::RateLimited) => {
                // No point sleeping if there is no attempt left to make.
                if attempt + 1 == attempts {
                    break;
                }
                let delay = policy.delay_for(attempt);
                warn!(
                    url,
                    attempt = attempt + 1,
                    max_retries = attempts,
                    delay_ms = delay.as_millis() as u64,
                    "HTTP 429 too many requests, backing off"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                warn!(url, error = %e, "request failed");
                return Err(e);
            }
        }
    }

    warn!(url, attempts, "giving up after repeated rate limiting");
    Err(FetchError::MaxRetriesExceeded {
        url: url.to_string(),
        attempts,
    })
}
