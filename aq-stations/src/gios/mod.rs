//! GIOŚ PJP API client.
//!
//! This module knows everything specific to the Polish Chief Inspectorate of
//! Environmental Protection station API:
//! - the endpoint shapes (`findAll`, `sensors/<station>`) and page query
//! - the Polish field labels used in response documents
//! - how the API signals rate limiting (HTTP 429) and how we back off
//!
//! The paging and fan-out logic lives in [`crate::fetch`] and only talks to
//! this module through [`PageSource`](crate::fetch::PageSource).

mod client;
mod config;
mod error;
mod parse;
mod retry;
mod schema;

pub use client::GiosClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_PAGES, DEFAULT_MAX_RETRIES,
    DEFAULT_PAGE_SIZE,
};
pub use error::FetchError;
pub use parse::{ParseError, parse_page, total_pages};
pub use retry::{Attempt, RetryPolicy, retry_with_backoff};
pub use schema::{Entity, EntityKind, RawInstallation, RawStation, TOTAL_PAGES_FIELD};
