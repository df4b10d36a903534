//! Pagination and fan-out engine.
//!
//! Listing endpoints don't announce their page count up front: it arrives
//! with the first page. [`fetch_all_pages`] reads page 0, then requests every
//! remaining page concurrently. [`StationFetcher`] runs that over the station
//! listing and then over each station's installation listing, merging
//! results back by station id.
//!
//! Everything here runs on the caller's task. Futures are joined, never
//! spawned, so no shared state needs locking.

mod orchestrator;
mod pages;
mod source;

#[cfg(test)]
mod mock;

pub use orchestrator::{StationFetcher, print_stations};
pub use pages::fetch_all_pages;
pub use source::{PageSource, Resource};
