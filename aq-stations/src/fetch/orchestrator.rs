//! Station dataset assembly.
//!
//! The run moves through four phases:
//! 1. fetch every station listing page
//! 2. dispatch one installation listing fetch per station
//! 3. await all installation fetches, keyed by station id
//! 4. merge each station's installations into it, once
//!
//! Stations are required: any failure reading the station listing fails the
//! run. Installations are best effort per station: a failure on any of a
//! station's installation pages leaves that station with no installations
//! and does not affect the others.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::{Installation, Station, StationId};
use crate::gios::{ClientConfig, DEFAULT_MAX_PAGES, FetchError, GiosClient};

use super::pages::fetch_all_pages;
use super::source::{PageSource, Resource};

/// Fetches all stations and their installations from a [`PageSource`].
pub struct StationFetcher<S> {
    source: S,
    page_size: u32,
    max_pages: u32,
}

impl StationFetcher<GiosClient> {
    /// Create a fetcher backed by the live API client.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = GiosClient::new(config)?;
        Ok(Self::new(client, config.page_size).with_max_pages(config.max_pages))
    }
}

impl<S: PageSource> StationFetcher<S> {
    /// Create a fetcher requesting `page_size` records per page.
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Reject listings that declare more than `max_pages` pages.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch every station with its installations merged in.
    ///
    /// With `echo` set, each station and its installations are printed to
    /// stdout once merging is done.
    pub async fn get_all_stations(&self, echo: bool) -> Result<Vec<Station>, FetchError> {
        let started = Instant::now();
        info!("fetching station listing");

        let mut stations: Vec<Station> =
            fetch_all_pages(&self.source, &Resource::Stations, self.page_size, self.max_pages)
                .await?;

        info!(
            stations = stations.len(),
            "station listing complete, fetching installations"
        );

        let mut installations = self
            .fetch_installations(stations.iter().map(|s| s.id))
            .await;

        for station in &mut stations {
            let found = installations.remove(&station.id).unwrap_or_default();
            station.add_installations(found);
        }

        let total: usize = stations.iter().map(Station::installation_count).sum();
        info!(
            stations = stations.len(),
            installations = total,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetch complete"
        );

        if echo {
            print_stations(&stations);
        }

        Ok(stations)
    }

    /// Fetch installations for each distinct station id concurrently.
    ///
    /// Every future is awaited exactly once; results are keyed by the id the
    /// future was dispatched for, not by completion order.
    async fn fetch_installations(
        &self,
        ids: impl Iterator<Item = StationId>,
    ) -> HashMap<StationId, Vec<Installation>> {
        let mut seen = HashSet::new();
        let tasks: Vec<_> = ids
            .filter(|id| seen.insert(*id))
            .map(|id| async move { (id, self.station_installations(id).await) })
            .collect();

        debug!(tasks = tasks.len(), "dispatching installation fetches");

        join_all(tasks).await.into_iter().collect()
    }

    async fn station_installations(&self, id: StationId) -> Vec<Installation> {
        let resource = Resource::Installations(id);

        let fetched = fetch_all_pages::<_, Installation>(
            &self.source,
            &resource,
            self.page_size,
            self.max_pages,
        )
        .await;

        match fetched {
            Ok(installations) => {
                debug!(station = %id, installations = installations.len(), "fetched installations");
                installations
            }
            Err(e) => {
                warn!(station = %id, error = %e, "failed to fetch installations, using empty");
                Vec::new()
            }
        }
    }
}

/// Print each station and its installations to stdout.
pub fn print_stations(stations: &[Station]) {
    for station in stations {
        println!("{station}");
    }
}
