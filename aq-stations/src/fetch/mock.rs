//! In-memory page source for testing the paging engine without HTTP.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::{Value, json};

use crate::gios::FetchError;

use super::source::{PageSource, Resource};

/// Canned response for one page.
struct MockPage {
    response: Result<Value, u16>,
    delay: Duration,
}

/// Page source serving canned documents, recording every request.
pub(crate) struct MockPageSource {
    pages: HashMap<(Resource, u32), MockPage>,
    requests: Mutex<Vec<(Resource, u32)>>,
}

impl MockPageSource {
    pub(crate) fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `document` for `page` of `resource`.
    pub(crate) fn with_page(self, resource: Resource, page: u32, document: Value) -> Self {
        self.with_delayed_page(resource, page, document, Duration::ZERO)
    }

    /// Serve `document` after sleeping for `delay`.
    pub(crate) fn with_delayed_page(
        mut self,
        resource: Resource,
        page: u32,
        document: Value,
        delay: Duration,
    ) -> Self {
        self.pages.insert(
            (resource, page),
            MockPage {
                response: Ok(document),
                delay,
            },
        );
        self
    }

    /// Fail `page` of `resource` with an HTTP status.
    pub(crate) fn with_failure(mut self, resource: Resource, page: u32, status: u16) -> Self {
        self.pages.insert(
            (resource, page),
            MockPage {
                response: Err(status),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Pages requested for `resource`, in request order.
    pub(crate) fn requested_pages(&self, resource: &Resource) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| r == resource)
            .map(|(_, page)| *page)
            .collect()
    }

    /// Total number of requests made.
    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl PageSource for MockPageSource {
    async fn fetch_page(
        &self,
        resource: &Resource,
        page: u32,
        _size: u32,
    ) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push((*resource, page));

        let Some(mock) = self.pages.get(&(*resource, page)) else {
            return Err(FetchError::Status {
                status: 404,
                url: resource.path(),
                message: format!("no mock data for page {page}"),
            });
        };

        if !mock.delay.is_zero() {
            tokio::time::sleep(mock.delay).await;
        }

        match &mock.response {
            Ok(document) => Ok(document.clone()),
            Err(status) => Err(FetchError::Status {
                status: *status,
                url: resource.path(),
                message: "mock failure".to_string(),
            }),
        }
    }
}

/// A station listing page with the given `(id, name)` records.
pub(crate) fn station_page(total_pages: u32, stations: &[(u32, &str)]) -> Value {
    let records: Vec<Value> = stations
        .iter()
        .map(|(id, name)| {
            json!({
                "Identyfikator stacji": id,
                "Kod stacji": format!("PL{id:04}"),
                "Nazwa stacji": name,
                "WGS84 φ N": "52.2297",
                "WGS84 λ E": "21.0122",
                "Identyfikator miasta": 1,
                "Nazwa miasta": "Warszawa",
                "Gmina": "Warszawa",
                "Powiat": "Warszawa",
                "Województwo": "MAZOWIECKIE",
                "Ulica": "ul. Marszałkowska"
            })
        })
        .collect();

    json!({
        "totalPages": total_pages,
        "Lista stacji pomiarowych": records,
    })
}

/// An installation listing page with the given `(id, formula)` records.
pub(crate) fn installation_page(total_pages: u32, installations: &[(u32, &str)]) -> Value {
    let records: Vec<Value> = installations
        .iter()
        .map(|(id, formula)| {
            json!({
                "Identyfikator stanowiska": id,
                "Wskaźnik": formula.to_lowercase(),
                "Wskaźnik - wzór": formula,
                "Wskaźnik - kod": formula,
                "Id wskaźnika": 1
            })
        })
        .collect();

    json!({
        "totalPages": total_pages,
        "Lista stanowisk pomiarowych dla podanej stacji": records,
    })
}
