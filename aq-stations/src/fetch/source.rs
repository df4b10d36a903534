//! Paginated resources and the trait that fetches their pages.

use std::fmt;
use std::future::Future;

use serde_json::Value;

use crate::domain::StationId;
use crate::gios::FetchError;

/// A paginated listing on the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// All stations (`findAll`).
    Stations,
    /// Installations of one station (`sensors/<id>`).
    Installations(StationId),
}

impl Resource {
    /// Path of the resource relative to the API root.
    pub fn path(&self) -> String {
        match self {
            Resource::Stations => "findAll".to_string(),
            Resource::Installations(id) => format!("sensors/{id}"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Trait for fetching one page of a listing as a raw JSON document.
///
/// This abstraction allows the paging engine to be tested with mock data.
pub trait PageSource {
    /// Fetch page `page` (zero-based) of `resource`, `size` records per page.
    fn fetch_page(
        &self,
        resource: &Resource,
        page: u32,
        size: u32,
    ) -> impl Future<Output = Result<Value, FetchError>>;
}

impl<S: PageSource> PageSource for &S {
    fn fetch_page(
        &self,
        resource: &Resource,
        page: u32,
        size: u32,
    ) -> impl Future<Output = Result<Value, FetchError>> {
        (**self).fetch_page(resource, page, size)
    }
}
