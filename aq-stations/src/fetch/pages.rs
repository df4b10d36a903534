//! Fetching every page of one listing.

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, trace};

use crate::gios::{Entity, FetchError, ParseError, parse_page, total_pages};

use super::source::{PageSource, Resource};

/// Fetch and parse every page of `resource`.
///
/// Page 0 is fetched first; its `totalPages` value is the only one trusted,
/// and must not exceed `max_pages`.
/// Pages `1..totalPages` are then requested concurrently, one request each,
/// and their entities appended in completion order after page 0's.
///
/// Any failed page fails the whole listing; pages still in flight are
/// dropped.
pub async fn fetch_all_pages<S, E>(
    source: &S,
    resource: &Resource,
    page_size: u32,
    max_pages: u32,
) -> Result<Vec<E>, FetchError>
where
    S: PageSource,
    E: Entity,
{
    let first = source.fetch_page(resource, 0, page_size).await?;
    let total = total_pages(&first)?;
    if total > max_pages {
        return Err(ParseError::TooManyPages {
            total,
            max: max_pages,
        }
        .into());
    }
    let mut entities = parse_page::<E>(&first)?;

    debug!(%resource, total_pages = total, "fetched first page");

    let mut pending: FuturesUnordered<_> = (1..total)
        .map(|page| async move {
            let document = source.fetch_page(resource, page, page_size).await?;
            let parsed = parse_page::<E>(&document)?;
            Ok::<_, FetchError>((page, parsed))
        })
        .collect();

    while let Some(result) = pending.next().await {
        let (page, parsed) = result?;
        trace!(%resource, page, records = parsed.len(), "fetched page");
        entities.extend(parsed);
    }

    Ok(entities)
}
