//! Page document parsing.
//!
//! A page is a JSON object holding the page count and one list of raw
//! records. A malformed record is logged and skipped; a malformed document
//! fails the whole page.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::schema::{Entity, TOTAL_PAGES_FIELD};

/// A page document that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The payload is not a JSON object
    #[error("expected a JSON object, found {found}")]
    NotADocument { found: &'static str },

    /// A required top-level key is missing
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// The record list key holds something other than an array
    #[error("field `{field}` is not a list")]
    NotAList { field: &'static str },

    /// The page count is not a non-negative integer
    #[error("invalid page count: {0}")]
    InvalidTotalPages(String),

    /// The page count is larger than the configured cap
    #[error("page count {total} exceeds the limit of {max}")]
    TooManyPages { total: u32, max: u32 },
}

/// Read the declared number of pages from a page document.
pub fn total_pages(document: &Value) -> Result<u32, ParseError> {
    let value = as_document(document)?
        .get(TOTAL_PAGES_FIELD)
        .ok_or(ParseError::MissingField(TOTAL_PAGES_FIELD))?;

    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ParseError::InvalidTotalPages(value.to_string()))
}

/// Parse every well-formed record of kind `E` from a page document.
///
/// Records missing a required field, or with a field of the wrong type, are
/// skipped with a warning.
pub fn parse_page<E: Entity>(document: &Value) -> Result<Vec<E>, ParseError> {
    let field = E::KIND.list_field();
    let records = as_document(document)?
        .get(field)
        .ok_or(ParseError::MissingField(field))?
        .as_array()
        .ok_or(ParseError::NotAList { field })?;

    let entities: Vec<E> = records
        .iter()
        .filter_map(|record| match <E::Raw as Deserialize>::deserialize(record) {
            Ok(raw) => Some(raw.into()),
            Err(e) => {
                warn!(kind = ?E::KIND, error = %e, %record, "skipping malformed record");
                None
            }
        })
        .collect();

    Ok(entities)
}

fn as_document(value: &Value) -> Result<&Map<String, Value>, ParseError> {
    value.as_object().ok_or(ParseError::NotADocument {
        found: json_type(value),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
