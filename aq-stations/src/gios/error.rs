//! Fetch error types.

use super::parse::ParseError;

/// Errors that can occur while fetching from the station API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status other than 429
    #[error("request failed: {url} returned {status}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// Every attempt was rate limited
    #[error("max retries exceeded: {url} still rate limited after {attempts} attempts")]
    MaxRetriesExceeded { url: String, attempts: u32 },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response was JSON but not the document shape we expect
    #[error("malformed document: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Status {
            status: 500,
            url: "http://localhost/findAll".into(),
            message: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "request failed: http://localhost/findAll returned 500: Internal Server Error"
        );

        let err = FetchError::MaxRetriesExceeded {
            url: "http://localhost/sensors/1".into(),
            attempts: 5,
        };
        assert_eq!(
            err.to_string(),
            "max retries exceeded: http://localhost/sensors/1 still rate limited after 5 attempts"
        );

        let err = FetchError::from(ParseError::MissingField("totalPages"));
        assert_eq!(
            err.to_string(),
            "malformed document: missing field `totalPages`"
        );
    }
}
