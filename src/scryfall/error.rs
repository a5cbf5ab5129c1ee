//! Card database errors.

use thiserror::Error;

/// Errors raised while talking to the Scryfall API.
#[derive(Error, Debug)]
pub enum ScryfallError {
    /// The request could not be sent or the body could not be decoded.
    #[error("Scryfall request failed")]
    Http {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with an unexpected status code.
    #[error("Scryfall returned HTTP {status} for {endpoint}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Endpoint path, e.g. `/cards/search`.
        endpoint: &'static str,
    },

    /// The configured API base is not a valid URL.
    #[error("invalid Scryfall API base URL: {url}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },
}

impl From<reqwest::Error> for ScryfallError {
    fn from(source: reqwest::Error) -> Self {
        Self::Http { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_names_endpoint() {
        let error = ScryfallError::Status {
            status: 503,
            endpoint: "/cards/search",
        };
        assert_eq!(error.to_string(), "Scryfall returned HTTP 503 for /cards/search");
    }

    #[test]
    fn invalid_base_display() {
        let error = ScryfallError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }
}
