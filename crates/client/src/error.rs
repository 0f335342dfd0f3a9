//! Typed error enum for the search client.

use thiserror::Error;

/// Errors from a meal search request.
///
/// Every variant means the same thing to a caller: the search did not produce
/// a response. The variants only exist so logs can say why.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("top_k must be a positive integer")]
    InvalidTopK,
}

impl SearchError {
    /// Whether the request never produced an HTTP response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpRequest(_))
    }

    /// HTTP status code of a non-success response, if that is what failed.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            Self::HttpRequest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
