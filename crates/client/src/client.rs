use async_trait::async_trait;
use mealsearch_core::env_config::{configured_base_url, normalize_base_url};
use mealsearch_core::{MealSearchResponse, SEARCH_PATH};

use crate::error::SearchError;

/// Maximum number of body bytes kept in error messages.
pub const MAX_ERROR_BODY_LEN: usize = 500;

/// Transport capability handed to whoever drives searches.
///
/// One call is one request: implementations must not retry, and a new call
/// does not cancel an earlier one.
#[async_trait]
pub trait MealSearch: Send + Sync {
    /// Search meals matching `query`, asking for at most `top_k` results.
    async fn search_meals(&self, query: &str, top_k: u32)
    -> Result<MealSearchResponse, SearchError>;
}

/// Client for the meal search HTTP API.
#[derive(Debug, Clone)]
pub struct MealSearchClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl MealSearchClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, SearchError> {
        let base_url = normalize_base_url(base_url.as_ref());
        let client = reqwest::Client::builder()
            .user_agent(concat!("mealsearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Creates a client for the base URL taken from `MEALSEARCH_BASE_URL`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, SearchError> {
        Self::new(configured_base_url())
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a search, with the query percent-encoded.
    #[must_use]
    pub fn search_url(&self, query: &str, top_k: u32) -> String {
        format!(
            "{}{}?query={}&top_k={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(query),
            top_k
        )
    }
}

#[async_trait]
impl MealSearch for MealSearchClient {
    async fn search_meals(
        &self,
        query: &str,
        top_k: u32,
    ) -> Result<MealSearchResponse, SearchError> {
        if top_k == 0 {
            return Err(SearchError::InvalidTopK);
        }

        let url = self.search_url(query, top_k);
        tracing::debug!(%url, "sending meal search request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(SearchError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: MealSearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::JsonParse {
                context: format!("meal search response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        tracing::debug!(
            status = status.as_u16(),
            results = parsed.results.len(),
            total = parsed.total,
            "meal search response received"
        );
        Ok(parsed)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
