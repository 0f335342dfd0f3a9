//! HTTP client for the meal search service
//!
//! Translates a `(query, top_k)` pair into one `GET /meals/search` request and
//! returns the typed response. Retrying, caching and cancellation are left to
//! callers (and are not done by any caller in this workspace).

mod client;
pub mod error;

pub use client::{MAX_ERROR_BODY_LEN, MealSearch, MealSearchClient, truncate};
pub use error::SearchError;
