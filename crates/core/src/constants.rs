//! Shared constants for mealsearch.

/// Base URL of the meal search service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/meals/search";

/// Number of results requested per search when the caller does not say.
pub const DEFAULT_TOP_K: u32 = 5;

/// Env var overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "MEALSEARCH_BASE_URL";

/// Env var overriding [`DEFAULT_TOP_K`].
pub const TOP_K_ENV: &str = "MEALSEARCH_TOP_K";
