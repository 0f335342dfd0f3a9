//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TOP_K, TOP_K_ENV};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string environment variable, falling back when it is unset or blank.
pub fn env_string_with_default(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_owned(),
        _ => default.to_owned(),
    }
}

/// Base URL of the search service: `MEALSEARCH_BASE_URL` or the built-in default.
///
/// Trailing slashes are stripped so the search path can be appended directly.
#[must_use]
pub fn configured_base_url() -> String {
    normalize_base_url(&env_string_with_default(BASE_URL_ENV, DEFAULT_BASE_URL))
}

/// Default result count: `MEALSEARCH_TOP_K` or [`DEFAULT_TOP_K`].
///
/// Zero is not a usable result count and falls back to the default.
#[must_use]
pub fn configured_top_k() -> u32 {
    let top_k = env_parse_with_default(TOP_K_ENV, DEFAULT_TOP_K);
    if top_k == 0 {
        tracing::warn!(var = TOP_K_ENV, default = DEFAULT_TOP_K, "top_k must be positive, using default");
        return DEFAULT_TOP_K;
    }
    top_k
}

/// Strip trailing slashes from a base URL.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}
