//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time from `FLOOREASE_API_URL`
//! so the WASM bundle and the SSR render agree on the same origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback backend origin for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5050";

/// Backend origin without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("FLOOREASE_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed }
}

/// Join `path` onto `base` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
