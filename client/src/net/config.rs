//! Consultation API base URL resolution.
//!
//! Lookup order:
//! - runtime: the server's configured base, which the SSR shell writes into
//!   `<meta name="consultation-api-base" content="...">` for the browser
//! - build time: `CONSULTATION_API_BASE_URL` captured by `option_env!`
//! - otherwise same-origin (empty base)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Server environment variable carrying the runtime base.
pub const API_BASE_ENV: &str = "CONSULTATION_API_BASE_URL";
pub const API_BASE_META: &str = "consultation-api-base";
pub const DEFAULT_API_BASE_URL: &str = "";

/// Trim whitespace and trailing slashes. Blank input yields `None`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Apply the build-time and same-origin fallbacks to a runtime value.
#[must_use]
pub fn resolve_base_url(configured: Option<&str>) -> String {
    configured
        .and_then(normalize_base_url)
        .or_else(|| option_env!("CONSULTATION_API_BASE_URL").and_then(normalize_base_url))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

/// Base URL the consultation request is posted to from the browser.
#[must_use]
pub fn api_base_url() -> String {
    resolve_base_url(runtime_base_url().as_deref())
}

#[cfg(feature = "hydrate")]
fn runtime_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
        .ok()
        .flatten()?;
    normalize_base_url(&meta.get_attribute("content")?)
}

#[cfg(not(feature = "hydrate"))]
fn runtime_base_url() -> Option<String> {
    None
}
