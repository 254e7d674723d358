//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The marketplace backend lives on a separate origin. Its base URL is baked in
//! at compile time from `AUCTORA_API_BASE` so local and deployed builds differ
//! only in the environment they were built with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Deployed API origin used when `AUCTORA_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "https://api-auctora.vercel.app/api";

/// `localStorage` key holding the bearer token returned by login.
pub const TOKEN_STORAGE_KEY: &str = "auctora_token";

/// `sessionStorage` key holding the mirrored user profile.
pub const PROFILE_STORAGE_KEY: &str = "auctora_user";

/// Listing page size requested from the auction endpoint.
pub const LISTING_PAGE_SIZE: u32 = 8;

/// Viewport width (CSS px) below which the mobile layout is used.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Resolve the API base URL without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("AUCTORA_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}

/// Join an API path (leading slash expected) onto the configured base.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
