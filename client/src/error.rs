//! Error taxonomy for calls against the marketplace API.
//!
//! ERROR HANDLING
//! ==============
//! Pages never surface these to the user; they log them and clear their
//! loading flags. The variants exist so logs say which layer failed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ErrorResponse;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No token is stored for an endpoint that requires one.
    #[error("not signed in")]
    MissingToken,
    /// Browser-only call made outside the browser (SSR render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error from a status code and the raw response body.
    ///
    /// The body is parsed as the backend's `ErrorResponse` when possible so
    /// the logged detail is the server's message rather than raw JSON.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .map(|err| err.detail_text())
            .unwrap_or_else(|_| body.trim().to_owned());
        Self::Status { status, detail }
    }
}
