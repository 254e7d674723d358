//! Persistence of the bearer token returned by login.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use super::storage::{BrowserStore, KeyValueStore};
use crate::config::TOKEN_STORAGE_KEY;

/// Token holder over any key/value store.
#[derive(Debug)]
pub struct TokenStore<S> {
    store: S,
}

impl TokenStore<BrowserStore> {
    /// Token store backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore::local())
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored token, ignoring blank values.
    pub fn get(&self) -> Option<String> {
        self.store
            .get(TOKEN_STORAGE_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set(&self, token: &str) {
        self.store.set(TOKEN_STORAGE_KEY, token);
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_STORAGE_KEY);
    }

    /// `Authorization` header value for the stored token, if any.
    pub fn authorization(&self) -> Option<String> {
        self.get().map(|token| bearer_header(&token))
    }
}

/// Format an `Authorization: Bearer` header value.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token.trim())
}
