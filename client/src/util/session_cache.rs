//! Session mirror of the signed-in user's profile.
//!
//! DESIGN
//! ======
//! Cache-aside over session-scoped storage: reads check the mirror first and
//! only call the supplied fetcher on a miss, storing what it returns. The
//! mirror is invalidated explicitly on logout. Fetch errors are never cached.

#[cfg(test)]
#[path = "session_cache_test.rs"]
mod session_cache_test;

use std::future::Future;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::storage::{BrowserStore, KeyValueStore, load_json, save_json};
use crate::config::PROFILE_STORAGE_KEY;
use crate::net::types::User;

/// Cache-aside mirror of one JSON value under a fixed storage key.
#[derive(Debug)]
pub struct SessionMirror<T, S> {
    store: S,
    key: &'static str,
    _value: PhantomData<T>,
}

/// The profile mirror used by the dashboard pages.
pub type ProfileCache<S> = SessionMirror<User, S>;

impl ProfileCache<BrowserStore> {
    /// Profile mirror backed by the browser's `sessionStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore::session(), PROFILE_STORAGE_KEY)
    }
}

impl<T, S> SessionMirror<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S, key: &'static str) -> Self {
        Self {
            store,
            key,
            _value: PhantomData,
        }
    }

    /// Mirrored value, if present and decodable.
    pub fn cached(&self) -> Option<T> {
        load_json(&self.store, self.key)
    }

    pub fn put(&self, value: &T) {
        save_json(&self.store, self.key, value);
    }

    /// Drop the mirrored value so the next read goes to the network.
    pub fn invalidate(&self) {
        self.store.remove(self.key);
    }

    /// Return the mirrored value, or run `fetch` and mirror its result.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error on a miss; nothing is stored in that case.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.cached() {
            return Ok(hit);
        }
        let fresh = fetch().await?;
        self.put(&fresh);
        Ok(fresh)
    }
}
