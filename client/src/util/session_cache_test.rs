use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::error::ApiError;
use crate::util::storage::MemoryStore;

fn sample_user(id: &str) -> User {
    User {
        id: id.to_owned(),
        username: "ayomide".to_owned(),
        first_name: "Ayomide".to_owned(),
        last_name: "Ola".to_owned(),
        phone_number: "08000000000".to_owned(),
        email: "ayo@example.com".to_owned(),
        email_verified: true,
        role: Some("client".to_owned()),
    }
}

#[test]
fn miss_fetches_and_mirrors() {
    let store = MemoryStore::new();
    let cache = ProfileCache::new(&store, PROFILE_STORAGE_KEY);
    let calls = Cell::new(0);

    let user = block_on(cache.get_or_fetch(|| {
        calls.set(calls.get() + 1);
        async { Ok::<_, ApiError>(sample_user("u1")) }
    }))
    .unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.cached(), Some(sample_user("u1")));
}

#[test]
fn hit_skips_fetcher() {
    let store = MemoryStore::new();
    let cache = ProfileCache::new(&store, PROFILE_STORAGE_KEY);
    cache.put(&sample_user("cached"));
    let calls = Cell::new(0);

    let user = block_on(cache.get_or_fetch(|| {
        calls.set(calls.get() + 1);
        async { Ok::<_, ApiError>(sample_user("fresh")) }
    }))
    .unwrap();

    assert_eq!(user.id, "cached");
    assert_eq!(calls.get(), 0);
}

#[test]
fn invalidate_forces_refetch() {
    let store = MemoryStore::new();
    let cache = ProfileCache::new(&store, PROFILE_STORAGE_KEY);
    cache.put(&sample_user("old"));
    cache.invalidate();
    assert_eq!(cache.cached(), None);

    let user = block_on(cache.get_or_fetch(|| async { Ok::<_, ApiError>(sample_user("new")) })).unwrap();
    assert_eq!(user.id, "new");
}

#[test]
fn fetch_error_is_not_cached() {
    let store = MemoryStore::new();
    let cache = ProfileCache::new(&store, PROFILE_STORAGE_KEY);

    let result = block_on(cache.get_or_fetch(|| async { Err::<User, _>(ApiError::Network("offline".to_owned())) }));

    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert!(store.is_empty());
}

#[test]
fn corrupt_mirror_reads_as_miss() {
    let store = MemoryStore::new();
    store.set(PROFILE_STORAGE_KEY, "{\"id\":");
    let cache = ProfileCache::new(&store, PROFILE_STORAGE_KEY);
    assert_eq!(cache.cached(), None);
}
