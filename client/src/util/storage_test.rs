use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
    assert!(!store.is_empty());
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn json_helpers_round_trip_and_skip_corrupt_entries() {
    let store = MemoryStore::new();
    save_json(&store, "filters", &vec!["phones".to_owned()]);
    assert_eq!(load_json::<Vec<String>>(&store, "filters"), Some(vec!["phones".to_owned()]));

    store.set("broken", "{not json");
    assert_eq!(load_json::<Vec<String>>(&store, "broken"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_outside_browser() {
    for store in [BrowserStore::session(), BrowserStore::local()] {
        store.set("k", "v");
        assert_eq!(store.get("k"), None);
        store.remove("k");
    }
}
