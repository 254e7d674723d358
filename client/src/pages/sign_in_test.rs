use super::*;

#[test]
fn login_payload_trims_identifier_only() {
    assert_eq!(
        login_payload("  user@example.com ", " secret pw "),
        ("user@example.com".to_owned(), " secret pw ".to_owned())
    );
}

#[test]
fn after_sign_in_path_is_home() {
    assert_eq!(AFTER_SIGN_IN_PATH, "/");
}

#[test]
fn begin_local_session_replaces_token_and_drops_stale_profile() {
    use crate::config::{PROFILE_STORAGE_KEY, TOKEN_STORAGE_KEY};
    use crate::util::storage::MemoryStore;

    let local = MemoryStore::new();
    let session = MemoryStore::new();
    let tokens = TokenStore::new(&local);
    let profile = ProfileCache::new(&session, PROFILE_STORAGE_KEY);
    tokens.set("first-user");
    session.set(PROFILE_STORAGE_KEY, r#"{"id":"u1","username":"first","email":"a@example.com"}"#);

    begin_local_session(&tokens, &profile, "second-user");

    assert_eq!(local.get(TOKEN_STORAGE_KEY).as_deref(), Some("second-user"));
    assert_eq!(profile.cached(), None);
}
