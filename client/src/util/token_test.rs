use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn set_get_clear_token() {
    let tokens = TokenStore::new(MemoryStore::new());
    assert_eq!(tokens.get(), None);
    tokens.set("abc.def");
    assert_eq!(tokens.get(), Some("abc.def".to_owned()));
    assert_eq!(tokens.authorization(), Some("Bearer abc.def".to_owned()));
    tokens.clear();
    assert_eq!(tokens.get(), None);
    assert_eq!(tokens.authorization(), None);
}

#[test]
fn blank_token_reads_as_absent() {
    let tokens = TokenStore::new(MemoryStore::new());
    tokens.set("   ");
    assert_eq!(tokens.get(), None);
}

#[test]
fn bearer_header_trims_token() {
    assert_eq!(bearer_header(" t0k \n"), "Bearer t0k");
}
