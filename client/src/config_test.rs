use super::*;

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base("http://localhost:8000/api/"), "http://localhost:8000/api");
    assert_eq!(normalize_base("http://localhost:8000/api//"), "http://localhost:8000/api");
}

#[test]
fn normalize_base_falls_back_on_empty_value() {
    assert_eq!(normalize_base(""), DEFAULT_API_BASE);
    assert_eq!(normalize_base("/"), DEFAULT_API_BASE);
}

#[test]
fn join_url_handles_missing_leading_slash() {
    assert_eq!(join_url("http://h/api", "/users/login"), "http://h/api/users/login");
    assert_eq!(join_url("http://h/api", "users/login"), "http://h/api/users/login");
}

#[test]
fn api_url_starts_with_configured_base() {
    let url = api_url("/users/profile");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/users/profile"));
}
