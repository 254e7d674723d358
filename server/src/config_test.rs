use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = Config::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_host() {
    let cfg = Config::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(
        Config::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort { var: "PORT", value: "http".into() })
    );
}

#[test]
fn rejects_zero_and_out_of_range_ports() {
    assert!(matches!(Config::from_values(None, Some("0")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(Config::from_values(None, Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn rejects_blank_host() {
    assert_eq!(Config::from_values(Some("  "), None), Err(ConfigError::Empty { var: "HOST" }));
}

#[test]
fn error_messages_name_the_variable() {
    let err = Config::from_values(None, Some("x")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"x\" is not a port number");
}
