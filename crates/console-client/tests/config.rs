// crates/console-client/tests/config.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use console_client::config::ClientConfig;

#[test]
fn empty_file_gives_defaults() {
    let config = ClientConfig::from_toml("").unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_root, "http://localhost:8080/api");
    assert_eq!(config.refresh_period(), Duration::from_secs(10));
    // no client-side timeout unless asked for
    assert_eq!(config.request_timeout(), None);
    assert_eq!(config.log_file, PathBuf::from("order-console.log"));
}

#[test]
fn fields_override_defaults_individually() {
    let config = ClientConfig::from_toml(
        r#"
        api_root = "http://trading.internal:9000/api"
        refresh_secs = 3
        "#,
    )
    .unwrap();

    assert_eq!(config.api_root, "http://trading.internal:9000/api");
    assert_eq!(config.refresh_period(), Duration::from_secs(3));
    assert_eq!(config.request_timeout(), None);
}

#[test]
fn explicit_request_timeout_is_used() {
    let config = ClientConfig::from_toml("request_timeout_secs = 45").unwrap();
    assert_eq!(config.request_timeout_secs, Some(45));
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
}

#[test]
fn zero_refresh_is_rejected() {
    assert!(ClientConfig::from_toml("refresh_secs = 0").is_err());
}

#[test]
fn wrong_type_is_rejected() {
    assert!(ClientConfig::from_toml(r#"refresh_secs = "ten""#).is_err());
}

#[test]
fn missing_file_names_the_path() {
    let err = ClientConfig::load(Path::new("/nonexistent/order-console.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/order-console.toml"));
}
