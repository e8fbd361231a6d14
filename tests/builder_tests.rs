use std::time::Duration;

use descry_client::{DescryClient, DescryError};

#[test]
fn test_config_error() {
    // What it tests: Builder-time validation of the base URL. It covers a
    // missing URL, a URL that fails to parse, and one that cannot carry paths.

    let err = DescryClient::builder().build().unwrap_err();
    match err {
        DescryError::ConfigurationError(msg) => assert_eq!(msg, "Base URL is required"),
        other => panic!("Expected ConfigurationError for missing URL, got {other:?}"),
    }

    let err = DescryClient::builder().base_url("invalid-url").build().unwrap_err();
    match err {
        DescryError::ConfigurationError(msg) => assert!(msg.contains("Invalid base URL")),
        other => panic!("Expected ConfigurationError for invalid URL, got {other:?}"),
    }

    let err = DescryClient::builder()
        .base_url("mailto:patterns@example.com")
        .build()
        .unwrap_err();
    match err {
        DescryError::ConfigurationError(msg) => assert!(msg.contains("cannot carry paths")),
        other => panic!("Expected ConfigurationError for non-base URL, got {other:?}"),
    }
}

#[test]
fn test_builder_accepts_custom_settings() {
    let client = DescryClient::builder()
        .base_url("http://descry.internal:9999/")
        .timeout(Duration::from_secs(5))
        .user_agent("pattern-editor/1.0")
        .http_client(reqwest::Client::new())
        .build()
        .expect("valid configuration");

    assert_eq!(client.base_url().as_str(), "http://descry.internal:9999/");
    assert_eq!(client.timeout(), Duration::from_secs(5));
    assert_eq!(client.user_agent(), Some("pattern-editor/1.0"));
    assert!(format!("{client:?}").contains("pattern-editor/1.0"));

    let defaults = DescryClient::builder()
        .base_url("http://localhost:5000")
        .build()
        .unwrap();
    assert_eq!(defaults.timeout(), Duration::from_secs(30));
    assert_eq!(defaults.user_agent(), None);
}

#[cfg(feature = "default-client")]
#[test]
fn test_global_instance_replaced_by_initialize() {
    assert_eq!(descry_client::instance().base_url().as_str(), "http://localhost:5000/");

    let client = DescryClient::builder()
        .base_url("http://descry.internal:9999")
        .build()
        .unwrap();
    descry_client::initialize(client);

    assert_eq!(
        descry_client::instance().base_url().as_str(),
        "http://descry.internal:9999/"
    );
}

#[test]
fn test_query_in_raw_endpoint_fails_before_network() {
    let client = DescryClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let result = tokio_test::block_on(client.raw_request(reqwest::Method::GET, "/patterns?all=1", None));
    match result {
        Err(DescryError::InvalidEndpoint(msg)) => {
            assert_eq!(msg, "endpoint must not include query: /patterns?all=1")
        }
        other => panic!("expected InvalidEndpoint, got {other:?}"),
    }
}
