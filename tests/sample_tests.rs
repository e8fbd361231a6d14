use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;
use descry_client::DescryError;

#[tokio::test]
async fn test_list_samples() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": ["https://shop.example/lamp", "https://shop.example/sofa"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let samples = client.samples().list().await.unwrap();

    assert_eq!(samples, vec!["https://shop.example/lamp", "https://shop.example/sofa"]);
}

#[tokio::test]
async fn test_add_sample_posts_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/list/add"))
        .and(body_string("https://shop.example/lamp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": ["https://shop.example/lamp"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let samples = client.samples().add("https://shop.example/lamp").await.unwrap();

    assert_eq!(samples, vec!["https://shop.example/lamp"]);
}

#[tokio::test]
async fn test_add_sample_failure_reported_in_body() {
    // The tester answers failed downloads with 200 and an error object.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/list/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Error": "unsupported protocol scheme \"\""
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.samples().add("not a url").await {
        Err(DescryError::ServiceError(msg)) => {
            assert_eq!(msg, "unsupported protocol scheme \"\"");
        }
        other => panic!("expected ServiceError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_flush_samples() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list/flush"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    assert!(client.samples().flush().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_flush_failure_followed_by_listing() {
    // The tester writes the error object and then the listing into one body.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list/flush"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"Error\":\"remove samples: permission denied\"}\n{\"list\":[\"https://shop.example/lamp\"]}\n",
        ))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.samples().flush().await {
        Err(DescryError::ServiceError(msg)) => {
            assert_eq!(msg, "remove samples: permission denied");
        }
        other => panic!("expected ServiceError, got {other:?}"),
    }
}
