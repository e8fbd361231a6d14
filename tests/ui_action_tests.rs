use std::sync::Arc;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;
use descry_client::ui::{
    fire, FixtureConfig, ListEntry, MemoryAlert, MemoryList, MemoryRegion, Page, UiAction,
};
use descry_client::DescryError;

fn entry(label: &str, href: &str) -> ListEntry {
    ListEntry {
        label: label.to_string(),
        href: href.to_string(),
    }
}

#[tokio::test]
async fn test_list_patterns_appends_links_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patterns"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a\nb\nc"))
        .mount(&mock_server)
        .await;

    let list = Arc::new(MemoryList::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .pattern_list(list.clone())
        .build();

    let appended = page.list_patterns().unwrap().load().await.unwrap();

    assert_eq!(appended, 3);
    assert_eq!(
        list.entries(),
        vec![
            entry("a", "/pattern/a"),
            entry("b", "/pattern/b"),
            entry("c", "/pattern/c"),
        ]
    );
    assert_eq!(
        list.to_html(),
        "<li><a href='/pattern/a'>a</a></li>\n\
         <li><a href='/pattern/b'>b</a></li>\n\
         <li><a href='/pattern/c'>c</a></li>"
    );
}

#[tokio::test]
async fn test_list_projects_empty_body_and_repeats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(2)
        .mount(&mock_server)
        .await;

    let list = Arc::new(MemoryList::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .project_list(list.clone())
        .build();
    let action = page.list_projects().unwrap();

    action.run().await.unwrap();
    assert_eq!(list.entries(), vec![entry("", "/project/")]);

    // The list is never cleared, so a second run duplicates the entries.
    action.run().await.unwrap();
    assert_eq!(list.entries().len(), 2);
}

#[tokio::test]
async fn test_list_failure_appends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patterns"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Unable to read pattern list"))
        .mount(&mock_server)
        .await;

    let list = Arc::new(MemoryList::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .pattern_list(list.clone())
        .build();

    let handle = fire(Arc::new(page.list_patterns().unwrap()));
    match handle.await.unwrap() {
        Err(DescryError::ApiError { status, .. }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert!(list.entries().is_empty());
}

#[tokio::test]
async fn test_submit_pattern_shows_response_on_success_and_failure() {
    let mock_server = MockServer::start().await;

    let written = json!({
        "Message": "Pattern shop.xml written succesfully",
        "Details": "",
        "Payload": null
    })
    .to_string();

    Mock::given(method("PUT"))
        .and(path("/pattern/shop.xml"))
        .and(body_string("<Map mime=\"html\"></Map>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(written.clone()))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/pattern/broken.xml"))
        .respond_with(ResponseTemplate::new(500).set_body_string("permission denied"))
        .mount(&mock_server)
        .await;

    let display = Arc::new(MemoryRegion::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .display(display.clone())
        .build();

    page.submit_pattern("shop.xml", "<Map mime=\"html\"></Map>")
        .unwrap()
        .run()
        .await
        .unwrap();
    assert_eq!(display.content(), written);

    let failed = page.submit_pattern("broken.xml", "<Map/>").unwrap().run().await;
    assert!(matches!(failed, Err(DescryError::ApiError { .. })));
    assert_eq!(display.content(), "permission denied");
}

#[tokio::test]
async fn test_submit_pattern_title_is_not_validated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/pattern/faq%3F.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("written"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let display = Arc::new(MemoryRegion::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .display(display.clone())
        .build();

    page.submit_pattern("faq?.xml", "<Map/>").unwrap().run().await.unwrap();

    assert_eq!(display.content(), "written");
}

#[tokio::test]
async fn test_submit_pattern_transport_failure_shows_error() {
    // Nothing listens on the discard port.
    let client = setup_test_client("http://127.0.0.1:9");
    let display = Arc::new(MemoryRegion::new());
    let page = Page::builder(client).display(display.clone()).build();

    let result = page.submit_pattern("shop.xml", "<Map/>").unwrap().run().await;

    match result {
        Err(err @ DescryError::HttpError(_)) => assert_eq!(display.content(), err.to_string()),
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_parse_fixture_displays_stringified_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/1478118249.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Lamp</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/parse"))
        .and(body_json(json!({
            "origin": "https://www.atgstores.com/",
            "data": "<h1>Lamp</h1>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shop.xml": { "Product": { "Title": "Lamp" } }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let display = Arc::new(MemoryRegion::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .display(display.clone())
        .build();

    page.parse_fixture().unwrap().run().await.unwrap();

    assert_eq!(display.content(), r#"{"shop.xml":{"Product":{"Title":"Lamp"}}}"#);
}

#[tokio::test]
async fn test_parse_fixture_failure_leaves_display() {
    let mock_server = MockServer::start().await;

    let display = Arc::new(MemoryRegion::new());
    let page = Page::builder(setup_test_client(&mock_server.uri()))
        .display(display.clone())
        .fixture(
            FixtureConfig::default()
                .asset_path("/assets/missing.html")
                .origin("https://shop.example/"),
        )
        .build();

    let result = page.parse_fixture().unwrap().run().await;

    assert!(matches!(result, Err(DescryError::ApiError { .. })));
    assert_eq!(display.content(), "");
}

#[test]
fn test_page_offers_only_bound_actions() {
    let client = setup_test_client("http://localhost:5000");

    let bare = Page::builder(client.clone()).build();
    assert!(bare.live_validator().is_none());
    assert!(bare.list_patterns().is_none());
    assert!(bare.list_projects().is_none());
    assert!(bare.submit_pattern("a", "b").is_none());
    assert!(bare.parse_fixture().is_none());

    let checking = Page::builder(client)
        .pattern_checking(Arc::new(MemoryAlert::new()), Arc::new(MemoryRegion::new()))
        .build();
    assert!(checking.live_validator().is_some());
    assert!(checking.list_patterns().is_none());
}

#[test]
fn test_action_names() {
    let client = setup_test_client("http://localhost:5000");
    let page = Page::builder(client)
        .display(Arc::new(MemoryRegion::new()))
        .pattern_list(Arc::new(MemoryList::new()))
        .build();

    assert_eq!(page.list_patterns().unwrap().name(), "list patterns");
    assert_eq!(
        page.submit_pattern("shop.xml", "").unwrap().name(),
        "put pattern shop.xml"
    );
    assert_eq!(
        page.parse_fixture().unwrap().name(),
        "parse fixture /assets/1478118249.html"
    );
}
