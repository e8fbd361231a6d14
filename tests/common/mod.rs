use descry_client::DescryClient;

/// Set up a client pointed at a mock server.
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> DescryClient {
    let _ = env_logger::builder().is_test(true).try_init();

    DescryClient::builder()
        .base_url(server_url)
        .build()
        .expect("Failed to build DescryClient")
}
