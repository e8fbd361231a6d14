use std::fmt;
use std::time::Duration;

#[cfg(feature = "default-client")]
use std::sync::Arc;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwap;
use log::debug;
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::check::CheckBuilder;
use crate::api::parse::ParseBuilder;
use crate::api::patterns::PatternHandler;
use crate::api::projects::ProjectHandler;
use crate::api::samples::SampleHandler;
use crate::{DescryError, DescryResult};

/// Port the pattern service listens on when started without flags.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[cfg(feature = "default-client")]
static DESCRY_CLIENT: Lazy<ArcSwap<DescryClient>> = Lazy::new(|| {
    // Create a default client using the builder's default values.
    ArcSwap::new(Arc::new(DescryClient::default()))
});

/// Initializes the static DescryClient instance. This should be called once
/// at the beginning of your application.
#[cfg(feature = "default-client")]
pub fn initialize(client: DescryClient) {
    DESCRY_CLIENT.store(Arc::new(client));
}

/// Returns the static DescryClient instance.
///
/// If it hasn't been previously initialized it returns a default instance
/// pointing at `http://localhost:5000`.
#[cfg(feature = "default-client")]
pub fn instance() -> Arc<DescryClient> {
    DESCRY_CLIENT.load_full()
}

/// Builder for the descry client.
///
/// This builder provides a fluent API for creating clients with validation
/// at build time.
#[derive(Default)]
pub struct DescryClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl DescryClientBuilder {
    /// Sets the URL of the pattern service, e.g. `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> DescryResult<DescryClient> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let base_url = self
            .base_url
            .ok_or_else(|| DescryError::ConfigurationError("Base URL is required".into()))
            .and_then(|url_str| {
                Url::parse(&url_str).map_err(|e| {
                    DescryError::ConfigurationError(format!("Invalid base URL: {e}"))
                })
            })?;

        if base_url.cannot_be_a_base() {
            return Err(DescryError::ConfigurationError(format!(
                "Invalid base URL: {base_url} cannot carry paths"
            )));
        }

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("descry-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    DescryError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        Ok(DescryClient {
            base_url,
            timeout,
            user_agent: self.user_agent,
            http_client,
        })
    }
}

/// Status and body of a response, regardless of whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// The main client for the descry pattern service.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Clone)]
pub struct DescryClient {
    base_url: Url,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: ReqwestClient,
}

impl Default for DescryClient {
    fn default() -> Self {
        DescryClient {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Failed to parse default URL"),
            timeout: Duration::from_secs(30),
            user_agent: Some(concat!("descry-client/", env!("CARGO_PKG_VERSION")).to_string()),
            http_client: ReqwestClient::new(),
        }
    }
}

impl fmt::Debug for DescryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescryClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl DescryClient {
    pub fn builder() -> DescryClientBuilder {
        DescryClientBuilder::default()
    }

    /// Gets the URL of the pattern service.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets the request timeout the client was built with.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Gets the custom user agent, if one was set.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Resolves an endpoint path against the base URL.
    ///
    /// Endpoints are paths only; a query string or fragment is rejected.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> DescryResult<Url> {
        if endpoint.contains('?') {
            return Err(DescryError::InvalidEndpoint(format!(
                "endpoint must not include query: {endpoint}"
            )));
        }
        if endpoint.contains('#') {
            return Err(DescryError::InvalidEndpoint(format!(
                "endpoint must not include fragment: {endpoint}"
            )));
        }
        if !endpoint.starts_with('/') {
            return Err(DescryError::InvalidEndpoint(format!(
                "endpoint must start with '/': {endpoint}"
            )));
        }

        // Keep any path prefix of the base URL (service mounted under /descry).
        let prefix = self.base_url.path().trim_end_matches('/');
        let mut url = self.base_url.clone();
        url.set_path(&format!("{prefix}{endpoint}"));
        Ok(url)
    }

    /// Resolves `endpoint` and appends `segments` to it, percent-encoding
    /// each one. Segment text is sent as is, so `?` and `#` stay part of the
    /// path.
    pub(crate) fn segment_url<'a>(
        &self,
        endpoint: &str,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> DescryResult<Url> {
        let mut url = self.endpoint_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|()| {
                DescryError::InvalidEndpoint(format!("{} cannot carry paths", self.base_url))
            })?
            .extend(segments);
        Ok(url)
    }

    /// Starts a request against `endpoint`.
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> DescryResult<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.request_url(method, url))
    }

    /// Starts a request against an already resolved URL.
    pub(crate) fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{method} {url}");
        self.http_client.request(method, url)
    }

    /// Sends the request and returns the body as text on a 2xx status.
    pub(crate) async fn send_text(&self, request: RequestBuilder) -> DescryResult<String> {
        let response = request.send().await?;
        check_status(response).await?.text().await.map_err(DescryError::from)
    }

    /// Sends the request and decodes a JSON body on a 2xx status.
    pub(crate) async fn send_json<R>(&self, request: RequestBuilder) -> DescryResult<R>
    where
        R: DeserializeOwned,
    {
        let body = self.send_text(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Makes a raw request to the pattern service.
    ///
    /// Unlike the typed handlers, a non-success status is not an error: the
    /// status and body are returned as they arrived. Only transport failures
    /// and malformed endpoints produce `Err`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use descry_client::{DescryClient, DescryError};
    /// # use reqwest::Method;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DescryError> {
    /// let client = DescryClient::builder().base_url("http://localhost:5000").build()?;
    ///
    /// let response = client
    ///     .raw_request(Method::PUT, "/pattern/shop.xml", Some("<Map/>".to_string()))
    ///     .await?;
    /// println!("{}: {}", response.status, response.body);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> DescryResult<RawResponse> {
        let mut request = self.request(method, endpoint)?;
        if let Some(data) = body {
            request = request.body(data);
        }
        self.send_raw(request).await
    }

    /// Sends the request and returns status and body whatever the status.
    pub(crate) async fn send_raw(&self, request: RequestBuilder) -> DescryResult<RawResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    /// Fetches a static asset served next to the UI, e.g. a sample page.
    pub async fn fetch_asset(&self, path: &str) -> DescryResult<String> {
        let request = self.request(Method::GET, path)?;
        self.send_text(request).await
    }

    /// Asks the service to reload its pattern tree from disk.
    pub async fn reload(&self) -> DescryResult<()> {
        let request = self.request(Method::GET, "/reload")?;
        self.send_text(request).await.map(|_| ())
    }

    /// Validates a pattern document against the server's sample pages.
    pub fn check(&self, pattern: impl Into<String>) -> CheckBuilder {
        CheckBuilder::new(self.clone(), pattern.into())
    }

    /// Applies the loaded patterns to an HTML document.
    pub fn parse(&self) -> ParseBuilder {
        ParseBuilder::new(self.clone())
    }

    /// Gets the pattern API interface.
    pub fn patterns(&self) -> PatternHandler {
        PatternHandler::new(self.clone())
    }

    /// Gets the project API interface.
    pub fn projects(&self) -> ProjectHandler {
        ProjectHandler::new(self.clone())
    }

    /// Gets the sample store API interface of the tester service.
    pub fn samples(&self) -> SampleHandler {
        SampleHandler::new(self.clone())
    }
}

async fn check_status(response: Response) -> DescryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DescryError::ApiError { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DescryClient {
        DescryClient::builder().base_url(base).build().unwrap()
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = client("http://localhost:5000/descry/");
        let url = client.endpoint_url("/patterns").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/descry/patterns");
    }

    #[test]
    fn endpoint_rejects_query_and_fragment() {
        let client = client("http://localhost:5000");
        assert!(matches!(
            client.endpoint_url("/patterns?all=1"),
            Err(DescryError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            client.endpoint_url("/patterns#top"),
            Err(DescryError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            client.endpoint_url("patterns"),
            Err(DescryError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn segments_are_percent_encoded() {
        let client = client("http://localhost:5000/descry");
        let url = client.segment_url("/pattern", "faq?/notes#1.xml".split('/')).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/descry/pattern/faq%3F/notes%231.xml"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn default_client_points_at_local_service() {
        let client = DescryClient::default();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
    }
}
