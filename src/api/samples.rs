use reqwest::Method;

use crate::models::samples::{SampleList, SampleReply};
use crate::{DescryClient, DescryResult};

/// Provides methods for the tester service's sample store.
///
/// The tester keeps a set of captured pages keyed by URL and checks
/// patterns against them.
#[derive(Debug, Clone)]
pub struct SampleHandler {
    client: DescryClient,
}

impl SampleHandler {
    pub(crate) fn new(client: DescryClient) -> Self {
        Self { client }
    }

    /// Lists the URLs of the stored samples.
    pub async fn list(&self) -> DescryResult<Vec<String>> {
        let request = self.client.request(Method::GET, "/list")?;
        self.send(request).await
    }

    /// Has the tester download `url` into the store and returns the updated
    /// listing.
    pub async fn add(&self, url: impl Into<String>) -> DescryResult<Vec<String>> {
        let request = self.client.request(Method::POST, "/list/add")?.body(url.into());
        self.send(request).await
    }

    /// Empties the store and returns the (now empty) listing.
    pub async fn flush(&self) -> DescryResult<Vec<String>> {
        let request = self.client.request(Method::GET, "/list/flush")?;
        self.send(request).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> DescryResult<Vec<String>> {
        let body = self.client.send_text(request).await?;
        let reply = SampleReply::from_body(&body)?;
        SampleList::try_from(reply).map(|samples| samples.list)
    }
}
