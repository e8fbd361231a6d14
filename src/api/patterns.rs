use reqwest::Method;

use super::pattern_url;
use crate::models::listing::split_names;
use crate::models::message::ResponseMessage;
use crate::{DescryClient, DescryResult, RawResponse};

/// Provides methods for managing the pattern documents stored by the
/// service.
///
/// Patterns are addressed by title, which is their path relative to the
/// server's pattern directory (e.g. `shop.xml` or `news/feed.xml`). Titles
/// are sent as they are: `?` and `#` are encoded into the path, and a blank
/// title is left for the server to reject.
#[derive(Debug, Clone)]
pub struct PatternHandler {
    client: DescryClient,
}

impl PatternHandler {
    pub(crate) fn new(client: DescryClient) -> Self {
        Self { client }
    }

    /// Lists pattern titles, one per line of the server's response.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use descry_client::DescryClient;
    /// #
    /// # async fn example(client: &DescryClient) -> Result<(), descry_client::DescryError> {
    /// for title in client.patterns().list().await? {
    ///     println!("/pattern/{title}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self) -> DescryResult<Vec<String>> {
        let request = self.client.request(Method::GET, "/patterns")?;
        let body = self.client.send_text(request).await?;
        Ok(split_names(&body))
    }

    /// Fetches the source of a stored pattern.
    pub async fn get(&self, title: &str) -> DescryResult<String> {
        let url = pattern_url(&self.client, title)?;
        let request = self.client.request_url(Method::GET, url);
        self.client.send_text(request).await
    }

    /// Stores a pattern under `title`.
    ///
    /// # Returns
    ///
    /// Returns a `PutPatternBuilder`; call `.send()` for the decoded server
    /// message or `.send_raw()` for the response exactly as it arrived.
    pub fn put(&self, title: impl Into<String>, data: impl Into<String>) -> PutPatternBuilder {
        PutPatternBuilder::new(self.client.clone(), title.into(), data.into())
    }

    /// Removes a stored pattern.
    pub async fn delete(&self, title: &str) -> DescryResult<()> {
        let url = pattern_url(&self.client, title)?;
        let request = self.client.request_url(Method::DELETE, url);
        self.client.send_text(request).await.map(|_| ())
    }
}

#[derive(Debug, Clone)]
pub struct PutPatternBuilder {
    client: DescryClient,
    title: String,
    data: String,
}

impl PutPatternBuilder {
    pub(crate) fn new(client: DescryClient, title: String, data: String) -> Self {
        Self {
            client,
            title,
            data,
        }
    }

    /// Sends the pattern and decodes the server's message envelope.
    ///
    /// The service reports compilation failures inside the envelope rather
    /// than through the status code, so inspect `details` on the result.
    pub async fn send(self) -> DescryResult<ResponseMessage> {
        let url = pattern_url(&self.client, &self.title)?;
        let request = self.client.request_url(Method::PUT, url).body(self.data);

        self.client.send_json(request).await
    }

    /// Sends the pattern and returns status and body untouched.
    pub async fn send_raw(self) -> DescryResult<RawResponse> {
        let url = pattern_url(&self.client, &self.title)?;
        let request = self.client.request_url(Method::PUT, url).body(self.data);
        self.client.send_raw(request).await
    }
}
