use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use crate::models::check::CheckResponse;
use crate::{DescryClient, DescryResult};

/// Request to validate a pattern document.
///
/// The document is posted verbatim; the server compiles it and applies it to
/// every sample page it holds.
#[derive(Debug, Clone)]
pub struct CheckBuilder {
    client: DescryClient,
    pattern: String,
}

impl CheckBuilder {
    pub(crate) fn new(client: DescryClient, pattern: String) -> Self {
        Self { client, pattern }
    }

    /// # Examples
    ///
    /// ```no_run
    /// # use descry_client::DescryClient;
    /// #
    /// # async fn example(client: &DescryClient) -> Result<(), descry_client::DescryError> {
    /// let resp = client.check("<Map mime=\"html\"><Field title=\"Root\"/></Map>").send().await?;
    /// if let Some(message) = resp.alert_message() {
    ///     println!("pattern rejected: {message}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(self) -> DescryResult<CheckResponse> {
        let request = self
            .client
            .request(Method::POST, "/check")?
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(self.pattern);

        self.client.send_json(request).await
    }
}
