use reqwest::Method;

use crate::models::listing::split_names;
use crate::{DescryClient, DescryResult};

/// Provides read access to the project listing.
#[derive(Debug, Clone)]
pub struct ProjectHandler {
    client: DescryClient,
}

impl ProjectHandler {
    pub(crate) fn new(client: DescryClient) -> Self {
        Self { client }
    }

    /// Lists project names, one per line of the server's response.
    pub async fn list(&self) -> DescryResult<Vec<String>> {
        let request = self.client.request(Method::GET, "/projects")?;
        let body = self.client.send_text(request).await?;
        Ok(split_names(&body))
    }
}
