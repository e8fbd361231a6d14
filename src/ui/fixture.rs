use std::sync::Arc;

use async_trait::async_trait;

use super::view::ContentRegion;
use super::UiAction;
use crate::{DescryClient, DescryResult};

const DEFAULT_ASSET_PATH: &str = "/assets/1478118249.html";
const DEFAULT_ORIGIN: &str = "https://www.atgstores.com/";

/// Which captured page the fixture action parses, and what origin it claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub asset_path: String,
    pub origin: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            asset_path: DEFAULT_ASSET_PATH.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl FixtureConfig {
    pub fn asset_path(mut self, path: impl Into<String>) -> Self {
        self.asset_path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

/// Smoke test for `/parse`: sends a captured page through the pattern tree
/// and shows the resulting JSON.
///
/// Nothing is displayed when either request fails.
#[derive(Clone)]
pub struct FixtureParseAction {
    client: DescryClient,
    display: Arc<dyn ContentRegion>,
    config: FixtureConfig,
}

impl FixtureParseAction {
    pub fn new(client: DescryClient, display: Arc<dyn ContentRegion>, config: FixtureConfig) -> Self {
        Self {
            client,
            display,
            config,
        }
    }
}

#[async_trait]
impl UiAction for FixtureParseAction {
    fn name(&self) -> String {
        format!("parse fixture {}", self.config.asset_path)
    }

    async fn run(&self) -> DescryResult<()> {
        let page = self.client.fetch_asset(&self.config.asset_path).await?;
        let parsed = self
            .client
            .parse()
            .origin(self.config.origin.as_str())
            .data(page)
            .send()
            .await?;

        self.display.replace(&serde_json::to_string(&parsed)?);
        Ok(())
    }
}
