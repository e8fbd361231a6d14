use std::sync::Arc;

use super::fixture::{FixtureConfig, FixtureParseAction};
use super::listing::{ListAction, Resource};
use super::submission::SubmitPatternAction;
use super::validation::LiveValidator;
use super::view::{AlertRegion, ContentRegion, LinkList};
use crate::DescryClient;

/// The regions of one page, and the actions that can be bound to them.
///
/// A page only offers the actions whose regions it has: without an alert
/// and a result region there is no live validation, without a pattern list
/// no pattern listing, and so on.
#[derive(Clone)]
pub struct Page {
    client: DescryClient,
    alert: Option<Arc<dyn AlertRegion>>,
    result: Option<Arc<dyn ContentRegion>>,
    display: Option<Arc<dyn ContentRegion>>,
    pattern_list: Option<Arc<dyn LinkList>>,
    project_list: Option<Arc<dyn LinkList>>,
    fixture: FixtureConfig,
}

impl Page {
    pub fn builder(client: DescryClient) -> PageBuilder {
        PageBuilder::new(client)
    }

    /// Live validation of the pattern editor.
    pub fn live_validator(&self) -> Option<LiveValidator> {
        let alert = self.alert.clone()?;
        let result = self.result.clone()?;
        Some(LiveValidator::new(self.client.clone(), alert, result))
    }

    /// Appends the stored patterns to the pattern list.
    pub fn list_patterns(&self) -> Option<ListAction> {
        let target = self.pattern_list.clone()?;
        Some(ListAction::new(self.client.clone(), Resource::Patterns, target))
    }

    /// Appends the known projects to the project list.
    pub fn list_projects(&self) -> Option<ListAction> {
        let target = self.project_list.clone()?;
        Some(ListAction::new(self.client.clone(), Resource::Projects, target))
    }

    /// Stores `data` as pattern `title`, showing the answer in the display
    /// region.
    pub fn submit_pattern(
        &self,
        title: impl Into<String>,
        data: impl Into<String>,
    ) -> Option<SubmitPatternAction> {
        let display = self.display.clone()?;
        Some(SubmitPatternAction::new(self.client.clone(), display, title, data))
    }

    /// Parses the configured fixture page, showing the JSON in the display
    /// region.
    pub fn parse_fixture(&self) -> Option<FixtureParseAction> {
        let display = self.display.clone()?;
        Some(FixtureParseAction::new(
            self.client.clone(),
            display,
            self.fixture.clone(),
        ))
    }
}

pub struct PageBuilder {
    page: Page,
}

impl PageBuilder {
    pub(crate) fn new(client: DescryClient) -> Self {
        Self {
            page: Page {
                client,
                alert: None,
                result: None,
                display: None,
                pattern_list: None,
                project_list: None,
                fixture: FixtureConfig::default(),
            },
        }
    }

    /// Enables live validation, rendering into `alert` and `result`.
    pub fn pattern_checking(
        mut self,
        alert: Arc<dyn AlertRegion>,
        result: Arc<dyn ContentRegion>,
    ) -> Self {
        self.page.alert = Some(alert);
        self.page.result = Some(result);
        self
    }

    /// Region that pattern writes and fixture parses are shown in.
    pub fn display(mut self, display: Arc<dyn ContentRegion>) -> Self {
        self.page.display = Some(display);
        self
    }

    pub fn pattern_list(mut self, list: Arc<dyn LinkList>) -> Self {
        self.page.pattern_list = Some(list);
        self
    }

    pub fn project_list(mut self, list: Arc<dyn LinkList>) -> Self {
        self.page.project_list = Some(list);
        self
    }

    pub fn fixture(mut self, fixture: FixtureConfig) -> Self {
        self.page.fixture = fixture;
        self
    }

    pub fn build(self) -> Page {
        self.page
    }
}
