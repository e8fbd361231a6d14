//! UI actions: user events turned into service calls whose results are
//! written into view regions.
//!
//! Each action receives the regions it renders into explicitly, either
//! directly or through a [`Page`].

pub mod fixture;
pub mod json_view;
pub mod listing;
pub mod page;
pub mod submission;
pub mod validation;
pub mod view;

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use tokio::task::JoinHandle;

use crate::DescryResult;

pub use fixture::{FixtureConfig, FixtureParseAction};
pub use json_view::{JsonFormatter, FULL_DEPTH};
pub use listing::{ListAction, Resource};
pub use page::{Page, PageBuilder};
pub use submission::SubmitPatternAction;
pub use validation::{LiveValidator, ValidationOutcome};
pub use view::{
    AlertRegion, AlertState, ContentRegion, LinkList, ListEntry, MemoryAlert, MemoryList,
    MemoryRegion,
};

/// A one-shot action bound to a page.
#[async_trait]
pub trait UiAction: Send + Sync + 'static {
    /// Short description used in log lines.
    fn name(&self) -> String;

    /// Performs the request and renders its result.
    async fn run(&self) -> DescryResult<()>;
}

/// Runs an action in the background.
///
/// Failures are logged; the handle still yields them to callers that wait.
pub fn fire<A>(action: Arc<A>) -> JoinHandle<DescryResult<()>>
where
    A: UiAction + ?Sized,
{
    tokio::spawn(async move {
        let result = action.run().await;
        if let Err(err) = &result {
            warn!("{} failed: {err}", action.name());
        }
        result
    })
}
