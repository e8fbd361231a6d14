use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::view::{LinkList, ListEntry};
use super::UiAction;
use crate::{DescryClient, DescryResult};

/// A named collection the service lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Patterns,
    Projects,
}

impl Resource {
    /// Endpoint serving the newline-delimited listing.
    pub fn list_endpoint(self) -> &'static str {
        match self {
            Resource::Patterns => "/patterns",
            Resource::Projects => "/projects",
        }
    }

    /// Link target for one listed name.
    pub fn href(self, name: &str) -> String {
        match self {
            Resource::Patterns => format!("/pattern/{name}"),
            Resource::Projects => format!("/project/{name}"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Patterns => write!(f, "patterns"),
            Resource::Projects => write!(f, "projects"),
        }
    }
}

/// Fetches a listing and appends one link per listed name.
///
/// The target is never cleared, so running the action twice lists every
/// name twice.
#[derive(Clone)]
pub struct ListAction {
    client: DescryClient,
    resource: Resource,
    target: Arc<dyn LinkList>,
}

impl ListAction {
    pub fn new(client: DescryClient, resource: Resource, target: Arc<dyn LinkList>) -> Self {
        Self {
            client,
            resource,
            target,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Runs the action and returns how many entries were appended.
    pub async fn load(&self) -> DescryResult<usize> {
        let names = match self.resource {
            Resource::Patterns => self.client.patterns().list().await?,
            Resource::Projects => self.client.projects().list().await?,
        };

        let count = names.len();
        for name in names {
            self.target.append(ListEntry {
                href: self.resource.href(&name),
                label: name,
            });
        }
        Ok(count)
    }
}

#[async_trait]
impl UiAction for ListAction {
    fn name(&self) -> String {
        format!("list {}", self.resource)
    }

    async fn run(&self) -> DescryResult<()> {
        self.load().await.map(|_| ())
    }
}
