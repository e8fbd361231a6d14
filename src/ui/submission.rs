use std::sync::Arc;

use async_trait::async_trait;

use super::view::ContentRegion;
use super::UiAction;
use crate::{DescryClient, DescryError, DescryResult};

/// Stores a pattern and shows the server's raw answer.
///
/// The display region is replaced with the response body whether the write
/// succeeded or not. A transport failure shows the error text instead.
#[derive(Clone)]
pub struct SubmitPatternAction {
    client: DescryClient,
    display: Arc<dyn ContentRegion>,
    title: String,
    data: String,
}

impl SubmitPatternAction {
    pub fn new(
        client: DescryClient,
        display: Arc<dyn ContentRegion>,
        title: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            client,
            display,
            title: title.into(),
            data: data.into(),
        }
    }
}

#[async_trait]
impl UiAction for SubmitPatternAction {
    fn name(&self) -> String {
        format!("put pattern {}", self.title)
    }

    async fn run(&self) -> DescryResult<()> {
        let sent = self
            .client
            .patterns()
            .put(self.title.as_str(), self.data.as_str())
            .send_raw()
            .await;

        match sent {
            Ok(response) => {
                self.display.replace(&response.body);
                if response.is_success() {
                    Ok(())
                } else {
                    Err(DescryError::ApiError {
                        status: response.status,
                        body: response.body,
                    })
                }
            }
            Err(err) => {
                self.display.replace(&err.display_text());
                Err(err)
            }
        }
    }
}
