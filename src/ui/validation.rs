//! Live validation of the pattern being edited.
//!
//! Every edit posts the whole pattern to `/check`. Requests are
//! cancellable: a new edit cancels the request of the previous one, and a
//! response that arrives after a newer edit was made is discarded instead of
//! overwriting the newer result.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::json_view::{JsonFormatter, FULL_DEPTH};
use super::view::{AlertRegion, ContentRegion};
use crate::DescryClient;

/// What a validation run did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The response was rendered; `message` is what the alert shows, if any.
    Rendered { message: Option<String> },
    /// The request failed and the failure text was put in the alert.
    Failed(String),
    /// A newer edit superseded this one; nothing was rendered.
    Superseded,
}

#[derive(Debug, Default)]
struct InFlight {
    generation: u64,
    cancel: Option<CancellationToken>,
}

/// Binds pattern edits to `/check` and renders the outcome.
#[derive(Clone)]
pub struct LiveValidator {
    client: DescryClient,
    alert: Arc<dyn AlertRegion>,
    result: Arc<dyn ContentRegion>,
    in_flight: Arc<Mutex<InFlight>>,
}

impl LiveValidator {
    pub fn new(
        client: DescryClient,
        alert: Arc<dyn AlertRegion>,
        result: Arc<dyn ContentRegion>,
    ) -> Self {
        Self {
            client,
            alert,
            result,
            in_flight: Arc::new(Mutex::new(InFlight::default())),
        }
    }

    /// Handles an edit without waiting for the response.
    ///
    /// The edit supersedes earlier ones as soon as this returns, so edits
    /// triggered in sequence are ordered even though their requests race.
    pub fn trigger(&self, text: impl Into<String>) -> JoinHandle<ValidationOutcome> {
        let (generation, cancel) = self.begin();
        let validator = self.clone();
        let text = text.into();
        tokio::spawn(async move { validator.run(generation, cancel, text).await })
    }

    /// Handles an edit: checks `text` and renders the response, unless a
    /// newer edit arrives first.
    pub async fn on_input(&self, text: impl Into<String>) -> ValidationOutcome {
        let (generation, cancel) = self.begin();
        self.run(generation, cancel, text.into()).await
    }

    async fn run(
        &self,
        generation: u64,
        cancel: CancellationToken,
        text: String,
    ) -> ValidationOutcome {
        let result = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("check #{generation} cancelled by a newer edit");
                return ValidationOutcome::Superseded;
            }
            result = self.client.check(text).send() => result,
        };

        // Render while holding the lock so a newer edit cannot slip in
        // between the staleness check and the write.
        let in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if in_flight.generation != generation || cancel.is_cancelled() {
            debug!("dropping stale check response #{generation}");
            return ValidationOutcome::Superseded;
        }

        match result {
            Ok(resp) => {
                let message = resp.alert_message().map(str::to_string);
                match &message {
                    Some(message) => self.alert.show(message),
                    None => self.alert.hide(),
                }
                let rendered = JsonFormatter::new(resp.payload_or_null())
                    .open_at_depth(FULL_DEPTH)
                    .render();
                self.result.replace(&rendered);
                ValidationOutcome::Rendered { message }
            }
            Err(err) => {
                let text = err.display_text();
                self.alert.show(&text);
                ValidationOutcome::Failed(text)
            }
        }
    }

    /// Cancels the request in flight, if any, without starting a new one.
    pub fn cancel(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        in_flight.generation = in_flight.generation.wrapping_add(1);
        if let Some(cancel) = in_flight.cancel.take() {
            cancel.cancel();
        }
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = in_flight.cancel.take() {
            previous.cancel();
        }
        in_flight.generation = in_flight.generation.wrapping_add(1);
        let cancel = CancellationToken::new();
        in_flight.cancel = Some(cancel.clone());
        (in_flight.generation, cancel)
    }
}
