use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of validating a pattern against the server's sample pages.
///
/// Two services answer `/check` with different field names: the pattern
/// service uses `Message`/`Payload`, the tester uses `Error`/`Data`. Both
/// decode into this type; when a body carries both namings, `Message` and
/// `Payload` win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireCheckResponse", rename_all = "PascalCase")]
pub struct CheckResponse {
    /// Human-readable message, present when the pattern did not check out.
    pub message: Option<String>,

    /// Underlying error text, if the server sent one.
    pub details: Option<String>,

    /// Data extracted from the sample pages.
    pub payload: Option<Value>,
}

impl CheckResponse {
    /// Message to raise in the alert region.
    ///
    /// An empty message counts as no message.
    pub fn alert_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Payload to hand to the result viewer, `null` when absent.
    pub fn payload_or_null(&self) -> &Value {
        self.payload.as_ref().unwrap_or(&Value::Null)
    }
}

#[derive(Deserialize)]
struct WireCheckResponse {
    #[serde(rename = "Message", default)]
    message: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Details", default)]
    details: Option<String>,
    #[serde(rename = "Payload", default)]
    payload: Option<Value>,
    #[serde(rename = "Data", default)]
    data: Option<Value>,
}

impl From<WireCheckResponse> for CheckResponse {
    fn from(wire: WireCheckResponse) -> Self {
        Self {
            message: wire.message.or(wire.error),
            details: wire.details.filter(|d| !d.is_empty()),
            payload: wire.payload.or(wire.data),
        }
    }
}
