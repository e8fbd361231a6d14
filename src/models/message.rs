use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope the pattern service answers pattern writes with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMessage {
    /// Human-readable outcome, e.g. "Pattern shop.xml written succesfully".
    #[serde(default)]
    pub message: String,

    /// Underlying error text, empty on success.
    #[serde(default)]
    pub details: String,

    /// Optional structured payload.
    #[serde(default)]
    pub payload: Option<Value>,
}
