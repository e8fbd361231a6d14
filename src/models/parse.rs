use serde::Serialize;

/// Body of a `/parse` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseRequest {
    /// URL the document was fetched from; patterns filter on it.
    pub origin: String,
    /// Raw HTML document.
    pub data: String,
}
