use http::StatusCode;
use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the descry client.
#[derive(Error, Debug)]
pub enum DescryError {
    /// The server answered with a non-success status.
    #[error("API error ({status}): {body}")]
    ApiError {
        /// Status code returned by the server.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// The service reported a failure inside a success response.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error compressing a request body.
    #[error("Compression error: {0}")]
    CompressionError(#[from] std::io::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

impl DescryError {
    /// Text shown to the user when an action fails.
    ///
    /// Server failures surface their raw body, everything else its message.
    pub fn display_text(&self) -> String {
        match self {
            DescryError::ApiError { body, .. } => body.clone(),
            DescryError::ServiceError(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for descry client operations.
pub type DescryResult<T> = Result<T, DescryError>;
