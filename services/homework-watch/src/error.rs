//! Error types for the homework watch service

/// Errors that can occur in the homework watch service
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("missing required environment variable {0}")]
    MissingCredential(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("request to the review API failed: {0}")]
    Ambiguous(String),

    #[error("endpoint {endpoint} is unreachable, response status {status}")]
    EndpointUnreachable { endpoint: String, status: u16 },

    #[error("could not decode the API response body: {0}")]
    Decode(String),

    #[error("malformed API response: {0}")]
    MalformedResponse(&'static str),

    #[error("expected keys `homeworks` and `current_date` missing from the API response")]
    MissingKeys,

    #[error("homework record is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error("notifier error: {0}")]
    Notifier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for homework watch operations
pub type Result<T> = std::result::Result<T, WatchError>;
