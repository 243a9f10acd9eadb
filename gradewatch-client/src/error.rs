//! Error types for the gradewatch client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the remote APIs
#[derive(Debug, Error)]
pub enum ClientError {
    /// The network call could not complete (DNS, refused connection, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status code other than the expected one
    #[error("unexpected API status code: got {got}, want {want}")]
    UnexpectedStatus {
        /// Status code the API returned
        got: u16,
        /// Status code the contract expects
        want: u16,
    },

    /// The response body could not be parsed as JSON
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl ClientError {
    /// Create an unexpected-status error against the 200 OK contract
    pub fn unexpected_status(got: u16) -> Self {
        Self::UnexpectedStatus { got, want: 200 }
    }
}
