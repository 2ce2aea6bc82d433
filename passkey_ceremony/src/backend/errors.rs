use thiserror::Error;

/// Failures talking to the relying party.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The endpoint answered with a non-success HTTP status
    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The endpoint answered successfully but reported `success: false`
    #[error("{endpoint} rejected the ceremony: {message}")]
    Rejected { endpoint: String, message: String },

    /// The request never produced a response (connection, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be parsed
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// The client itself is misconfigured (e.g. an unparsable base URL)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
