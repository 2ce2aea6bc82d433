use thiserror::Error;

/// Rejections reported by the platform credential API.
///
/// These mirror the DOMException names a browser raises from
/// `navigator.credentials.create()` / `.get()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The user dismissed the prompt or denied consent (`NotAllowedError`)
    #[error("Operation cancelled by the user")]
    Cancelled,

    /// No authenticator can satisfy the request
    #[error("No eligible authenticator available")]
    NoEligibleAuthenticator,

    /// The platform enforced the ceremony timeout
    #[error("Platform timeout")]
    Timeout,

    /// The authenticator already holds an excluded credential (`InvalidStateError`)
    #[error("Invalid authenticator state: {0}")]
    InvalidState(String),

    /// Any other platform failure
    #[error("Platform error: {0}")]
    Other(String),
}
