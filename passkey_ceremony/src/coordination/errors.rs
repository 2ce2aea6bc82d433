//! Error types surfaced to ceremony callers

use thiserror::Error;

use super::session::CeremonyState;
use crate::backend::BackendError;
use crate::passkey::PasskeyError;
use crate::platform::PlatformError;

/// Errors that end a ceremony in the `Failed` state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinationError {
    /// Authentication was attempted before any registration succeeded in this session
    #[error("No active user: register before authenticating")]
    NoActiveUser,

    /// A ceremony was started while another one on the same session is in flight
    #[error("Invalid state: a ceremony is already in progress ({0:?})")]
    InvalidState(CeremonyState),

    /// Error from transcoding options or credentials
    #[error("Passkey error: {0}")]
    PasskeyError(PasskeyError),

    /// Error from the platform credential API
    #[error("Platform rejected the request: {0}")]
    PlatformError(PlatformError),

    /// Error from the relying party
    #[error("Backend error: {0}")]
    BackendError(BackendError),
}

/// Coarse classification of a [`CoordinationError`] for callers that render
/// one message per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedOptions,
    IncompleteCredential,
    PlatformRejection,
    Backend,
    NoActiveUser,
    InvalidState,
}

impl CoordinationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoActiveUser => ErrorKind::NoActiveUser,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::PasskeyError(PasskeyError::MalformedOptions(_)) => ErrorKind::MalformedOptions,
            Self::PasskeyError(PasskeyError::IncompleteCredential(_)) => {
                ErrorKind::IncompleteCredential
            }
            Self::PlatformError(_) => ErrorKind::PlatformRejection,
            Self::BackendError(_) => ErrorKind::Backend,
        }
    }

    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    pub fn log(self) -> Self {
        match &self {
            Self::NoActiveUser => tracing::error!("No active user"),
            Self::InvalidState(state) => tracing::error!("Invalid state: {:?}", state),
            Self::PasskeyError(err) => tracing::error!("Passkey error: {}", err),
            Self::PlatformError(err) => tracing::error!("Platform error: {}", err),
            Self::BackendError(err) => tracing::error!("Backend error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<PasskeyError> for CoordinationError {
    fn from(err: PasskeyError) -> Self {
        let error = Self::PasskeyError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<PlatformError> for CoordinationError {
    fn from(err: PlatformError) -> Self {
        let error = Self::PlatformError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<BackendError> for CoordinationError {
    fn from(err: BackendError) -> Self {
        let error = Self::BackendError(err);
        tracing::error!("{}", error);
        error
    }
}
