use thiserror::Error;

/// Errors raised while transcoding ceremony documents.
///
/// Both variants describe a document that cannot be used as-is: either the
/// relying party sent options the platform cannot consume, or the platform
/// returned a credential that lacks a field the relying party needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasskeyError {
    /// The options document from the relying party is unusable
    #[error("Malformed options: {0}")]
    MalformedOptions(String),

    /// The platform credential is missing a field required by the ceremony
    #[error("Incomplete credential: {0}")]
    IncompleteCredential(String),
}
