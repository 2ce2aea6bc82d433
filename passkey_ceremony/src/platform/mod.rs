//! Seam to the host's platform credential API.

mod errors;

use async_trait::async_trait;

use crate::passkey::{CreationOptions, PublicKeyCredential, RequestOptions};

pub use errors::PlatformError;

/// The host capability that creates and asserts public-key credentials.
///
/// Each call suspends until the user and authenticator respond, or the
/// platform rejects the request. Options are taken by value; the platform
/// owns them for the duration of the call.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Equivalent of `navigator.credentials.create({ publicKey })`.
    async fn create_credential(
        &self,
        options: CreationOptions,
    ) -> Result<PublicKeyCredential, PlatformError>;

    /// Equivalent of `navigator.credentials.get({ publicKey })`.
    async fn get_credential(
        &self,
        options: RequestOptions,
    ) -> Result<PublicKeyCredential, PlatformError>;
}

#[async_trait]
impl<T: PlatformAuthenticator + ?Sized> PlatformAuthenticator for std::sync::Arc<T> {
    async fn create_credential(
        &self,
        options: CreationOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        (**self).create_credential(options).await
    }

    async fn get_credential(
        &self,
        options: RequestOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        (**self).get_credential(options).await
    }
}
