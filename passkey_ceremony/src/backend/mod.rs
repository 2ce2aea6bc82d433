//! Seam to the relying-party backend and its HTTP implementation.

mod errors;
mod http;
mod types;

use async_trait::async_trait;

pub use errors::BackendError;
pub use http::{HttpRelyingParty, HttpRelyingPartyConfig};
pub use types::{
    ApiError, AuthFinishRequest, AuthStartRequest, AuthStartResponse, CeremonyOutcome,
    RegisterFinishRequest, RegisterStartRequest, RegisterStartResponse, UserId,
};

/// The four ceremony endpoints of a relying party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    RegisterStart,
    RegisterFinish,
    AuthStart,
    AuthFinish,
}

impl Endpoint {
    /// Path of the endpoint relative to the route prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Self::RegisterStart => "/register/start",
            Self::RegisterFinish => "/register/finish",
            Self::AuthStart => "/auth/start",
            Self::AuthFinish => "/auth/finish",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Request/response contract of the relying party.
///
/// Implementations report transport and status failures as [`BackendError`];
/// interpreting the outcome document is left to the caller.
#[async_trait]
pub trait RelyingParty: Send + Sync {
    async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse, BackendError>;

    async fn register_finish(
        &self,
        request: &RegisterFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError>;

    async fn auth_start(&self, request: &AuthStartRequest)
    -> Result<AuthStartResponse, BackendError>;

    async fn auth_finish(&self, request: &AuthFinishRequest)
    -> Result<CeremonyOutcome, BackendError>;
}

#[async_trait]
impl<T: RelyingParty + ?Sized> RelyingParty for std::sync::Arc<T> {
    async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse, BackendError> {
        (**self).register_start(request).await
    }

    async fn register_finish(
        &self,
        request: &RegisterFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError> {
        (**self).register_finish(request).await
    }

    async fn auth_start(
        &self,
        request: &AuthStartRequest,
    ) -> Result<AuthStartResponse, BackendError> {
        (**self).auth_start(request).await
    }

    async fn auth_finish(
        &self,
        request: &AuthFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError> {
        (**self).auth_finish(request).await
    }
}
