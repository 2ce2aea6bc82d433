//! passkey_ceremony - client-side WebAuthn ceremony orchestration
//!
//! This crate drives passkey registration and authentication between a
//! relying-party backend and the platform credential API, transcoding
//! challenges and credentials between base64url JSON and binary buffers.
//!
//! ```no_run
//! # use passkey_ceremony::{CeremonyClient, CeremonySession, HttpRelyingParty, PlatformAuthenticator};
//! # async fn demo(platform: impl PlatformAuthenticator) -> Result<(), Box<dyn std::error::Error>> {
//! let client = CeremonyClient::new(HttpRelyingParty::from_env()?, platform);
//! let mut session = CeremonySession::new();
//!
//! client.register(&mut session, "alice", "Alice").await?;
//! client.authenticate(&mut session).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod config;
mod coordination;
mod passkey;
mod platform;
mod utils;

#[cfg(test)]
mod test_utils;

pub use backend::{
    ApiError, AuthFinishRequest, AuthStartRequest, AuthStartResponse, BackendError,
    CeremonyOutcome, Endpoint, HttpRelyingParty, HttpRelyingPartyConfig, RegisterFinishRequest,
    RegisterStartRequest, RegisterStartResponse, RelyingParty, UserId,
};

pub use config::{CEREMONY_BACKEND_URL, CEREMONY_ROUTE_PREFIX};

pub use coordination::{
    CeremonyClient, CeremonyKind, CeremonySession, CeremonyState, CoordinationError, ErrorKind,
};

pub use passkey::{
    AssertionResponseJson, AttestationResponseJson, AuthenticationResponseJson,
    AuthenticatorResponse, CreationOptions, CredentialDescriptor, PUBLIC_KEY_CREDENTIAL_TYPE,
    PasskeyError, PubKeyCredParam, PublicKeyCredential, RegistrationResponseJson,
    RelyingPartyEntity, RequestOptions, UserEntity, normalize_creation_options,
    normalize_request_options, serialize_assertion, serialize_registration,
};

pub use platform::{PlatformAuthenticator, PlatformError};

pub use utils::{UtilError, base64url_decode, base64url_encode};
