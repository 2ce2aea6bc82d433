mod errors;
mod main;
mod types;

pub use errors::PasskeyError;

pub use main::{
    AssertionResponseJson, AttestationResponseJson, AuthenticationResponseJson,
    RegistrationResponseJson, normalize_creation_options, normalize_request_options,
    serialize_assertion, serialize_registration,
};

pub use types::{
    AuthenticatorResponse, CreationOptions, CredentialDescriptor, PUBLIC_KEY_CREDENTIAL_TYPE,
    PubKeyCredParam, PublicKeyCredential, RelyingPartyEntity, RequestOptions, UserEntity,
};
