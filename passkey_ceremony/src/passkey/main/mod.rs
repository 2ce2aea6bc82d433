mod credential;
mod options;
mod types;

pub use credential::{serialize_assertion, serialize_registration};
pub use options::{normalize_creation_options, normalize_request_options};
pub use types::{
    AssertionResponseJson, AttestationResponseJson, AuthenticationResponseJson,
    RegistrationResponseJson,
};
