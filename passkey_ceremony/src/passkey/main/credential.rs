use super::types::{
    AssertionResponseJson, AttestationResponseJson, AuthenticationResponseJson,
    RegistrationResponseJson,
};

use crate::passkey::errors::PasskeyError;
use crate::passkey::types::PublicKeyCredential;
use crate::utils::base64url_encode;

/// Encode a newly created credential for the register/finish request.
pub fn serialize_registration(
    credential: &PublicKeyCredential,
) -> Result<RegistrationResponseJson, PasskeyError> {
    let attestation_object = required(
        credential.response.attestation_object.as_deref(),
        "response.attestationObject",
    )?;

    let serialized = RegistrationResponseJson {
        id: credential.id.clone(),
        raw_id: base64url_encode(&credential.raw_id),
        type_: credential.type_.clone(),
        response: AttestationResponseJson {
            client_data_json: base64url_encode(&credential.response.client_data_json),
            attestation_object: base64url_encode(attestation_object),
            transports: credential.response.transports.clone(),
        },
        authenticator_attachment: credential.authenticator_attachment.clone(),
        client_extension_results: credential.client_extension_results.clone().unwrap_or_default(),
    };

    tracing::debug!("Serialized registration credential: id={}", serialized.id);
    Ok(serialized)
}

/// Encode an authentication assertion for the auth/finish request.
///
/// An absent user handle stays `null` and is never encoded as `""`, which
/// would claim a zero-length handle.
pub fn serialize_assertion(
    credential: &PublicKeyCredential,
) -> Result<AuthenticationResponseJson, PasskeyError> {
    let authenticator_data = required(
        credential.response.authenticator_data.as_deref(),
        "response.authenticatorData",
    )?;
    let signature = required(credential.response.signature.as_deref(), "response.signature")?;

    let serialized = AuthenticationResponseJson {
        id: credential.id.clone(),
        raw_id: base64url_encode(&credential.raw_id),
        type_: credential.type_.clone(),
        response: AssertionResponseJson {
            client_data_json: base64url_encode(&credential.response.client_data_json),
            authenticator_data: base64url_encode(authenticator_data),
            signature: base64url_encode(signature),
            user_handle: credential
                .response
                .user_handle
                .as_deref()
                .map(base64url_encode),
        },
        authenticator_attachment: credential.authenticator_attachment.clone(),
        client_extension_results: credential.client_extension_results.clone().unwrap_or_default(),
    };

    tracing::debug!(
        "Serialized assertion: id={}, user_handle present: {}",
        serialized.id,
        serialized.response.user_handle.is_some()
    );
    Ok(serialized)
}

fn required<'a>(field: Option<&'a [u8]>, name: &str) -> Result<&'a [u8], PasskeyError> {
    field.ok_or_else(|| PasskeyError::IncompleteCredential(format!("Missing {name}")))
}
