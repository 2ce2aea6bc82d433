use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::{CreationOptionsJson, CredentialDescriptorJson, RequestOptionsJson};

use crate::passkey::errors::PasskeyError;
use crate::passkey::types::{CreationOptions, CredentialDescriptor, RequestOptions, UserEntity};
use crate::utils::base64url_decode;

const PUBLIC_KEY_WRAPPER: &str = "publicKey";
const MEDIATION: &str = "mediation";

/// Convert a creation challenge from the relying party into platform options.
///
/// `document` is the `ccr` member of the register/start response, either the
/// options themselves or wrapped as `{"publicKey": {...}, "mediation": ...}`.
pub fn normalize_creation_options(document: &Value) -> Result<CreationOptions, PasskeyError> {
    let (options, mediation) = unwrap_public_key(document)?;
    let options: CreationOptionsJson = parse_options(options, "creation")?;

    let challenge = decode_challenge(options.challenge.as_deref())?;

    let user = options
        .user
        .ok_or_else(|| PasskeyError::MalformedOptions("Missing user".to_string()))?;
    let user_id = user
        .id
        .ok_or_else(|| PasskeyError::MalformedOptions("Missing user.id".to_string()))?;
    let user = UserEntity {
        id: decode_field(&user_id, "user.id")?,
        name: user.name,
        display_name: user.display_name,
    };

    let exclude_credentials =
        decode_descriptors(options.exclude_credentials, "excludeCredentials")?;

    let mut extra = options.extra;
    extra.remove(MEDIATION);

    let normalized = CreationOptions {
        challenge,
        rp: options.rp,
        user,
        pub_key_cred_params: options.pub_key_cred_params.unwrap_or_default(),
        exclude_credentials,
        timeout: options.timeout,
        mediation,
        extra,
    };

    tracing::debug!(
        "Normalized creation options: rp_id={:?}, {} excluded credential(s)",
        normalized.relying_party_id(),
        normalized.exclude_credentials.len()
    );

    Ok(normalized)
}

/// Convert an authentication challenge from the relying party into platform options.
///
/// `document` is the `rcr` member of the auth/start response, bare or wrapped
/// under `publicKey`.
pub fn normalize_request_options(document: &Value) -> Result<RequestOptions, PasskeyError> {
    let (options, mediation) = unwrap_public_key(document)?;
    let options: RequestOptionsJson = parse_options(options, "request")?;

    let challenge = decode_challenge(options.challenge.as_deref())?;
    let allow_credentials = decode_descriptors(options.allow_credentials, "allowCredentials")?;

    let mut extra = options.extra;
    extra.remove(MEDIATION);

    let normalized = RequestOptions {
        challenge,
        rp_id: options.rp_id,
        allow_credentials,
        user_verification: options.user_verification,
        timeout: options.timeout,
        mediation,
        extra,
    };

    tracing::debug!(
        "Normalized request options: rp_id={:?}, {} allowed credential(s)",
        normalized.relying_party_id(),
        normalized.allow_credentials.len()
    );

    Ok(normalized)
}

/// Resolve the options object inside a challenge document.
///
/// A `publicKey` member holding an object takes precedence over the document
/// itself. `mediation` is read from the outer document, falling back to the
/// options object.
fn unwrap_public_key(
    document: &Value,
) -> Result<(&Map<String, Value>, Option<String>), PasskeyError> {
    let outer = document.as_object().ok_or_else(|| {
        PasskeyError::MalformedOptions("Options document is not a JSON object".to_string())
    })?;

    let options = match outer.get(PUBLIC_KEY_WRAPPER) {
        Some(Value::Object(inner)) => inner,
        _ => outer,
    };

    let mediation = outer
        .get(MEDIATION)
        .and_then(Value::as_str)
        .or_else(|| options.get(MEDIATION).and_then(Value::as_str))
        .map(str::to_string);

    Ok((options, mediation))
}

fn parse_options<T: DeserializeOwned>(
    options: &Map<String, Value>,
    variant: &str,
) -> Result<T, PasskeyError> {
    serde_json::from_value(Value::Object(options.clone())).map_err(|e| {
        PasskeyError::MalformedOptions(format!("Invalid {variant} options: {e}"))
    })
}

fn decode_challenge(challenge: Option<&str>) -> Result<Vec<u8>, PasskeyError> {
    let challenge = challenge
        .ok_or_else(|| PasskeyError::MalformedOptions("Missing challenge".to_string()))?;
    decode_field(challenge, "challenge")
}

fn decode_field(value: &str, field: &str) -> Result<Vec<u8>, PasskeyError> {
    base64url_decode(value)
        .map_err(|e| PasskeyError::MalformedOptions(format!("Undecodable {field}: {e}")))
}

fn decode_descriptors(
    descriptors: Option<Vec<CredentialDescriptorJson>>,
    field: &str,
) -> Result<Vec<CredentialDescriptor>, PasskeyError> {
    descriptors
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, descriptor)| {
            Ok(CredentialDescriptor {
                id: decode_field(&descriptor.id, &format!("{field}[{i}].id"))?,
                type_: descriptor.type_,
                transports: descriptor.transports,
            })
        })
        .collect()
}
