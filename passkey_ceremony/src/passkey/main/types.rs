use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::passkey::types::{PubKeyCredParam, RelyingPartyEntity};

/// Registration credential in the JSON form a relying party expects.
///
/// Every binary field is base64url text. This is the `response` member of the
/// register/finish request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponseJson {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub response: AttestationResponseJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default)]
    pub client_extension_results: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttestationResponseJson {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub attestation_object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

/// Authentication assertion in the JSON form a relying party expects.
///
/// This is the `auth` member of the auth/finish request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponseJson {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub response: AssertionResponseJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default)]
    pub client_extension_results: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResponseJson {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub authenticator_data: String,
    pub signature: String,
    /// Always serialized; `null` when the authenticator returned no handle
    pub user_handle: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreationOptionsJson {
    pub(super) challenge: Option<String>,
    pub(super) rp: Option<RelyingPartyEntity>,
    pub(super) user: Option<UserEntityJson>,
    pub(super) pub_key_cred_params: Option<Vec<PubKeyCredParam>>,
    pub(super) exclude_credentials: Option<Vec<CredentialDescriptorJson>>,
    pub(super) timeout: Option<u64>,
    #[serde(flatten)]
    pub(super) extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct RequestOptionsJson {
    pub(super) challenge: Option<String>,
    pub(super) rp_id: Option<String>,
    pub(super) allow_credentials: Option<Vec<CredentialDescriptorJson>>,
    pub(super) user_verification: Option<String>,
    pub(super) timeout: Option<u64>,
    #[serde(flatten)]
    pub(super) extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserEntityJson {
    pub(super) id: Option<String>,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) display_name: String,
}

#[derive(Deserialize, Debug)]
pub(super) struct CredentialDescriptorJson {
    #[serde(rename = "type", default = "default_credential_type")]
    pub(super) type_: String,
    pub(super) id: String,
    #[serde(default)]
    pub(super) transports: Option<Vec<String>>,
}

fn default_credential_type() -> String {
    crate::passkey::types::PUBLIC_KEY_CREDENTIAL_TYPE.to_string()
}
