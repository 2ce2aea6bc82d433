use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only credential type defined by WebAuthn Level 2/3.
pub const PUBLIC_KEY_CREDENTIAL_TYPE: &str = "public-key";

/// Relying party entity as sent in creation options.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RelyingPartyEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// User entity with the user handle decoded to raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PubKeyCredParam {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i64,
}

/// Entry of `excludeCredentials` / `allowCredentials` with a binary id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialDescriptor {
    pub type_: String,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

/// Binary-typed options for the platform "create credential" call.
///
/// Built from the relying party's creation challenge and moved into the
/// platform call, so no buffer outlives a single registration attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct CreationOptions {
    pub challenge: Vec<u8>,
    pub rp: Option<RelyingPartyEntity>,
    pub user: UserEntity,
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    pub exclude_credentials: Vec<CredentialDescriptor>,
    /// Timeout hint in milliseconds
    pub timeout: Option<u64>,
    /// Mediation requirement sent alongside `publicKey`
    pub mediation: Option<String>,
    /// Members the ceremony does not interpret (`authenticatorSelection`,
    /// `attestation`, `extensions`, `hints`, ...), unchanged
    pub extra: Map<String, Value>,
}

impl CreationOptions {
    pub fn relying_party_id(&self) -> Option<&str> {
        self.rp.as_ref().and_then(|rp| rp.id.as_deref())
    }
}

/// Binary-typed options for the platform "get credential" call.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub challenge: Vec<u8>,
    pub rp_id: Option<String>,
    pub allow_credentials: Vec<CredentialDescriptor>,
    pub user_verification: Option<String>,
    /// Timeout hint in milliseconds
    pub timeout: Option<u64>,
    pub mediation: Option<String>,
    pub extra: Map<String, Value>,
}

impl RequestOptions {
    pub fn relying_party_id(&self) -> Option<&str> {
        self.rp_id.as_deref()
    }
}

/// Credential returned by the platform for either ceremony.
///
/// Registration fills `attestation_object`; authentication fills
/// `authenticator_data`, `signature` and optionally `user_handle`.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub type_: String,
    pub response: AuthenticatorResponse,
    pub authenticator_attachment: Option<String>,
    /// `None` when the platform reports no extension outputs
    pub client_extension_results: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthenticatorResponse {
    pub client_data_json: Vec<u8>,
    pub attestation_object: Option<Vec<u8>>,
    pub authenticator_data: Option<Vec<u8>>,
    pub signature: Option<Vec<u8>>,
    /// `None` means no user handle; `Some(vec![])` is a zero-length handle
    pub user_handle: Option<Vec<u8>>,
    pub transports: Option<Vec<String>>,
}
