use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::passkey::{AuthenticationResponseJson, RegistrationResponseJson};

/// Opaque user identifier issued by the relying party at register/start.
///
/// The relying party mints it (typically a UUID); the client only echoes it
/// back to finish registration and to start authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterStartRequest {
    pub username: String,
    pub display_name: String,
}

/// Body of the register/start response.
///
/// `ccr` is kept as raw JSON for the options normalizer; a missing `ccr`
/// becomes `null` and is rejected there as malformed options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterStartResponse {
    pub user_id: UserId,
    #[serde(default)]
    pub ccr: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterFinishRequest {
    pub user_id: UserId,
    pub response: RegistrationResponseJson,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthStartRequest {
    pub user_id: UserId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthStartResponse {
    #[serde(default)]
    pub rcr: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthFinishRequest {
    pub user_id: UserId,
    pub auth: AuthenticationResponseJson,
}

/// Outcome document returned by both finish endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CeremonyOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<ApiError>,
    /// Any additional members the relying party reports
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
