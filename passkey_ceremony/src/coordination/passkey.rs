use super::errors::CoordinationError;
use super::session::{CeremonyKind, CeremonySession, CeremonyState};

use crate::backend::{
    AuthFinishRequest, AuthStartRequest, BackendError, CeremonyOutcome, Endpoint,
    RegisterFinishRequest, RegisterStartRequest, RelyingParty, UserId,
};
use crate::passkey::{
    normalize_creation_options, normalize_request_options, serialize_assertion,
    serialize_registration,
};
use crate::platform::PlatformAuthenticator;

/// Drives registration and authentication ceremonies between a relying party
/// and the platform credential API.
///
/// The client holds no ceremony state of its own; everything ceremony-scoped
/// lives in the [`CeremonySession`] passed to each call, so one client can
/// serve any number of sessions.
#[derive(Debug, Clone)]
pub struct CeremonyClient<R, P> {
    relying_party: R,
    platform: P,
}

impl<R, P> CeremonyClient<R, P>
where
    R: RelyingParty,
    P: PlatformAuthenticator,
{
    pub fn new(relying_party: R, platform: P) -> Self {
        Self {
            relying_party,
            platform,
        }
    }

    pub fn relying_party(&self) -> &R {
        &self.relying_party
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Register a new passkey for `username`.
    ///
    /// On success the relying party's user id is stored in `session` for later
    /// authentication. On failure the session's user id is left as it was.
    pub async fn register(
        &self,
        session: &mut CeremonySession,
        username: &str,
        display_name: &str,
    ) -> Result<CeremonyOutcome, CoordinationError> {
        session.begin(CeremonyKind::Registration)?;

        match self.run_registration(session, username, display_name).await {
            Ok(outcome) => {
                session.advance(CeremonyState::Completed);
                Ok(outcome)
            }
            Err(e) => {
                session.advance(CeremonyState::Failed);
                Err(e)
            }
        }
    }

    /// Authenticate the user registered earlier in `session`.
    ///
    /// Fails with [`CoordinationError::NoActiveUser`] before any network call
    /// if the session has no user id.
    pub async fn authenticate(
        &self,
        session: &mut CeremonySession,
    ) -> Result<CeremonyOutcome, CoordinationError> {
        session.begin(CeremonyKind::Authentication)?;

        match self.run_authentication(session).await {
            Ok(outcome) => {
                session.advance(CeremonyState::Completed);
                Ok(outcome)
            }
            Err(e) => {
                session.advance(CeremonyState::Failed);
                Err(e)
            }
        }
    }

    async fn run_registration(
        &self,
        session: &mut CeremonySession,
        username: &str,
        display_name: &str,
    ) -> Result<CeremonyOutcome, CoordinationError> {
        let start = self
            .relying_party
            .register_start(&RegisterStartRequest {
                username: username.to_string(),
                display_name: display_name.to_string(),
            })
            .await?;

        // Held locally until the relying party confirms the registration.
        let user_id = start.user_id;
        tracing::debug!("Registration started for {}: user id {}", username, user_id);

        let options = normalize_creation_options(&start.ccr)?;

        session.advance(CeremonyState::AwaitingPlatformResponse);
        let credential = self.platform.create_credential(options).await?;

        let response = serialize_registration(&credential)?;

        session.advance(CeremonyState::AwaitingFinish);
        let outcome = self
            .relying_party
            .register_finish(&RegisterFinishRequest {
                user_id: user_id.clone(),
                response,
            })
            .await?;
        let outcome = check_outcome(Endpoint::RegisterFinish, outcome)?;

        session.commit_user_id(user_id);
        Ok(outcome)
    }

    async fn run_authentication(
        &self,
        session: &mut CeremonySession,
    ) -> Result<CeremonyOutcome, CoordinationError> {
        let user_id: UserId = session
            .user_id()
            .cloned()
            .ok_or_else(|| CoordinationError::NoActiveUser.log())?;

        let start = self
            .relying_party
            .auth_start(&AuthStartRequest {
                user_id: user_id.clone(),
            })
            .await?;

        let options = normalize_request_options(&start.rcr)?;

        session.advance(CeremonyState::AwaitingPlatformResponse);
        let credential = self.platform.get_credential(options).await?;

        let auth = serialize_assertion(&credential)?;

        session.advance(CeremonyState::AwaitingFinish);
        let outcome = self
            .relying_party
            .auth_finish(&AuthFinishRequest { user_id, auth })
            .await?;

        Ok(check_outcome(Endpoint::AuthFinish, outcome)?)
    }
}

/// A finish response with `success: false` is a relying-party rejection.
fn check_outcome(
    endpoint: Endpoint,
    outcome: CeremonyOutcome,
) -> Result<CeremonyOutcome, BackendError> {
    if outcome.success {
        return Ok(outcome);
    }

    let message = outcome
        .err
        .map(|err| format!("{} ({})", err.message, err.code))
        .unwrap_or_else(|| "success: false".to_string());

    Err(BackendError::Rejected {
        endpoint: endpoint.to_string(),
        message,
    })
}
