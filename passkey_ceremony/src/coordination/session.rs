use super::errors::CoordinationError;
use crate::backend::UserId;

/// Progress of the ceremony most recently run on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CeremonyState {
    #[default]
    Idle,
    /// Waiting for the relying party's start response
    AwaitingOptions,
    /// Waiting for the user and authenticator
    AwaitingPlatformResponse,
    /// Waiting for the relying party's finish response
    AwaitingFinish,
    Completed,
    Failed,
}

impl CeremonyState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// True while a ceremony owns the session; callers should keep the
    /// triggering controls disabled.
    pub fn is_in_flight(&self) -> bool {
        !self.is_terminal() && *self != Self::Idle
    }

    fn can_advance_to(&self, next: CeremonyState) -> bool {
        use CeremonyState::*;
        matches!(
            (self, next),
            (Idle | Completed | Failed, AwaitingOptions)
                | (AwaitingOptions, AwaitingPlatformResponse)
                | (AwaitingPlatformResponse, AwaitingFinish)
                | (AwaitingFinish, Completed)
                | (_, Failed)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CeremonyKind {
    Registration,
    Authentication,
}

/// Ceremony-scoped state shared by registration and authentication.
///
/// One session per user agent (tab, user, device). The user id is set only
/// after a registration whose finish step succeeded, and is then reused to
/// authenticate.
#[derive(Debug, Clone, Default)]
pub struct CeremonySession {
    user_id: Option<UserId>,
    kind: Option<CeremonyKind>,
    state: CeremonyState,
}

impl CeremonySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session for a user registered earlier.
    pub fn with_user_id(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn state(&self) -> CeremonyState {
        self.state
    }

    /// Kind of the ceremony currently or most recently run.
    pub fn kind(&self) -> Option<CeremonyKind> {
        self.kind
    }

    /// Return to `Idle`, e.g. after a ceremony future was dropped mid-flight.
    /// The registered user id is kept.
    pub fn reset(&mut self) {
        tracing::debug!("Resetting ceremony session from {:?}", self.state);
        self.kind = None;
        self.state = CeremonyState::Idle;
    }

    /// Forget the registered user.
    pub fn clear_user(&mut self) {
        self.user_id = None;
    }

    pub(super) fn begin(&mut self, kind: CeremonyKind) -> Result<(), CoordinationError> {
        if self.state.is_in_flight() {
            return Err(CoordinationError::InvalidState(self.state));
        }
        self.kind = Some(kind);
        self.advance(CeremonyState::AwaitingOptions);
        Ok(())
    }

    pub(super) fn advance(&mut self, next: CeremonyState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal ceremony transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!("{:?} ceremony: {:?} -> {:?}", self.kind, self.state, next);
        self.state = next;
    }

    pub(super) fn commit_user_id(&mut self, user_id: UserId) {
        tracing::debug!("Registered user id committed to session: {}", user_id);
        self.user_id = Some(user_id);
    }
}
