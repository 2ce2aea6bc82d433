//! Scripted collaborators for unit tests
//!
//! `MockRelyingParty` and `MockPlatform` answer from canned responses and
//! record every request, so tests can assert both what a ceremony sent and
//! which calls it skipped.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use crate::backend::{
    AuthFinishRequest, AuthStartRequest, AuthStartResponse, BackendError, CeremonyOutcome,
    RegisterFinishRequest, RegisterStartRequest, RegisterStartResponse, RelyingParty, UserId,
};
use crate::passkey::{AuthenticatorResponse, CreationOptions, PublicKeyCredential, RequestOptions};
use crate::platform::{PlatformAuthenticator, PlatformError};

fn success_outcome() -> CeremonyOutcome {
    CeremonyOutcome {
        success: true,
        err: None,
        extra: Map::new(),
    }
}

pub(crate) struct MockRelyingParty {
    register_start: Mutex<RegisterStartResponse>,
    register_outcome: Mutex<CeremonyOutcome>,
    auth_start: Mutex<AuthStartResponse>,
    auth_outcome: Mutex<CeremonyOutcome>,
    next_failure: Mutex<Option<BackendError>>,
    calls: AtomicUsize,
    last_register_start: Mutex<Option<RegisterStartRequest>>,
    last_register_finish: Mutex<Option<RegisterFinishRequest>>,
    last_auth_start: Mutex<Option<AuthStartRequest>>,
    last_auth_finish: Mutex<Option<AuthFinishRequest>>,
}

impl MockRelyingParty {
    pub(crate) fn new() -> Self {
        Self {
            register_start: Mutex::new(RegisterStartResponse {
                user_id: UserId::new("u1".to_string()),
                ccr: json!({"publicKey": {"challenge": "QQ", "user": {"id": "AQ", "name": "a"}}}),
            }),
            register_outcome: Mutex::new(success_outcome()),
            auth_start: Mutex::new(AuthStartResponse {
                rcr: json!({"publicKey": {"challenge": "QQ"}}),
            }),
            auth_outcome: Mutex::new(success_outcome()),
            next_failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
            last_register_start: Mutex::new(None),
            last_register_finish: Mutex::new(None),
            last_auth_start: Mutex::new(None),
            last_auth_finish: Mutex::new(None),
        }
    }

    pub(crate) fn set_register_start(&self, user_id: &str, ccr: Value) {
        *self.register_start.lock().unwrap() = RegisterStartResponse {
            user_id: UserId::new(user_id.to_string()),
            ccr,
        };
    }

    pub(crate) fn set_register_outcome(&self, outcome: CeremonyOutcome) {
        *self.register_outcome.lock().unwrap() = outcome;
    }

    pub(crate) fn set_auth_start(&self, rcr: Value) {
        *self.auth_start.lock().unwrap() = AuthStartResponse { rcr };
    }

    /// Make the next call, whichever endpoint it hits, fail with `err`.
    pub(crate) fn fail_next(&self, err: BackendError) {
        *self.next_failure.lock().unwrap() = Some(err);
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_register_start(&self) -> Option<RegisterStartRequest> {
        self.last_register_start.lock().unwrap().clone()
    }

    pub(crate) fn last_register_finish(&self) -> Option<RegisterFinishRequest> {
        self.last_register_finish.lock().unwrap().clone()
    }

    pub(crate) fn last_auth_start(&self) -> Option<AuthStartRequest> {
        self.last_auth_start.lock().unwrap().clone()
    }

    pub(crate) fn last_auth_finish(&self) -> Option<AuthFinishRequest> {
        self.last_auth_finish.lock().unwrap().clone()
    }

    fn record_call(&self) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RelyingParty for MockRelyingParty {
    async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse, BackendError> {
        *self.last_register_start.lock().unwrap() = Some(request.clone());
        self.record_call()?;
        Ok(self.register_start.lock().unwrap().clone())
    }

    async fn register_finish(
        &self,
        request: &RegisterFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError> {
        *self.last_register_finish.lock().unwrap() = Some(request.clone());
        self.record_call()?;
        Ok(self.register_outcome.lock().unwrap().clone())
    }

    async fn auth_start(
        &self,
        request: &AuthStartRequest,
    ) -> Result<AuthStartResponse, BackendError> {
        *self.last_auth_start.lock().unwrap() = Some(request.clone());
        self.record_call()?;
        Ok(self.auth_start.lock().unwrap().clone())
    }

    async fn auth_finish(
        &self,
        request: &AuthFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError> {
        *self.last_auth_finish.lock().unwrap() = Some(request.clone());
        self.record_call()?;
        Ok(self.auth_outcome.lock().unwrap().clone())
    }
}

type PlatformResult = Result<PublicKeyCredential, PlatformError>;

pub(crate) struct MockPlatform {
    create: Mutex<Option<PlatformResult>>,
    get: Mutex<Option<PlatformResult>>,
    calls: AtomicUsize,
    last_creation_options: Mutex<Option<CreationOptions>>,
    last_request_options: Mutex<Option<RequestOptions>>,
}

impl MockPlatform {
    pub(crate) fn new() -> Self {
        Self {
            create: Mutex::new(None),
            get: Mutex::new(None),
            calls: AtomicUsize::new(0),
            last_creation_options: Mutex::new(None),
            last_request_options: Mutex::new(None),
        }
    }

    pub(crate) fn set_create(&self, result: PlatformResult) {
        *self.create.lock().unwrap() = Some(result);
    }

    pub(crate) fn set_get(&self, result: PlatformResult) {
        *self.get.lock().unwrap() = Some(result);
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_creation_options(&self) -> Option<CreationOptions> {
        self.last_creation_options.lock().unwrap().clone()
    }

    pub(crate) fn last_request_options(&self) -> Option<RequestOptions> {
        self.last_request_options.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformAuthenticator for MockPlatform {
    async fn create_credential(
        &self,
        options: CreationOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_creation_options.lock().unwrap() = Some(options);
        self.create
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(PlatformError::Other("No scripted credential".to_string())))
    }

    async fn get_credential(
        &self,
        options: RequestOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request_options.lock().unwrap() = Some(options);
        self.get
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(PlatformError::Other("No scripted assertion".to_string())))
    }
}

/// Credential with `rawId` `[1, 2, 3]` and `clientDataJSON` `[4, 5]`.
pub(crate) fn registration_credential() -> PublicKeyCredential {
    PublicKeyCredential {
        id: "AQID".to_string(),
        raw_id: vec![1, 2, 3],
        type_: "public-key".to_string(),
        response: AuthenticatorResponse {
            client_data_json: vec![4, 5],
            attestation_object: Some(vec![0xa3, 0x63, 0x66, 0x6d, 0x74]),
            ..Default::default()
        },
        authenticator_attachment: None,
        client_extension_results: None,
    }
}

pub(crate) fn assertion_credential(user_handle: Option<Vec<u8>>) -> PublicKeyCredential {
    PublicKeyCredential {
        id: "AQID".to_string(),
        raw_id: vec![1, 2, 3],
        type_: "public-key".to_string(),
        response: AuthenticatorResponse {
            client_data_json: vec![4, 5],
            authenticator_data: Some(vec![0; 37]),
            signature: Some(vec![0x30, 0x44, 0x02, 0x20]),
            user_handle,
            ..Default::default()
        },
        authenticator_attachment: None,
        client_extension_results: None,
    }
}
