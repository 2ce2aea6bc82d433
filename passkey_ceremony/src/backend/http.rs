use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use super::errors::BackendError;
use super::types::{
    AuthFinishRequest, AuthStartRequest, AuthStartResponse, CeremonyOutcome,
    RegisterFinishRequest, RegisterStartRequest, RegisterStartResponse,
};
use super::{Endpoint, RelyingParty};

use crate::config::{
    CEREMONY_BACKEND_URL, CEREMONY_HTTP_TIMEOUT, CEREMONY_ROUTE_PREFIX, normalize_route_prefix,
};

/// Connection settings for [`HttpRelyingParty`].
#[derive(Debug, Clone)]
pub struct HttpRelyingPartyConfig {
    pub base_url: Url,
    /// Prepended to every endpoint path, e.g. "/api/webauthn"
    pub route_prefix: String,
    pub timeout: Duration,
}

impl HttpRelyingPartyConfig {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BackendError::Config(format!("Invalid base URL {base_url}: {e}")))?;

        Ok(Self {
            base_url,
            route_prefix: String::new(),
            timeout: Duration::from_secs(*CEREMONY_HTTP_TIMEOUT),
        })
    }

    /// Settings taken from `CEREMONY_BACKEND_URL`, `CEREMONY_ROUTE_PREFIX` and
    /// `CEREMONY_HTTP_TIMEOUT`.
    pub fn from_env() -> Result<Self, BackendError> {
        let mut config = Self::new(&CEREMONY_BACKEND_URL)?;
        config.route_prefix = CEREMONY_ROUTE_PREFIX.clone();
        Ok(config)
    }

    pub fn with_route_prefix(mut self, prefix: &str) -> Self {
        self.route_prefix = normalize_route_prefix(prefix);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(super) fn endpoint_url(&self, endpoint: Endpoint) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}{}{}",
            self.base_url.path().trim_end_matches('/'),
            normalize_route_prefix(&self.route_prefix),
            endpoint.path()
        );
        url.set_path(&path);
        url
    }
}

/// [`RelyingParty`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpRelyingParty {
    client: reqwest::Client,
    config: HttpRelyingPartyConfig,
}

impl HttpRelyingParty {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_config(HttpRelyingPartyConfig::new(base_url)?)
    }

    pub fn from_env() -> Result<Self, BackendError> {
        Self::with_config(HttpRelyingPartyConfig::from_env()?)
    }

    pub fn with_config(config: HttpRelyingPartyConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpRelyingPartyConfig {
        &self.config
    }

    async fn post_json<Req, Res>(&self, endpoint: Endpoint, body: &Req) -> Result<Res, BackendError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!("Failed to read {} error body: {}", endpoint, e);
                String::new()
            });
            tracing::debug!("{} failed with status {}: {}", endpoint, status, body);
            return Err(BackendError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::InvalidResponse {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RelyingParty for HttpRelyingParty {
    async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse, BackendError> {
        self.post_json(Endpoint::RegisterStart, request).await
    }

    async fn register_finish(
        &self,
        request: &RegisterFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError> {
        self.post_json(Endpoint::RegisterFinish, request).await
    }

    async fn auth_start(
        &self,
        request: &AuthStartRequest,
    ) -> Result<AuthStartResponse, BackendError> {
        self.post_json(Endpoint::AuthStart, request).await
    }

    async fn auth_finish(
        &self,
        request: &AuthFinishRequest,
    ) -> Result<CeremonyOutcome, BackendError> {
        self.post_json(Endpoint::AuthFinish, request).await
    }
}
