//! HTTP client for the Motorhub admin endpoints.
//!
//! Wraps the two endpoints the admin client calls (admin login and the
//! public feature settings) using [`reqwest`].

use motorhub_core::feature_settings::FeatureSettings;
use motorhub_core::session::AdminProfile;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for one Motorhub API deployment.
#[derive(Clone)]
pub struct MotorhubApi {
    client: reqwest::Client,
    api_url: String,
}

/// Body returned by `POST /auth/admin-login`, on success and rejection alike.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminLoginReply {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub admin: Option<AdminProfile>,
    pub error: Option<String>,
}

impl MotorhubApi {
    /// Create an API client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Exchange admin credentials for a session token.
    ///
    /// Sends `POST /auth/admin-login`. The server answers rejections with a
    /// non-2xx status and the same body shape, so the status is not treated
    /// as an error here. A body that is not the expected JSON is returned as
    /// an unsuccessful reply with no message.
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminLoginReply, ClientError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .client
            .post(format!("{}/auth/admin-login", self.api_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<AdminLoginReply>(&bytes) {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::warn!(status = status.as_u16(), error = %e, "Unreadable admin login response");
                Ok(AdminLoginReply::default())
            }
        }
    }

    /// Retrieve the live feature settings.
    ///
    /// Sends `GET /settings/features`. Returns `Ok(None)` when the server
    /// answers 404 (settings not configured on this deployment).
    pub async fn feature_settings(&self) -> Result<Option<FeatureSettings>, ClientError> {
        let response = self
            .client
            .get(format!("{}/settings/features", self.api_url))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::ensure_success(response).await?;
        Ok(Some(response.json().await?))
    }

    // ---- private helpers ----

    /// Return the response unchanged on a success status, or an
    /// [`ClientError::ApiError`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
