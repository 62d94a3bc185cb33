//! Marketplace feature toggles as seen by the client.
//!
//! [`FeatureFlagFetcher`] performs a single request and reports what
//! happened. [`FeatureFlags`] holds the current toggles and never surfaces a
//! failure: until a fetch succeeds it serves the safe defaults.

use motorhub_core::feature_settings::FeatureSettings;

use crate::api::MotorhubApi;
use crate::error::ClientError;

/// What a single settings fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server returned settings. Fields it omitted are `None`.
    Fetched(FeatureSettings),
    /// The deployment has no settings endpoint or no settings row.
    NotImplemented,
    /// The request failed or the server answered with an unexpected status.
    TransportError(String),
}

/// Issues `GET /settings/features`.
#[derive(Clone)]
pub struct FeatureFlagFetcher {
    api: MotorhubApi,
}

impl FeatureFlagFetcher {
    pub fn new(api: MotorhubApi) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> FetchOutcome {
        match self.api.feature_settings().await {
            Ok(Some(settings)) => FetchOutcome::Fetched(settings),
            Ok(None) => FetchOutcome::NotImplemented,
            Err(ClientError::ApiError { status, .. }) => {
                FetchOutcome::TransportError(format!("Unexpected status {status}"))
            }
            Err(e) => FetchOutcome::TransportError(e.to_string()),
        }
    }
}

/// Current feature toggles for the client.
pub struct FeatureFlags {
    fetcher: FeatureFlagFetcher,
    features: FeatureSettings,
    loading: bool,
    error: Option<String>,
}

impl FeatureFlags {
    /// Holder serving the defaults until [`mount`](Self::mount) runs.
    pub fn new(fetcher: FeatureFlagFetcher) -> Self {
        Self {
            fetcher,
            features: FeatureSettings::default(),
            loading: true,
            error: None,
        }
    }

    pub fn features(&self) -> &FeatureSettings {
        &self.features
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Always `None`: fetch failures fall back silently.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Initial fetch.
    pub async fn mount(&mut self) {
        self.refetch().await;
    }

    /// Fetch again and adopt the result.
    ///
    /// A successful body replaces the toggles wholesale. A 404 or any
    /// failure keeps what is already held.
    pub async fn refetch(&mut self) {
        self.loading = true;

        match self.fetcher.fetch().await {
            FetchOutcome::Fetched(settings) => self.features = settings,
            FetchOutcome::NotImplemented => {
                tracing::debug!("Feature settings not configured, keeping current toggles");
            }
            FetchOutcome::TransportError(message) => {
                tracing::warn!(error = %message, "Failed to fetch feature settings");
            }
        }

        self.error = None;
        self.loading = false;
    }
}
