use std::time::Duration;

/// Default API base URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    pub api_base_url: String,
    /// Timeout applied to each HTTP request.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration for `api_base_url` with the default timeout.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                      |
    /// |-------------------------------|------------------------------|
    /// | `MOTORHUB_API_URL`            | `http://localhost:3000/api`  |
    /// | `MOTORHUB_API_TIMEOUT_SECS`   | `10`                         |
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("MOTORHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let timeout_secs: u64 = std::env::var("MOTORHUB_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            request_timeout: Duration::from_secs(timeout_secs),
            ..Self::new(api_base_url)
        }
    }
}
