/// Errors from the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a status the caller did not expect.
    #[error("Motorhub API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Reading or writing persisted session data failed.
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted session data could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored session token could not be decoded.
    #[error("Malformed session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
