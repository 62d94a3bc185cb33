//! Admin-side client for the Motorhub API.
//!
//! Holds the admin session (token persistence and the identity decoded from
//! it) and the marketplace feature toggles fetched from the server.

pub mod api;
pub mod auth_provider;
pub mod config;
pub mod error;
pub mod feature_flags;
pub mod session_store;
pub mod token;

pub use api::MotorhubApi;
pub use auth_provider::{AdminAuthProvider, AuthState, LoginOutcome, Navigator, NoopNavigator};
pub use config::ClientConfig;
pub use error::ClientError;
pub use feature_flags::{FeatureFlagFetcher, FeatureFlags, FetchOutcome};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
