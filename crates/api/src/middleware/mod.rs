//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a signed session token.
//! - [`rbac::RequireAdmin`] -- Requires an admin or superadmin token.
//! - [`rbac::RequireSuperAdmin`] -- Requires a superadmin in good standing.

pub mod auth;
pub mod rbac;
