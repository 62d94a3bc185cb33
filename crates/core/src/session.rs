//! Admin session token payload and the admin profile exchanged at login.

use serde::{Deserialize, Serialize};

use crate::roles;
use crate::types::DbId;

/// Storage key under which the client persists the admin token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Claims carried by an admin session token.
///
/// The client decodes these without verifying the signature, for display
/// only. The server verifies the signature on every request and re-reads
/// the admin's role and blocked flag from the database before authorizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Expiration time (UTC Unix timestamp, seconds).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp, seconds).
    #[serde(default)]
    pub iat: i64,
}

impl SessionClaims {
    /// `true` when `exp` is strictly before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}

/// Public admin record returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AdminProfile {
    pub fn is_admin(&self) -> bool {
        roles::is_admin_role(&self.role)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == roles::ROLE_SUPERADMIN
    }
}

impl From<SessionClaims> for AdminProfile {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.user_id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}
