//! Fine-grained admin permission model.
//!
//! A permission row grants an admin five independent capabilities on one
//! named feature. The decision procedure is split into a [`gate`] on the
//! admin's standing (which never needs the permission table) and a
//! [`table_allows`] lookup over the admin's rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::Role;

// ---------------------------------------------------------------------------
// Feature names
// ---------------------------------------------------------------------------

/// Well-known permissioned feature areas. Feature matching is exact and
/// case-sensitive, so always go through these constants.
pub mod features {
    pub const VEHICLES: &str = "vehicles";
    pub const USERS: &str = "users";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    pub const SETTINGS: &str = "settings";
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// An action an admin may attempt on a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    View,
    Create,
    Edit,
    Delete,
    Approve,
}

impl PermissionAction {
    pub const ALL: [PermissionAction; 5] = [
        PermissionAction::View,
        PermissionAction::Create,
        PermissionAction::Edit,
        PermissionAction::Delete,
        PermissionAction::Approve,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionAction::View => "view",
            PermissionAction::Create => "create",
            PermissionAction::Edit => "edit",
            PermissionAction::Delete => "delete",
            PermissionAction::Approve => "approve",
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermissionAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown permission action '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

/// The five capability flags of one permission row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionFlags {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_approve: bool,
}

impl PermissionFlags {
    /// Every capability granted.
    pub const fn all() -> Self {
        Self {
            can_view: true,
            can_create: true,
            can_edit: true,
            can_delete: true,
            can_approve: true,
        }
    }

    /// The stored flag for `action`.
    pub fn allows(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::View => self.can_view,
            PermissionAction::Create => self.can_create,
            PermissionAction::Edit => self.can_edit,
            PermissionAction::Delete => self.can_delete,
            PermissionAction::Approve => self.can_approve,
        }
    }
}

// ---------------------------------------------------------------------------
// Decision procedure
// ---------------------------------------------------------------------------

/// Outcome of evaluating an admin's standing before the permission table is
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Deny without reading the permission table.
    Deny,
    /// Grant without reading the permission table.
    Grant,
    /// The permission table decides.
    ConsultTable,
}

/// Evaluate an admin's standing.
///
/// `admin` is `None` when no user with an admin role exists for the id.
/// A blocked account is denied even when it is a superadmin.
pub fn gate(admin: Option<(Role, bool)>) -> Gate {
    match admin {
        None => Gate::Deny,
        Some((_, true)) => Gate::Deny,
        Some((Role::Superadmin, false)) => Gate::Grant,
        Some((Role::Admin, false)) => Gate::ConsultTable,
        Some((Role::User, false)) => Gate::Deny,
    }
}

/// Look up `feature` among an admin's rows and return the flag for
/// `action`. Missing row means no permission.
pub fn table_allows<'a, I>(rows: I, feature: &str, action: PermissionAction) -> bool
where
    I: IntoIterator<Item = (&'a str, PermissionFlags)>,
{
    rows.into_iter()
        .find(|(row_feature, _)| *row_feature == feature)
        .is_some_and(|(_, flags)| flags.allows(action))
}
