//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the `Deserialize` DTOs used for inserts and upserts. Integer
//! 0/1 flag columns are converted to `bool` in the `SELECT` list, so the
//! structs only ever see logical booleans.

pub mod admin_permission;
pub mod feature_settings;
pub mod user;
