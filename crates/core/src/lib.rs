//! Domain types and pure decision logic shared by the Motorhub crates.
//!
//! This crate has no internal dependencies so the server, the database
//! layer, and the admin client can all build on it.

pub mod error;
pub mod feature_settings;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod types;
