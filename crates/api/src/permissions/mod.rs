//! Server-side admin permission resolution.
//!
//! - [`store`] -- Where admin standing and permission rows are read from.
//! - [`resolver`] -- The check/require decision procedure.

pub mod resolver;
pub mod store;

pub use resolver::{PermissionError, PermissionResolver};
pub use store::{MemoryPermissionStore, PermissionStore, PgPermissionStore, StoreError};
