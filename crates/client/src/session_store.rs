//! Persistence for the admin session token.
//!
//! The token lives under the [`ADMIN_TOKEN_KEY`] key. [`FileSessionStore`]
//! keeps it in a small JSON object on disk alongside any other keys already
//! there; [`MemorySessionStore`] keeps it for the life of the process.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use motorhub_core::session::ADMIN_TOKEN_KEY;
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Where the admin token is kept between runs.
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    fn get(&self) -> Result<Option<String>, ClientError>;

    /// Store `token`, replacing any previous one.
    fn set(&self, token: &str) -> Result<(), ClientError>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn remove(&self) -> Result<(), ClientError>;
}

/// Token held in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<String>, ClientError> {
        Ok(self.slot().clone())
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), ClientError> {
        *self.slot() = None;
        Ok(())
    }
}

/// Token persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, ClientError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to write back, and whether the file held something other
    /// than a JSON object. Such a file is replaced on the next save.
    fn load_for_write(&self) -> Result<(Map<String, Value>, bool), ClientError> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(ClientError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Replacing unreadable session file");
                Ok((Map::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .load()?
            .get(ADMIN_TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(ADMIN_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.save(&entries)
    }

    fn remove(&self) -> Result<(), ClientError> {
        let (mut entries, unreadable) = self.load_for_write()?;
        if entries.remove(ADMIN_TOKEN_KEY).is_some() || unreadable {
            self.save(&entries)?;
        }
        Ok(())
    }
}
