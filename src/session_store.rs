//! Durable session persistence.
//!
//! The portal survives restarts through three values: the bearer token, the
//! account's user type, and which portal entrance staff used. A missing
//! token is definitive proof of an anonymous session — the stored user/login
//! types are hints only and are re-validated against the profile endpoint
//! on startup.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::enums::{LoginType, UserType};

// ═══════════════════════════════════════════════════════════
// StoredSession — what survives a restart
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user_type: Option<UserType>,
    pub login_type: Option<LoginType>,
}

impl StoredSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.token.is_none()
    }
}

/// Errors from persisting a session.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Cannot write session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// SessionStore — the persistence seam
// ═══════════════════════════════════════════════════════════

/// Where `{token, user_type, login_type}` live between runs.
///
/// `load` never fails: an unreadable or corrupt store reads as anonymous.
/// `clear` is idempotent.
pub trait SessionStore {
    fn load(&self) -> StoredSession;
    fn save(&self, session: &StoredSession) -> Result<(), StoreError>;
    fn clear(&self);
}

// ═══════════════════════════════════════════════════════════
// FileSessionStore — JSON file under the app data directory
// ═══════════════════════════════════════════════════════════

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the configured default location (`~/Carelink/session.json`).
    pub fn from_config() -> Self {
        Self::new(crate::config::session_file_path())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> StoredSession {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return StoredSession::anonymous();
        };
        match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt session file, treating as anonymous");
                StoredSession::anonymous()
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove session file");
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════
// MemorySessionStore — tests and embedded hosts
// ═══════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<StoredSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-populated, as if a previous run had saved this session.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> StoredSession {
        self.session
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|_| StoredSession::anonymous())
    }

    fn save(&self, session: &StoredSession) -> Result<(), StoreError> {
        if let Ok(mut slot) = self.session.lock() {
            *slot = session.clone();
        }
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = StoredSession::anonymous();
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
