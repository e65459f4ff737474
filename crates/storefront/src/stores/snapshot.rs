//! Durable session snapshot storage.
//!
//! The session store writes a small `{id, email, username}` record on every
//! successful auth mutation and reads it once at startup, so reloading the
//! application restores the active session without re-authentication.
//! Writes are fire-and-forget: failures are logged, never propagated.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::models::CurrentUser;

/// Key-value persistence for the session snapshot.
///
/// The browser original keeps this in local storage; here the same contract
/// is a trait so tests can run in memory and a future real backend can
/// satisfy it without touching the session store.
pub trait SnapshotStore: Send + Sync {
    /// Read the persisted snapshot. `None` means "logged out".
    fn load(&self) -> Option<CurrentUser>;

    /// Persist the snapshot, replacing any previous one.
    fn save(&self, user: &CurrentUser);

    /// Remove the persisted snapshot.
    fn clear(&self);
}

/// In-memory snapshot store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<CurrentUser>>,
}

impl MemorySnapshotStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Option<CurrentUser> {
        self.slot
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn save(&self, user: &CurrentUser) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(user.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = None;
        }
    }
}

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Option<CurrentUser> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read session snapshot {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt session snapshot {}: {e}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn save(&self, user: &CurrentUser) {
        let json = match serde_json::to_string_pretty(user) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize session snapshot: {e}");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!(
                "Failed to write session snapshot {}: {e}",
                self.path.display()
            );
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to remove session snapshot {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}
