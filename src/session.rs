//! Session state: durable auth token plus in-memory role flags.
//!
//! DESIGN
//! ======
//! The session is an explicit context object handed to the auth gateway,
//! the request authorizer, and the guards — not ambient global state. The
//! [`crate::auth::AuthGateway`] is the sole writer (mutators are
//! `pub(crate)`); everything else only reads.
//!
//! The token lives in a [`TokenStore`]: one durable key-value cell under a
//! fixed key. Role flags are process-local and reset on logout or failed
//! verification; they are meaningful only while the token was last verified
//! successfully.

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

/// Durable storage for the auth token: a single key-value cell.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    /// # Errors
    /// Returns an error if the token cannot be persisted.
    fn save(&self, token: &str) -> io::Result<()>;

    /// # Errors
    /// Returns an error if removal fails for a reason other than the
    /// token already being absent.
    fn clear(&self) -> io::Result<()>;
}

/// Token store backed by a single file whose content is the raw token.
/// Survives across runs, the client-side analogue of browser local storage.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() { None } else { Some(token.to_string()) }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Ephemeral token store for tests and embedded sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    cell: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        lock_unpoisoned(&self.cell).clone()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *lock_unpoisoned(&self.cell) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *lock_unpoisoned(&self.cell) = None;
        Ok(())
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// The four farm-staff role indicators. Non-exclusive: a user may hold
/// several at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleFlags {
    pub is_farm_owner: bool,
    pub is_farm_manager: bool,
    pub is_assistant_farm_manager: bool,
    pub is_farm_worker: bool,
}

impl RoleFlags {
    #[must_use]
    pub fn any(self) -> bool {
        self.is_farm_owner || self.is_farm_manager || self.is_assistant_farm_manager || self.is_farm_worker
    }
}

/// Injected session context: token store plus role flags.
pub struct SessionContext {
    store: Box<dyn TokenStore>,
    flags: RwLock<RoleFlags>,
}

impl SessionContext {
    #[must_use]
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self { store, flags: RwLock::new(RoleFlags::default()) }
    }

    /// Session backed by an in-memory token store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryTokenStore::new()))
    }

    /// Current auth token, if one is stored. Presence denotes
    /// "authenticated" as far as the client is concerned.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Snapshot of the role flags.
    #[must_use]
    pub fn flags(&self) -> RoleFlags {
        match self.flags.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub(crate) fn store_token(&self, token: &str) -> io::Result<()> {
        self.store.save(token)
    }

    pub(crate) fn clear_token(&self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear stored auth token");
        }
    }

    pub(crate) fn set_flags(&self, flags: RoleFlags) {
        let mut guard = match self.flags.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = flags;
    }

    pub(crate) fn reset_flags(&self) {
        self.set_flags(RoleFlags::default());
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.token().is_some())
            .field("flags", &self.flags())
            .finish()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
