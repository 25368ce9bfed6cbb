//! Session persistence across client restarts.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

use dinebook_core::Session;

/// Durable slot for the last committed session value.
///
/// Implementations must treat `store(None)` as "remember that the user is
/// signed out", not as "forget the slot" — a restart after logout must come
/// back as `None`, not as whatever was persisted before.
pub trait SessionPersistence {
    fn load(&self) -> anyhow::Result<Option<Session>>;
    fn store(&self, session: Option<&Session>) -> anyhow::Result<()>;
}

/// JSON-file-backed persistence (one small file, overwritten on each commit).
#[derive(Debug)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionPersistence for JsonFilePersistence {
    fn load(&self) -> anyhow::Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session file at {:?}", self.path))?;
        let session = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse session file at {:?}", self.path))?;
        Ok(session)
    }

    fn store(&self, session: Option<&Session>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create session directory at {parent:?}"))?;
        }
        let raw = serde_json::to_string(&session).context("failed to serialize session")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write session file at {:?}", self.path))?;
        Ok(())
    }
}

/// In-memory persistence for tests and ephemeral contexts.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    slot: Mutex<Option<Session>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> anyhow::Result<Option<Session>> {
        Ok(self.slot.lock().expect("session slot poisoned").clone())
    }

    fn store(&self, session: Option<&Session>) -> anyhow::Result<()> {
        *self.slot.lock().expect("session slot poisoned") = session.cloned();
        Ok(())
    }
}
