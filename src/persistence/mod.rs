//! Leaderboard storage backends
//!
//! String key/value semantics, the shape browser LocalStorage offers: a
//! store holds at most one JSON payload under a fixed identifier. Reads
//! distinguish "nothing saved yet" from a genuine failure; writes report
//! failure so the caller can keep the data in memory and retry.

use thiserror::Error;

/// Identifier the serialized leaderboard is stored under
pub const SCORES_KEY: &str = "catchfall.highscores";

/// Storage failure surfaced to callers
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read
    #[error("failed to read scores: {0}")]
    Read(String),
    /// The backing store could not be written
    #[error("failed to write scores: {0}")]
    Write(String),
    /// The in-memory board could not be encoded
    #[error("failed to encode scores: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A place the serialized leaderboard can live
pub trait ScoreStore {
    /// Fetch the stored payload; `Ok(None)` when nothing was saved yet
    fn read(&self) -> Result<Option<String>, StoreError>;
    /// Replace the stored payload
    fn write(&self, payload: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: std::cell::RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        *self.payload.borrow_mut() = Some(payload.to_owned());
        Ok(())
    }
}

/// JSON file store for native builds
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for FileStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read(err.to_string())),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        // Write a sibling tmp file first so a crash mid-write can't
        // truncate the real one, then swap it into place.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, payload).map_err(|e| StoreError::Write(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug)]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// Store under the default [`SCORES_KEY`]
    pub fn new() -> Self {
        Self::with_key(SCORES_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        let storage =
            Self::storage().ok_or_else(|| StoreError::Read("localStorage unavailable".into()))?;
        storage
            .get_item(&self.key)
            .map_err(|_| StoreError::Read("localStorage get_item failed".into()))
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        let storage =
            Self::storage().ok_or_else(|| StoreError::Write("localStorage unavailable".into()))?;
        storage
            .set_item(&self.key, payload)
            .map_err(|_| StoreError::Write("localStorage set_item failed".into()))
    }
}
