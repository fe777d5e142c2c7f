//! Persistence boundary for the resumable flag.
//!
//! The game only needs to remember whether a completed game exists and which
//! deck it used. Where that lives is up to the host: [`MemoryStore`] keeps it
//! for the life of the process, [`JsonFileStore`] writes a small JSON file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::Symbol;

/// Everything that survives between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub resumable: bool,
    #[serde(default)]
    pub deck: Vec<Symbol>,
}

/// Storage collaborator injected into [`crate::MatchGame`].
pub trait ResumeStore: fmt::Debug + Send {
    /// `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<SavedGame>, StoreError>;

    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError>;
}

/// Process-local store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<SavedGame>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(saved: SavedGame) -> Self {
        Self { saved: Some(saved) }
    }
}

impl ResumeStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError> {
        self.saved = Some(saved.clone());
        Ok(())
    }
}

/// Stores [`SavedGame`] as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResumeStore for JsonFileStore {
    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write-then-rename so a crash never leaves a truncated file behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(saved)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
