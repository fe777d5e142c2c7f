//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::core::{BoardRng, JsonFileStore, MatchGame, MemoryStore, ResumeStore};
use crate::types::MISMATCH_DELAY_MS;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed shuffle seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub mismatch_delay_ms: u32,
    /// JSON file holding the resumable flag; `None` keeps it in memory.
    pub state_path: Option<PathBuf>,
    /// Log file directory; `None` disables logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            state_path: None,
            log_dir: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("BRAINMATCH_SEED").and_then(|s| s.parse().ok());

        let mismatch_delay_ms = non_empty("BRAINMATCH_MISMATCH_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(MISMATCH_DELAY_MS);

        let state_path = non_empty("BRAINMATCH_STATE_PATH").map(PathBuf::from);
        let log_dir = non_empty("BRAINMATCH_LOG_DIR").map(PathBuf::from);

        Self {
            seed,
            mismatch_delay_ms,
            state_path,
            log_dir,
        }
    }

    pub fn build_store(&self) -> Box<dyn ResumeStore> {
        match &self.state_path {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        }
    }

    /// Construct a game from this configuration.
    pub fn build_game(&self) -> MatchGame {
        let seed = self
            .seed
            .unwrap_or_else(|| BoardRng::from_entropy().seed());
        log::info!("starting with seed {seed}");
        MatchGame::with_store(seed, self.build_store())
            .with_mismatch_delay_ms(self.mismatch_delay_ms)
    }
}
