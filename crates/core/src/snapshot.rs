use serde::Serialize;

use crate::types::{GameStatus, Symbol};

/// Render-facing view of one tile.
///
/// `symbol` is `None` while the tile is face-down so a presentation layer
/// cannot leak hidden faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    pub index: usize,
    pub symbol: Option<Symbol>,
    pub revealed: bool,
    /// Revealed as part of a found pair (not a pending pick).
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub started: bool,
    pub submitted: bool,
    pub ended: bool,
    pub resumable: bool,
    pub status: GameStatus,
    pub episode_id: u32,
    pub seed: u64,
    /// Countdown of an outstanding mismatch unflip.
    pub unflip_remaining_ms: Option<u32>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.matched_pairs = 0;
        self.total_pairs = 0;
        self.started = false;
        self.submitted = false;
        self.ended = false;
        self.resumable = false;
        self.status = GameStatus::NotStarted;
        self.episode_id = 0;
        self.seed = 0;
        self.unflip_remaining_ms = None;
    }

    /// Whether a flip could currently be accepted somewhere on the board.
    pub fn playable(&self) -> bool {
        self.started && !self.ended && !self.submitted && self.unflip_remaining_ms.is_none()
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}
