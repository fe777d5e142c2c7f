//! Error types for the game core.

use std::io;

use thiserror::Error;

use crate::types::Symbol;

/// Errors reported by [`crate::MatchGame`] commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `resume` was called without a completed game to continue.
    #[error("no completed game to resume")]
    NotResumable,
    /// A flip targeted a position outside the board.
    #[error("tile index {index} is out of bounds for a board of {len} tiles")]
    InvalidIndex { index: usize, len: usize },
}

/// Reasons a symbol sequence cannot be used as a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
    #[error("deck has an odd number of tiles ({0})")]
    OddLength(usize),
    #[error("symbol {symbol} appears {count} times, expected exactly 2")]
    Unpaired { symbol: Symbol, count: usize },
}

/// Failures of a [`crate::store::ResumeStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("state file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
