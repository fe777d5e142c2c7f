//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core state machine, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! The default deck holds 8 pairs (16 tiles) laid out in a 4-column grid.
//! Any even-sized deck where every symbol appears exactly twice is valid; the
//! presentation layer wraps rows at [`BOARD_COLUMNS`].
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1000 | Time a mismatched pair stays visible |
//!
//! # Examples
//!
//! ```
//! use brainmatch_types::{GameCommand, Symbol, FlipResult};
//!
//! let a = Symbol::from("🧠");
//! assert_eq!(a, Symbol::new("🧠"));
//!
//! assert_eq!(GameCommand::from_str("flip:3"), Some(GameCommand::Flip(3)));
//! assert_eq!(GameCommand::from_str("submit"), Some(GameCommand::Submit));
//!
//! assert!(FlipResult::SecondFlip { matched: true }.accepted());
//! assert!(!FlipResult::Ignored.accepted());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays face-up before it is hidden again.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Number of tile columns in the presentation grid.
pub const BOARD_COLUMNS: u16 = 4;

/// Symbols of the default deck. Each one is dealt twice.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🧠", "💡", "🔒", "🔋", "📱", "🍎", "🌟", "🚀"];

/// Game title shown on every screen.
pub const GAME_TITLE: &str = "BrainMatch Game";

/// Rules shown in the rules overlay.
pub const RULES: [&str; 5] = [
    "1. Match pairs of identical cards by flipping them over.",
    "2. You can only flip two cards at a time.",
    "3. If the cards match, they stay flipped; otherwise, they will flip back.",
    "4. Your goal is to match all pairs before the game ends.",
    "5. The game ends when all pairs are matched successfully.",
];

/// Face value of a tile.
///
/// Symbols are opaque: the game only ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a flip request.
///
/// `Ignored` is a defined no-op, not an error: the tile was already face-up,
/// the round is over or frozen, or a pair is still waiting to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlipResult {
    Ignored,
    /// First tile of a pair revealed.
    FirstFlip,
    /// Second tile revealed and the pair evaluated.
    SecondFlip { matched: bool },
}

impl FlipResult {
    /// Whether the flip changed the board.
    pub fn accepted(&self) -> bool {
        !matches!(self, FlipResult::Ignored)
    }
}

/// Lifecycle of a round, derived from the game flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    /// Every pair was found.
    Won,
    /// Submitted before every pair was found.
    Incomplete,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "notStarted",
            GameStatus::InProgress => "inProgress",
            GameStatus::Won => "won",
            GameStatus::Incomplete => "incomplete",
        }
    }

    /// Result line shown once the round is submitted.
    pub fn headline(&self) -> &'static str {
        match self {
            GameStatus::Won => "You Won!",
            GameStatus::Incomplete => "Game not yet finished!",
            GameStatus::InProgress => "Find all the pairs",
            GameStatus::NotStarted => "Start a new game",
        }
    }
}

/// Commands a presentation layer can send to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Deal a freshly shuffled board and clear the saved completion.
    NewGame,
    /// Reshuffle and continue after a completed game.
    Resume,
    /// Reveal the tile at the given board index.
    Flip(usize),
    /// Freeze the board and report the result.
    Submit,
    /// Reshuffle the current round without touching the saved completion.
    Restart,
}

impl GameCommand {
    /// Parse a command from its text form.
    ///
    /// Flips are written `flip:<index>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brainmatch_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("newGame"), Some(GameCommand::NewGame));
    /// assert_eq!(GameCommand::from_str("RESTART"), Some(GameCommand::Restart));
    /// assert_eq!(GameCommand::from_str("flip:0"), Some(GameCommand::Flip(0)));
    /// assert_eq!(GameCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if let Some(index) = lower.strip_prefix("flip:") {
            return index.parse().ok().map(GameCommand::Flip);
        }
        match lower.as_str() {
            "newgame" => Some(GameCommand::NewGame),
            "resume" => Some(GameCommand::Resume),
            "submit" => Some(GameCommand::Submit),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }
}

impl fmt::Display for GameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameCommand::NewGame => f.write_str("newGame"),
            GameCommand::Resume => f.write_str("resume"),
            GameCommand::Flip(index) => write!(f, "flip:{index}"),
            GameCommand::Submit => f.write_str("submit"),
            GameCommand::Restart => f.write_str("restart"),
        }
    }
}

/// Result of routing a [`GameCommand`] through the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Flip(FlipResult),
}

/// Cursor movement on the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// User intents produced by the input layer.
///
/// These are a superset of [`GameCommand`]: cursor movement and the rules
/// overlay only affect the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Move(Direction),
    /// Flip the tile under the cursor.
    Flip,
    Submit,
    NewGame,
    Resume,
    Restart,
    ToggleRules,
    CloseRules,
}
