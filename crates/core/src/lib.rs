//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the match game rules, state management and the
//! deferred mismatch timer. It has **no dependencies** on UI or terminal I/O,
//! making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run behind any presentation layer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: validated multiset of paired symbols
//! - [`board`]: shuffled tiles currently in play
//! - [`selection`]: the (at most two) tiles waiting to be compared
//! - [`game_state`]: the [`MatchGame`] state machine
//! - [`timer`]: deferred unflip of mismatched pairs
//! - [`rng`]: seeded Fisher-Yates shuffling
//! - [`snapshot`]: render-facing copy of the game state
//! - [`store`]: persistence boundary for the resumable flag
//!
//! # Game Rules
//!
//! - Every symbol appears exactly twice; boards are uniform random permutations
//! - Two tiles are revealed at a time; a third flip is ignored until the pair resolves
//! - A matching pair stays face-up for the rest of the round
//! - A mismatched pair stays face-up for 1000ms, then both tiles are hidden again
//! - Finding every pair ends the round and makes the game resumable
//! - Submitting freezes the board; early submits report the round as incomplete
//!
//! # Example
//!
//! ```
//! use brainmatch_core::{Deck, MatchGame};
//! use brainmatch_types::{FlipResult, GameStatus};
//!
//! let mut game = MatchGame::new(12345);
//! game.new_game(Deck::standard());
//!
//! assert_eq!(game.flip(0), Ok(FlipResult::FirstFlip));
//! assert_eq!(game.flip(0), Ok(FlipResult::Ignored));
//!
//! game.submit();
//! assert_eq!(game.status(), GameStatus::Incomplete);
//! ```
//!
//! # Timing
//!
//! Call [`MatchGame::tick`](game_state::MatchGame::tick) every frame with the
//! elapsed time; a pending mismatch is hidden once the delay has elapsed.
//! Hosts with their own timers can use
//! [`MatchGame::fire_unflip`](game_state::MatchGame::fire_unflip) instead.

pub mod board;
pub mod deck;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod selection;
pub mod snapshot;
pub mod store;
pub mod timer;

pub use brainmatch_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use deck::Deck;
pub use error::{DeckError, GameError, StoreError};
pub use game_state::MatchGame;
pub use rng::BoardRng;
pub use selection::Selection;
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use store::{JsonFileStore, MemoryStore, ResumeStore, SavedGame};
pub use timer::{DeferredUnflip, UnflipToken};
