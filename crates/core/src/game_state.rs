//! Game state module - the match game state machine
//!
//! This module ties together the deck, board, selection, deferred unflip and
//! persistence. It handles dealing, flipping, pair evaluation, completion,
//! submission and the round lifecycle.

use crate::board::Board;
use crate::deck::Deck;
use crate::error::GameError;
use crate::rng::BoardRng;
use crate::selection::Selection;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::store::{MemoryStore, ResumeStore, SavedGame};
use crate::timer::{DeferredUnflip, UnflipToken};
use crate::types::*;

/// Complete game state
#[derive(Debug)]
pub struct MatchGame {
    /// Deck of the current (or last completed) game.
    deck: Option<Deck>,
    board: Board,
    selection: Selection,
    matched_pairs: usize,
    submitted: bool,
    /// All pairs found.
    ended: bool,
    started: bool,
    /// A completed game exists that `resume` can continue from.
    resumable: bool,
    /// Board generation (increments whenever the board is replaced).
    episode_id: u32,
    pending_unflip: Option<DeferredUnflip>,
    mismatch_delay_ms: u32,
    rng: BoardRng,
    store: Box<dyn ResumeStore>,
}

impl MatchGame {
    /// Create a new game with the given RNG seed and an in-memory store
    pub fn new(seed: u64) -> Self {
        Self::with_store(seed, Box::new(MemoryStore::new()))
    }

    /// Create a new game backed by `store`.
    ///
    /// A previously saved completion (flag and deck) is restored so `resume`
    /// is available straight away. Unreadable or invalid saved state is
    /// logged and treated as "nothing saved".
    pub fn with_store(seed: u64, store: Box<dyn ResumeStore>) -> Self {
        let mut game = Self {
            deck: None,
            board: Board::empty(),
            selection: Selection::new(),
            matched_pairs: 0,
            submitted: false,
            ended: false,
            started: false,
            resumable: false,
            episode_id: 0,
            pending_unflip: None,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            rng: BoardRng::new(seed),
            store,
        };
        game.restore_saved();
        game
    }

    /// Override how long a mismatched pair stays face-up.
    pub fn with_mismatch_delay_ms(mut self, delay_ms: u32) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    fn restore_saved(&mut self) {
        let saved = match self.store.load() {
            Ok(Some(saved)) => saved,
            Ok(None) => return,
            Err(err) => {
                log::warn!("could not load saved game state: {err}");
                return;
            }
        };

        if saved.deck.is_empty() {
            // A bare flag without a deck cannot be resumed.
            return;
        }

        match Deck::new(saved.deck) {
            Ok(deck) => {
                self.deck = Some(deck);
                self.resumable = saved.resumable;
                log::debug!("restored saved game state (resumable={})", self.resumable);
            }
            Err(err) => log::warn!("ignoring saved deck: {err}"),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn is_resumable(&self) -> bool {
        self.resumable
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.board.len() / 2
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn mismatch_delay_ms(&self) -> u32 {
        self.mismatch_delay_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn store(&self) -> &dyn ResumeStore {
        self.store.as_ref()
    }

    /// All pairs found and the round is over.
    pub fn is_won(&self) -> bool {
        self.ended && self.all_pairs_matched()
    }

    pub fn status(&self) -> GameStatus {
        if !self.started {
            GameStatus::NotStarted
        } else if self.is_won() {
            GameStatus::Won
        } else if self.submitted {
            GameStatus::Incomplete
        } else {
            GameStatus::InProgress
        }
    }

    /// Outstanding mismatch unflip, for hosts that drive their own timer.
    pub fn pending_unflip(&self) -> Option<UnflipToken> {
        self.pending_unflip.map(|p| p.token())
    }

    pub fn unflip_remaining_ms(&self) -> Option<u32> {
        self.pending_unflip.map(|p| p.remaining_ms())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.tiles.extend(self.board.tiles().iter().map(|tile| TileSnapshot {
            index: tile.index,
            symbol: tile.revealed.then(|| tile.symbol.clone()),
            revealed: tile.revealed,
            matched: tile.revealed && !self.selection.contains(tile.index),
        }));
        out.matched_pairs = self.matched_pairs;
        out.total_pairs = self.total_pairs();
        out.started = self.started;
        out.submitted = self.submitted;
        out.ended = self.ended;
        out.resumable = self.resumable;
        out.status = self.status();
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
        out.unflip_remaining_ms = self.unflip_remaining_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Deal `deck` into a fresh board and start playing.
    ///
    /// Clears any saved completion: the new game has to be finished before it
    /// can be resumed.
    pub fn new_game(&mut self, deck: Deck) {
        log::debug!("new game with {} pairs", deck.total_pairs());
        self.deck = Some(deck);
        self.deal();
        self.started = true;
        self.set_resumable(false);
    }

    /// Continue after a completed game by dealing a fresh board from its deck.
    ///
    /// Fails without touching any state when no completed game is saved.
    pub fn resume(&mut self) -> Result<(), GameError> {
        if !self.resumable || self.deck.is_none() {
            log::debug!("resume rejected: nothing to resume");
            return Err(GameError::NotResumable);
        }
        self.deal();
        self.started = true;
        log::debug!("resumed episode {}", self.episode_id);
        Ok(())
    }

    /// Reveal the tile at `index`.
    ///
    /// Returns `Ignored` without changing anything when the tile is already
    /// face-up, the round has ended or been submitted, or two tiles are still
    /// waiting to be resolved.
    pub fn flip(&mut self, index: usize) -> Result<FlipResult, GameError> {
        let len = self.board.len();
        if index >= len {
            return Err(GameError::InvalidIndex { index, len });
        }

        if !self.started
            || self.ended
            || self.submitted
            || self.selection.is_full()
            || self.board.is_revealed(index)
        {
            return Ok(FlipResult::Ignored);
        }

        self.board.reveal(index);

        let Some(first) = self.selection.first() else {
            self.selection.push(index);
            return Ok(FlipResult::FirstFlip);
        };

        self.selection.push(index);
        let matched = self.check_for_match(first, index);
        Ok(FlipResult::SecondFlip { matched })
    }

    /// Evaluate the pending pair. Matches resolve immediately; mismatches are
    /// hidden again once the mismatch delay has elapsed.
    fn check_for_match(&mut self, first: usize, second: usize) -> bool {
        if self.board.same_symbol(first, second) {
            self.matched_pairs += 1;
            self.selection.clear();
            self.check_game_over();
            return true;
        }

        let token = UnflipToken {
            first,
            second,
            generation: self.episode_id,
        };
        self.pending_unflip = Some(DeferredUnflip::new(token, self.mismatch_delay_ms));
        false
    }

    fn all_pairs_matched(&self) -> bool {
        self.total_pairs() > 0 && self.matched_pairs == self.total_pairs()
    }

    /// Natural completion: every pair found by flipping.
    fn check_game_over(&mut self) {
        if !self.all_pairs_matched() {
            return;
        }
        self.ended = true;
        log::info!(
            "all {} pairs matched (episode {})",
            self.matched_pairs,
            self.episode_id
        );
        self.set_resumable(true);
    }

    /// Freeze the board and settle the result.
    ///
    /// Idempotent. An early submit never marks the game resumable.
    pub fn submit(&mut self) {
        if self.submitted {
            return;
        }
        self.submitted = true;
        self.ended = self.all_pairs_matched();
        log::debug!(
            "submitted with {}/{} pairs ({})",
            self.matched_pairs,
            self.total_pairs(),
            self.status().as_str()
        );
    }

    /// Reshuffle and replay the current deck.
    ///
    /// Leaves `started` and the saved completion untouched. Does nothing
    /// before the first deal.
    pub fn restart(&mut self) {
        if self.deck.is_none() {
            log::debug!("restart ignored: no deck dealt yet");
            return;
        }
        self.deal();
        log::debug!("restarted as episode {}", self.episode_id);
    }

    /// Advance the mismatch timer.
    ///
    /// Returns the token of the unflip that fired during this tick, if any.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<UnflipToken> {
        let due = self.pending_unflip.as_mut()?.advance(elapsed_ms);
        if !due {
            return None;
        }
        let token = self.pending_unflip.take()?.token();
        self.apply_unflip(token);
        Some(token)
    }

    /// Fire the outstanding unflip identified by `token` right away.
    ///
    /// Returns false (and does nothing) for a token that already fired or
    /// belongs to a board that has since been replaced.
    pub fn fire_unflip(&mut self, token: UnflipToken) -> bool {
        match self.pending_unflip {
            Some(pending) if pending.token() == token => {
                self.pending_unflip = None;
                self.apply_unflip(token);
                true
            }
            _ => {
                log::debug!("discarding stale unflip {token:?}");
                false
            }
        }
    }

    fn apply_unflip(&mut self, token: UnflipToken) {
        debug_assert_eq!(token.generation, self.episode_id);
        self.board.hide(token.first);
        self.board.hide(token.second);
        self.selection.clear();
    }

    /// Apply an inbound command.
    ///
    /// `NewGame` redeals the current deck (the standard deck before the first
    /// game).
    pub fn apply(&mut self, command: GameCommand) -> Result<CommandOutcome, GameError> {
        match command {
            GameCommand::NewGame => {
                let deck = self.deck.clone().unwrap_or_default();
                self.new_game(deck);
                Ok(CommandOutcome::Applied)
            }
            GameCommand::Resume => self.resume().map(|()| CommandOutcome::Applied),
            GameCommand::Flip(index) => self.flip(index).map(CommandOutcome::Flip),
            GameCommand::Submit => {
                self.submit();
                Ok(CommandOutcome::Applied)
            }
            GameCommand::Restart => {
                self.restart();
                Ok(CommandOutcome::Applied)
            }
        }
    }

    /// Replace the board with a fresh deal and reset the round.
    ///
    /// Bumps the generation so an outstanding unflip from the old board is
    /// dropped and its token becomes stale.
    fn deal(&mut self) {
        let Some(deck) = self.deck.as_ref() else {
            return;
        };
        self.board = Board::shuffled(deck, &mut self.rng);
        self.episode_id = self.episode_id.wrapping_add(1);
        if let Some(pending) = self.pending_unflip.take() {
            log::debug!("cancelled pending unflip {:?}", pending.token());
        }
        self.selection.clear();
        self.matched_pairs = 0;
        self.submitted = false;
        self.ended = false;
    }

    fn set_resumable(&mut self, resumable: bool) {
        self.resumable = resumable;
        let saved = SavedGame {
            resumable,
            deck: self
                .deck
                .as_ref()
                .map(|d| d.symbols().to_vec())
                .unwrap_or_default(),
        };
        if let Err(err) = self.store.save(&saved) {
            log::warn!("could not persist game state: {err}");
        }
    }
}

impl Default for MatchGame {
    fn default() -> Self {
        Self::new(1)
    }
}
