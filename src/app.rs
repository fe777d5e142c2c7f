//! Screen-level state on top of [`MatchGame`].
//!
//! `App` turns [`InputAction`]s into game commands and keeps the bits the
//! game does not care about: which screen is up, the tile cursor and the
//! rules overlay.

use crate::core::{GameError, GameSnapshot, MatchGame};
use crate::input::GridCursor;
use crate::term::{Screen, UiView};
use crate::types::{CommandOutcome, GameCommand, InputAction, BOARD_COLUMNS};

pub const NOTICE_NOT_RESUMABLE: &str = "No finished game to resume yet.";

#[derive(Debug)]
pub struct App {
    game: MatchGame,
    screen: Screen,
    cursor: GridCursor,
    rules_open: bool,
    notice: Option<&'static str>,
}

impl App {
    pub fn new(game: MatchGame) -> Self {
        Self {
            game,
            screen: Screen::Menu,
            cursor: GridCursor::new(BOARD_COLUMNS),
            rules_open: false,
            notice: None,
        }
    }

    pub fn game(&self) -> &MatchGame {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn rules_open(&self) -> bool {
        self.rules_open
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn ui_view(&self) -> UiView {
        UiView {
            screen: self.screen,
            cursor: self.cursor.index(),
            rules_open: self.rules_open,
            notice: self.notice,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Advance game timers.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(token) = self.game.tick(elapsed_ms) {
            log::trace!("unflipped {} and {}", token.first, token.second);
        }
    }

    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::ToggleRules => {
                self.rules_open = !self.rules_open;
                return;
            }
            InputAction::CloseRules => {
                self.rules_open = false;
                return;
            }
            // The overlay swallows everything else.
            _ if self.rules_open => return,
            _ => {}
        }

        self.notice = None;

        match (self.screen, action) {
            (_, InputAction::NewGame) => {
                if self.dispatch(GameCommand::NewGame).is_some() {
                    self.enter_board();
                }
            }
            (_, InputAction::Resume) => {
                if self.dispatch(GameCommand::Resume).is_some() {
                    self.enter_board();
                }
            }
            (Screen::Playing, InputAction::Move(direction)) => {
                self.cursor.step(direction, self.game.board().len());
            }
            (Screen::Playing, InputAction::Flip) => {
                self.dispatch(GameCommand::Flip(self.cursor.index()));
            }
            (Screen::Playing, InputAction::Submit) => {
                self.dispatch(GameCommand::Submit);
            }
            (Screen::Playing, InputAction::Restart) => {
                if self.dispatch(GameCommand::Restart).is_some() {
                    self.cursor.reset();
                }
            }
            (Screen::Menu, _) => {}
            (Screen::Playing, InputAction::ToggleRules | InputAction::CloseRules) => {}
        }
    }

    fn enter_board(&mut self) {
        self.screen = Screen::Playing;
        self.cursor.reset();
    }

    fn dispatch(&mut self, command: GameCommand) -> Option<CommandOutcome> {
        match self.game.apply(command) {
            Ok(outcome) => Some(outcome),
            Err(GameError::NotResumable) => {
                self.notice = Some(NOTICE_NOT_RESUMABLE);
                None
            }
            Err(err) => {
                log::warn!("command {command} rejected: {err}");
                None
            }
        }
    }
}
