//! Screen flow through `App`, driven by input actions.

use brainmatch::app::{App, NOTICE_NOT_RESUMABLE};
use brainmatch::core::MatchGame;
use brainmatch::term::Screen;
use brainmatch::types::{Direction, GameStatus, InputAction, MISMATCH_DELAY_MS};

fn playing_app() -> App {
    let mut app = App::new(MatchGame::new(12345));
    app.handle(InputAction::NewGame);
    assert_eq!(app.screen(), Screen::Playing);
    app
}

/// Move the cursor onto `index` on a 4-column board.
fn move_to(app: &mut App, index: usize) {
    for _ in 0..4 {
        app.handle(InputAction::Move(Direction::Up));
        app.handle(InputAction::Move(Direction::Left));
    }
    for _ in 0..index / 4 {
        app.handle(InputAction::Move(Direction::Down));
    }
    for _ in 0..index % 4 {
        app.handle(InputAction::Move(Direction::Right));
    }
    assert_eq!(app.cursor(), index);
}

#[test]
fn starts_on_menu() {
    let app = App::new(MatchGame::new(1));
    assert_eq!(app.screen(), Screen::Menu);
    assert!(!app.rules_open());
    assert_eq!(app.notice(), None);
}

#[test]
fn flip_uses_cursor_position() {
    let mut app = playing_app();
    move_to(&mut app, 6);
    app.handle(InputAction::Flip);

    assert!(app.game().board().is_revealed(6));
    assert_eq!(app.game().selection().first(), Some(6));
}

#[test]
fn cursor_clamps_to_board() {
    let mut app = playing_app();
    for _ in 0..10 {
        app.handle(InputAction::Move(Direction::Down));
        app.handle(InputAction::Move(Direction::Right));
    }
    assert_eq!(app.cursor(), 15);
}

#[test]
fn mismatch_unflips_after_ticks() {
    let mut app = playing_app();
    let tiles = app.game().board().tiles().to_vec();
    let other = tiles
        .iter()
        .position(|t| t.symbol != tiles[0].symbol)
        .unwrap();

    move_to(&mut app, 0);
    app.handle(InputAction::Flip);
    move_to(&mut app, other);
    app.handle(InputAction::Flip);
    assert_eq!(app.game().board().revealed_count(), 2);

    let mut elapsed = 0;
    while elapsed < MISMATCH_DELAY_MS {
        app.tick(16);
        elapsed += 16;
    }
    assert_eq!(app.game().board().revealed_count(), 0);
}

#[test]
fn submit_then_restart() {
    let mut app = playing_app();
    app.handle(InputAction::Flip);
    app.handle(InputAction::Submit);
    assert_eq!(app.game().status(), GameStatus::Incomplete);

    move_to(&mut app, 5);
    app.handle(InputAction::Restart);
    assert_eq!(app.cursor(), 0);
    assert_eq!(app.screen(), Screen::Playing);
    assert_eq!(app.game().status(), GameStatus::InProgress);
    assert_eq!(app.game().board().revealed_count(), 0);
}

#[test]
fn resume_refused_shows_notice_until_next_action() {
    let mut app = App::new(MatchGame::new(1));
    app.handle(InputAction::Resume);
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.ui_view().notice, Some(NOTICE_NOT_RESUMABLE));

    app.handle(InputAction::NewGame);
    assert_eq!(app.notice(), None);
    assert_eq!(app.screen(), Screen::Playing);
}

#[test]
fn rules_toggle_does_not_touch_game() {
    let mut app = playing_app();
    let before = app.game().snapshot();

    app.handle(InputAction::ToggleRules);
    assert!(app.ui_view().rules_open);
    app.handle(InputAction::Flip);
    app.handle(InputAction::Submit);
    app.handle(InputAction::ToggleRules);
    assert!(!app.rules_open());

    assert_eq!(app.game().snapshot(), before);
}
