//! Terminal BrainMatch runner.
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use brainmatch::app::App;
use brainmatch::config::GameConfig;
use brainmatch::core::GameSnapshot;
use brainmatch::input::{handle_key_event, should_quit};
use brainmatch::logging::setup_logging;
use brainmatch::term::{
    frame_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use brainmatch::types::TICK_MS;

/// Redraw an unchanged screen at most this often.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let _logger = setup_logging(config.log_dir.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("terminated: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut app = App::new(config.build_game());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let started_at = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        app.snapshot_into(&mut snap);
        let ui = app.ui_view();
        let now_ms = started_at.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame_fingerprint(&snap, &ui), true) {
            view.render_into(&snap, &ui, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
