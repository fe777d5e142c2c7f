//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{display_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_COLUMNS, GAME_TITLE, RULES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Which screen the presentation layer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Start screen with new game / resume / rules.
    #[default]
    Menu,
    Playing,
}

/// Presentation state that is not part of the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UiView {
    pub screen: Screen,
    /// Board index under the cursor.
    pub cursor: usize,
    pub rules_open: bool,
    /// One-line message, e.g. why a command was refused.
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const TILE_HIDDEN: &str = "?";

/// A lightweight terminal renderer for the match game.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    columns: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            tile_w: 6,
            tile_h: 3,
            columns: BOARD_COLUMNS,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(3),
            tile_h: tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        ui: &UiView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        match ui.screen {
            Screen::Menu => self.draw_menu(fb, snap, ui, viewport),
            Screen::Playing if snap.submitted => self.draw_result(fb, snap, ui, viewport),
            Screen::Playing => self.draw_board(fb, snap, ui, viewport),
        }

        if ui.rules_open {
            self.draw_rules(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, ui: &UiView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn start_y(&self, viewport: Viewport, content_h: u16) -> u16 {
        match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        }
    }

    fn grid_size(&self, tile_count: usize) -> (u16, u16) {
        let cols = self.columns.min(tile_count.max(1) as u16);
        let rows = tile_count.div_ceil(self.columns as usize) as u16;
        let w = cols * self.tile_w + cols.saturating_sub(1);
        let h = rows * self.tile_h + rows.saturating_sub(1);
        (w, h)
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ui: &UiView, viewport: Viewport) {
        let mut y = self.start_y(viewport, 10);
        let w = viewport.width;

        put_centered(fb, w, y, GAME_TITLE, title_style());
        y = y.saturating_add(2);
        put_centered(
            fb,
            w,
            y,
            "Start a new game or resume the previous one?",
            text_style(),
        );
        y = y.saturating_add(2);
        put_centered(fb, w, y, "[N] Start New Game", action_style(true));
        y = y.saturating_add(1);
        put_centered(fb, w, y, "[C] Resume Game", action_style(snap.resumable));
        y = y.saturating_add(1);
        put_centered(fb, w, y, "[?] Game Rules", action_style(true));
        y = y.saturating_add(1);
        put_centered(fb, w, y, "[Q] Quit", action_style(true));
        y = y.saturating_add(2);

        if let Some(notice) = ui.notice {
            put_centered(fb, w, y, notice, notice_style());
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ui: &UiView, viewport: Viewport) {
        let (grid_w, grid_h) = self.grid_size(snap.tiles.len());
        let mut y = self.start_y(viewport, grid_h + 7);
        let w = viewport.width;

        put_centered(fb, w, y, GAME_TITLE, title_style());
        y = y.saturating_add(2);
        self.draw_matched_line(fb, snap, w, y);
        y = y.saturating_add(2);

        let grid_x = w.saturating_sub(grid_w) / 2;
        let live = snap.playable();
        for tile in &snap.tiles {
            let col = (tile.index % self.columns as usize) as u16;
            let row = (tile.index / self.columns as usize) as u16;
            let tx = grid_x + col * (self.tile_w + 1);
            let ty = y + row * (self.tile_h + 1);
            self.draw_tile(fb, tx, ty, tile, tile.index == ui.cursor, live);
        }
        y = y.saturating_add(grid_h).saturating_add(1);

        put_centered(
            fb,
            w,
            y,
            "[Space] Flip  [S] Submit  [R] Restart  [?] Rules",
            text_style(),
        );
        y = y.saturating_add(1);
        if let Some(notice) = ui.notice {
            put_centered(fb, w, y, notice, notice_style());
        } else if snap.ended {
            put_centered(fb, w, y, "All pairs found! Press [S] to submit.", notice_style());
        }
    }

    fn draw_result(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ui: &UiView, viewport: Viewport) {
        let mut y = self.start_y(viewport, 8);
        let w = viewport.width;

        put_centered(fb, w, y, GAME_TITLE, title_style());
        y = y.saturating_add(2);
        self.draw_matched_line(fb, snap, w, y);
        y = y.saturating_add(2);

        let headline = CellStyle {
            fg: if snap.is_won() {
                Rgb::new(100, 220, 120)
            } else {
                Rgb::new(240, 220, 80)
            },
            bold: true,
            ..CellStyle::default()
        };
        put_centered(fb, w, y, snap.status.headline(), headline);
        y = y.saturating_add(2);
        put_centered(fb, w, y, "[R] Restart Game  [N] New Game", action_style(true));
        y = y.saturating_add(1);

        if let Some(notice) = ui.notice {
            put_centered(fb, w, y, notice, notice_style());
        }
    }

    fn draw_matched_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, w: u16, y: u16) {
        let label = "Matched Pairs: ";
        // label + "n/m"
        let digits = |n: usize| n.max(1).ilog10() as u16 + 1;
        let line_w = label.len() as u16 + digits(snap.matched_pairs) + 1 + digits(snap.total_pairs);
        let x = w.saturating_sub(line_w) / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 165, 0),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, y, label, style);
        let mut cx = x + label.len() as u16;
        fb.put_u32(cx, y, snap.matched_pairs as u32, style);
        cx += digits(snap.matched_pairs);
        fb.put_char(cx, y, '/', style);
        fb.put_u32(cx + 1, y, snap.total_pairs as u32, style);
    }

    /// `live` is false while flips would be ignored; the cursor is dimmed then.
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        tile: &TileSnapshot,
        selected: bool,
        live: bool,
    ) {
        let bg = if tile.matched {
            Rgb::new(40, 140, 70)
        } else if tile.revealed {
            Rgb::new(170, 120, 40)
        } else {
            Rgb::new(110, 60, 160)
        };
        let face = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg,
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', face);

        let label = tile
            .symbol
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or(TILE_HIDDEN);
        let label_w = display_width(label);
        let mid_y = y + self.tile_h / 2;
        fb.put_str(x + self.tile_w.saturating_sub(label_w) / 2, mid_y, label, face);

        if selected {
            let marker = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg,
                bold: live,
                dim: !live,
            };
            fb.put_char(x, mid_y, '[', marker);
            fb.put_char(x + self.tile_w - 1, mid_y, ']', marker);
        }
    }

    fn draw_rules(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let inner_w = RULES
            .iter()
            .map(|r| display_width(r))
            .max()
            .unwrap_or(0)
            .max(20);
        let box_w = (inner_w + 4).min(viewport.width);
        let box_h = (RULES.len() as u16 + 6).min(viewport.height);
        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = viewport.height.saturating_sub(box_h) / 2;

        let panel = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(20, 20, 30),
            bold: false,
            dim: false,
        };
        fb.fill_rect(x, y, box_w, box_h, ' ', panel);
        self.draw_border(fb, x, y, box_w, box_h, panel);

        let heading = CellStyle {
            bold: true,
            ..panel
        };
        let title = "Game Rules";
        fb.put_str(x + box_w.saturating_sub(display_width(title)) / 2, y + 1, title, heading);
        for (i, rule) in RULES.iter().enumerate() {
            fb.put_str(x + 2, y + 3 + i as u16, rule, panel);
        }
        let close = "[Esc] Close";
        fb.put_str(
            x + box_w.saturating_sub(display_width(close)) / 2,
            y + box_h.saturating_sub(2),
            close,
            heading,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: CellStyle) {
    let x = width.saturating_sub(display_width(text)) / 2;
    fb.put_str(x, y, text, style);
}

fn title_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(110, 60, 160),
        bold: true,
        dim: false,
    }
}

fn text_style() -> CellStyle {
    CellStyle::default()
}

fn action_style(enabled: bool) -> CellStyle {
    CellStyle {
        fg: if enabled {
            Rgb::new(120, 220, 140)
        } else {
            Rgb::new(120, 120, 120)
        },
        bold: enabled,
        dim: !enabled,
        ..CellStyle::default()
    }
}

fn notice_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(240, 220, 80),
        ..CellStyle::default()
    }
}
