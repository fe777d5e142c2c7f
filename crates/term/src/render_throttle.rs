//! Frame pacing for the terminal loop.

use crate::core::GameSnapshot;
use crate::game_view::UiView;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        if !self.has_rendered {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if !is_static {
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if fingerprint != self.last_fingerprint {
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv_mix(hash: u64, value: u64) -> u64 {
    let mut h = hash;
    for byte in value.to_le_bytes() {
        h ^= byte as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// FNV-1a fingerprint of everything visible on screen.
///
/// The unflip countdown is left out: it changes every tick without changing
/// any pixel.
pub fn frame_fingerprint(snap: &GameSnapshot, ui: &UiView) -> u64 {
    let mut h = FNV_OFFSET;
    for tile in &snap.tiles {
        let bits = (tile.revealed as u64) | ((tile.matched as u64) << 1);
        h = fnv_mix(h, bits);
    }
    h = fnv_mix(h, snap.matched_pairs as u64);
    h = fnv_mix(h, snap.total_pairs as u64);
    let flags = (snap.started as u64)
        | ((snap.submitted as u64) << 1)
        | ((snap.ended as u64) << 2)
        | ((snap.resumable as u64) << 3)
        | ((ui.rules_open as u64) << 4)
        | ((ui.notice.is_some() as u64) << 5);
    h = fnv_mix(h, flags);
    h = fnv_mix(h, snap.episode_id as u64);
    h = fnv_mix(h, ui.screen as u64);
    h = fnv_mix(h, ui.cursor as u64);
    h
}
