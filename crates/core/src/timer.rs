//! Deferred mismatch resolution.
//!
//! A mismatched pair stays face-up for a fixed delay and is then hidden. The
//! pending action carries the board generation it was scheduled against, so
//! an action that outlives its board (restart, new game, resume) can never
//! touch the freshly dealt one.

/// Identifies one scheduled unflip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnflipToken {
    pub first: usize,
    pub second: usize,
    /// Board generation (episode id) the pair belongs to.
    pub generation: u32,
}

/// Single-shot countdown for one [`UnflipToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredUnflip {
    token: UnflipToken,
    remaining_ms: u32,
}

impl DeferredUnflip {
    pub fn new(token: UnflipToken, delay_ms: u32) -> Self {
        Self {
            token,
            remaining_ms: delay_ms,
        }
    }

    pub fn token(&self) -> UnflipToken {
        self.token
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Advance the countdown. Returns true once the delay has fully elapsed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> UnflipToken {
        UnflipToken {
            first: 0,
            second: 1,
            generation: 1,
        }
    }

    #[test]
    fn test_fires_when_delay_elapses() {
        let mut pending = DeferredUnflip::new(token(), 1000);
        assert!(!pending.advance(16));
        assert_eq!(pending.remaining_ms(), 984);
        assert!(!pending.advance(983));
        assert!(pending.advance(1));
    }

    #[test]
    fn test_overshoot_saturates() {
        let mut pending = DeferredUnflip::new(token(), 10);
        assert!(pending.advance(500));
        assert_eq!(pending.remaining_ms(), 0);
    }

    #[test]
    fn test_zero_delay_fires_on_first_advance() {
        let mut pending = DeferredUnflip::new(token(), 0);
        assert!(pending.advance(0));
    }
}
