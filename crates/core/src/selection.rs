//! Pending tile selection (at most two indices).

use arrayvec::ArrayVec;

/// Up to two board indices waiting to be resolved as a pair.
///
/// The second slot is only ever filled after the first, and both are cleared
/// together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pending: ArrayVec<usize, 2>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<usize> {
        self.pending.first().copied()
    }

    pub fn second(&self) -> Option<usize> {
        self.pending.get(1).copied()
    }

    pub fn pair(&self) -> Option<(usize, usize)> {
        Some((self.first()?, self.second()?))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Two indices pending: no further flips until resolution.
    pub fn is_full(&self) -> bool {
        self.pending.is_full()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    /// Record an index. Returns false when the selection is already full.
    pub fn push(&mut self, index: usize) -> bool {
        self.pending.try_push(index).is_ok()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
