//! Tile cursor on the board grid.

use crate::types::Direction;

/// Selected tile position on a row-major grid.
///
/// Movement clamps at the edges. The last row may be partial, so moving down
/// into it clamps to its last tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCursor {
    index: usize,
    columns: usize,
}

impl GridCursor {
    pub fn new(columns: u16) -> Self {
        Self {
            index: 0,
            columns: (columns as usize).max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move one step on a board of `len` tiles. Returns true if the cursor moved.
    pub fn step(&mut self, direction: Direction, len: usize) -> bool {
        if len == 0 {
            self.index = 0;
            return false;
        }

        let cols = self.columns;
        let current = self.index.min(len - 1);
        let col = current % cols;

        let next = match direction {
            Direction::Left if col > 0 => current - 1,
            Direction::Right if col + 1 < cols => (current + 1).min(len - 1),
            Direction::Up if current >= cols => current - cols,
            Direction::Down if current + cols < len => current + cols,
            Direction::Down if current / cols < (len - 1) / cols => len - 1,
            _ => current,
        };

        let moved = next != self.index;
        self.index = next;
        moved
    }
}
