//! Board module - the shuffled tiles currently in play.

use crate::deck::Deck;
use crate::rng::BoardRng;
use crate::types::Symbol;

/// One position on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Position in the shuffled sequence (0-based, contiguous).
    pub index: usize,
    pub symbol: Symbol,
    pub revealed: bool,
}

/// Ordered tiles dealt from a [`Deck`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// A board with no tiles (before the first deal).
    pub fn empty() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Deal a uniformly shuffled board, every tile face-down.
    pub fn shuffled(deck: &Deck, rng: &mut BoardRng) -> Self {
        let mut symbols = deck.symbols().to_vec();
        rng.shuffle(&mut symbols);
        Self::from_symbols(symbols)
    }

    /// Lay out symbols in the given order, every tile face-down.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        let tiles = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Tile {
                index,
                symbol,
                revealed: false,
            })
            .collect();
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Out-of-range indices read as not revealed.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.tiles.get(index).is_some_and(|t| t.revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.revealed).count()
    }

    /// Whether two positions hold the same symbol.
    pub fn same_symbol(&self, a: usize, b: usize) -> bool {
        match (self.tiles.get(a), self.tiles.get(b)) {
            (Some(x), Some(y)) => x.symbol == y.symbol,
            _ => false,
        }
    }

    pub(crate) fn reveal(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.revealed = true;
        }
    }

    pub(crate) fn hide(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.revealed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert!(!board.is_revealed(0));
    }

    #[test]
    fn test_shuffled_board_is_permutation_of_deck() {
        let deck = Deck::standard();
        let mut rng = BoardRng::new(3);
        let board = Board::shuffled(&deck, &mut rng);

        assert_eq!(board.len(), deck.len());

        let mut counts: HashMap<&Symbol, usize> = HashMap::new();
        for tile in board.tiles() {
            *counts.entry(&tile.symbol).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), deck.total_pairs());
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_tiles_start_hidden_with_contiguous_indices() {
        let board = Board::shuffled(&Deck::standard(), &mut BoardRng::new(3));
        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.index, i);
            assert!(!tile.revealed);
        }
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut board = Board::from_symbols(vec!["A".into(), "A".into()]);
        board.reveal(1);
        assert!(board.is_revealed(1));
        assert!(!board.is_revealed(0));
        assert_eq!(board.revealed_count(), 1);

        board.hide(1);
        assert_eq!(board.revealed_count(), 0);

        // Out of range is a no-op.
        board.reveal(5);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn test_same_symbol() {
        let board = Board::from_symbols(vec!["A".into(), "B".into(), "A".into(), "B".into()]);
        assert!(board.same_symbol(0, 2));
        assert!(!board.same_symbol(0, 1));
        assert!(!board.same_symbol(0, 9));
    }
}
