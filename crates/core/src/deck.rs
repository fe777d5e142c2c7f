//! Deck module - the unshuffled multiset of paired symbols.

use std::collections::HashMap;

use crate::error::DeckError;
use crate::types::{Symbol, DEFAULT_SYMBOLS};

/// A validated deck: non-empty, and every symbol appears exactly twice.
///
/// The pairing invariant is checked once at construction, so anything that
/// receives a `Deck` can shuffle it without re-validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    symbols: Vec<Symbol>,
}

impl Deck {
    /// Validate an explicit symbol sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use brainmatch_core::Deck;
    /// use brainmatch_types::Symbol;
    ///
    /// let deck = Deck::new(vec!["A".into(), "B".into(), "A".into(), "B".into()]).unwrap();
    /// assert_eq!(deck.total_pairs(), 2);
    ///
    /// assert!(Deck::new(vec![Symbol::from("A")]).is_err());
    /// ```
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, DeckError> {
        if symbols.is_empty() {
            return Err(DeckError::Empty);
        }
        if symbols.len() % 2 != 0 {
            return Err(DeckError::OddLength(symbols.len()));
        }

        let mut counts: HashMap<&Symbol, usize> = HashMap::with_capacity(symbols.len() / 2);
        for symbol in &symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        // Report the first offender in deck order so errors are stable.
        if let Some(symbol) = symbols.iter().find(|s| counts[s] != 2) {
            return Err(DeckError::Unpaired {
                symbol: symbol.clone(),
                count: counts[symbol],
            });
        }

        Ok(Self { symbols })
    }

    /// Build a deck holding each given symbol twice.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols = pairs
            .into_iter()
            .map(Into::into)
            .flat_map(|symbol: Symbol| [symbol.clone(), symbol])
            .collect();
        Self::new(symbols)
    }

    /// The 8-pair emoji deck.
    pub fn standard() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS
                .iter()
                .flat_map(|&s| [Symbol::from(s), Symbol::from(s)])
                .collect(),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: an empty deck is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn total_pairs(&self) -> usize {
        self.symbols.len() / 2
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
