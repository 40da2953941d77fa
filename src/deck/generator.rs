//! Deck generation via a finite projective plane.
//!
//! For a plane of prime order `n` (`symbols_per_card - 1`), the generator
//! emits one card per line of the plane:
//!
//! - 1 axis card: symbols `{n², n²+1, ..., n²+n}`
//! - `n` pencil cards, one per offset `o`: `{o + i·n : i < n} ∪ {n²+n}`
//! - `n²` grid cards, one per slope/offset pair `(p, o)`:
//!   `{(o·n + i·(p·n + 1)) mod n² : i < n} ∪ {n²+p}`
//!
//! That is `n² + n + 1` cards over `n² + n + 1` symbols, and the algebra
//! guarantees every pair of distinct cards intersects in exactly one
//! symbol. The modular arithmetic is order-sensitive and must stay exact.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, SymbolId};

use super::sizes::plane_order;

/// Deck construction failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The requested card size has no supported plane order.
    #[error("unsupported symbols-per-card count {0}: no projective plane of that order is supported")]
    UnsupportedCardSize(usize),
}

/// A full generated deck: every card of the order-`n` plane, in
/// construction order (axis, pencils, grid).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    symbols_per_card: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Generate the complete deck for a card size.
    ///
    /// Fails with [`DeckError::UnsupportedCardSize`] unless the size is in
    /// [`SUPPORTED_CARD_SIZES`](super::SUPPORTED_CARD_SIZES).
    pub fn generate(symbols_per_card: usize) -> Result<Self, DeckError> {
        let n = plane_order(symbols_per_card)
            .ok_or(DeckError::UnsupportedCardSize(symbols_per_card))?;

        let mut cards = Vec::with_capacity(n * n + n + 1);

        // Axis card: the n+1 "point at infinity" symbols.
        cards.push(Card::from_symbols(
            (n * n..=n * n + n).map(|s| SymbolId::new(s as u16)),
        ));

        // Pencil cards: vertical lines, all through symbol n²+n.
        for o in 0..n {
            cards.push(Card::from_symbols(
                (0..n)
                    .map(|i| o + i * n)
                    .chain(std::iter::once(n * n + n))
                    .map(|s| SymbolId::new(s as u16)),
            ));
        }

        // Grid cards: lines of slope p through offset o, each through n²+p.
        for p in 0..n {
            for o in 0..n {
                cards.push(Card::from_symbols(
                    (0..n)
                        .map(|i| (o * n + i * (p * n + 1)) % (n * n))
                        .chain(std::iter::once(n * n + p))
                        .map(|s| SymbolId::new(s as u16)),
                ));
            }
        }

        Ok(Self {
            symbols_per_card,
            cards,
        })
    }

    /// The card size this deck was generated for.
    #[must_use]
    pub fn symbols_per_card(&self) -> usize {
        self.symbols_per_card
    }

    /// Plane order `n`.
    #[must_use]
    pub fn order(&self) -> usize {
        self.symbols_per_card - 1
    }

    /// Number of cards, `n² + n + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards. Generated decks never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of distinct symbols across the deck, `n² + n + 1`.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        let n = self.order();
        n * n + n + 1
    }

    /// All cards, in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Debugging aid: verify the pairwise exactly-one-shared-symbol
    /// invariant by brute force. Quadratic in deck size.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for (i, a) in self.cards.iter().enumerate() {
            if a.symbol_count() != self.symbols_per_card {
                return false;
            }
            for b in &self.cards[i + 1..] {
                let shared: FxHashSet<SymbolId> = a
                    .symbols()
                    .iter()
                    .filter(|s| b.contains(**s))
                    .copied()
                    .collect();
                if shared.len() != 1 {
                    return false;
                }
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
