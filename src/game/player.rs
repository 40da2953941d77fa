//! Players: a name and a private stack of cards.

use serde::{Deserialize, Serialize};

use crate::core::{Card, SymbolId};

/// A player in a match.
///
/// Cards form an ordered stack; index 0 is the top, the only card the
/// player plays from. A player whose stack empties has won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Create a player holding the given stack.
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's stack, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The top card without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Remove and return the top card.
    pub fn take_top_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Whether the player's top card carries the given symbol.
    #[must_use]
    pub fn has_matching_symbol(&self, symbol: SymbolId) -> bool {
        self.top_card().is_some_and(|card| card.contains(symbol))
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.cards.is_empty()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.cards.len())
    }
}
