//! Match state: deal, live card, turn resolution.
//!
//! A match moves through three phases:
//!
//! - `Setup`: deck generated, nobody dealt in yet
//! - `InProgress`: cards dealt, a live card on the table
//! - `Finished`: some player's stack has emptied
//!
//! The phase is derived from state rather than stored, so it can never
//! disagree with the cards on the table.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Coordinate, ShuffleRng, SymbolId};
use crate::deck::{Deck, DeckError};

use super::error::GameError;
use super::player::Player;

/// Where a match currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Deck exists but no deal has happened.
    Setup,
    /// Dealt and playing.
    InProgress,
    /// Some player has emptied their stack.
    Finished,
}

/// A single match: one generated deck, one live card, one set of players.
///
/// The flow is `new` (or `from_deck`), then [`setup`](Game::setup) to deal,
/// then repeated [`find_matching_players`](Game::find_matching_players) /
/// [`play_winning_card`](Game::play_winning_card) rounds until
/// [`is_over`](Game::is_over).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    deck: Deck,
    live_card: Option<Card>,
    players: Vec<Player>,
}

impl Game {
    /// Create a match, generating the deck for the given card size.
    ///
    /// Fails for unsupported sizes, such as 7.
    pub fn new(symbols_per_card: usize) -> Result<Self, DeckError> {
        Ok(Self::from_deck(Deck::generate(symbols_per_card)?))
    }

    /// Create a match over an already-generated deck.
    #[must_use]
    pub fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            live_card: None,
            players: Vec::new(),
        }
    }

    /// Deal the deck to the named players.
    ///
    /// Shuffles a copy of the deck with the injected RNG, pops the last
    /// card as the live card, and splits the rest into equal contiguous
    /// chunks, one per name in input order. Leftover cards from the floor
    /// division go unused. Calling this on a running match re-deals.
    pub fn setup<S: AsRef<str>>(
        &mut self,
        player_names: &[S],
        rng: &mut ShuffleRng,
    ) -> Result<(), GameError> {
        if player_names.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut shuffled = self.deck.cards().to_vec();
        rng.shuffle(&mut shuffled);

        self.live_card = shuffled.pop();

        let cards_per_player = shuffled.len() / player_names.len();
        self.players = player_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let chunk = &shuffled[i * cards_per_player..(i + 1) * cards_per_player];
                Player::new(name.as_ref(), chunk.to_vec())
            })
            .collect();

        Ok(())
    }

    /// The current phase, derived from state.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.players.is_empty() {
            MatchPhase::Setup
        } else if self.is_over() {
            MatchPhase::Finished
        } else {
            MatchPhase::InProgress
        }
    }

    /// The generated deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The live card, once dealt.
    #[must_use]
    pub fn live_card(&self) -> Option<&Card> {
        self.live_card.as_ref()
    }

    /// The players, in setup order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Resolve a coordinate against the live card's display grid.
    ///
    /// `None` when there is no live card, the coordinate is malformed, or
    /// it lands outside the grid or on a trailing empty cell.
    #[must_use]
    pub fn symbol_at(&self, coordinate: &str) -> Option<SymbolId> {
        let coordinate = Coordinate::parse(coordinate)?;
        self.live_card.as_ref()?.symbol_at(coordinate)
    }

    /// Indices of every player whose top card carries the symbol at the
    /// given live-card coordinate.
    ///
    /// Empty when the coordinate resolves to no symbol or nobody matches.
    #[must_use]
    pub fn find_matching_players(&self, coordinate: &str) -> Vec<usize> {
        let Some(symbol) = self.symbol_at(coordinate) else {
            return Vec::new();
        };

        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.has_matching_symbol(symbol))
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the winner's top card to the table as the new live card.
    ///
    /// Returns the card just played. Errors on an index that names no
    /// player or a player with an empty stack.
    pub fn play_winning_card(&mut self, winner_index: usize) -> Result<&Card, GameError> {
        let player = self
            .players
            .get_mut(winner_index)
            .ok_or(GameError::UnknownPlayer(winner_index))?;
        let card = player
            .take_top_card()
            .ok_or(GameError::EmptyHand(winner_index))?;
        Ok(self.live_card.insert(card))
    }

    /// Whether any player has emptied their stack.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().any(Player::is_out_of_cards)
    }

    /// The first player (in setup order) with an empty stack.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_out_of_cards())
    }

    /// Name and remaining card count per player, in setup order.
    #[must_use]
    pub fn results(&self) -> Vec<(&str, usize)> {
        self.players
            .iter()
            .map(|p| (p.name(), p.card_count()))
            .collect()
    }
}
