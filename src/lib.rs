//! # spotdeck
//!
//! Deck generation and match tracking for spot-the-symbol card games
//! (the "Dobble"/"Spot It!" family): every pair of cards in a deck shares
//! exactly one symbol.
//!
//! ## Design Principles
//!
//! 1. **Exact construction**: decks come from a finite projective plane of
//!    prime order; the pairwise one-shared-symbol invariant is algebraic,
//!    not checked-and-retried.
//!
//! 2. **Injected randomness**: the one shuffle at setup takes an explicit
//!    seedable [`ShuffleRng`], so every deal is reproducible.
//!
//! 3. **Integer symbols in the core**: cosmetic glyph mapping lives in
//!    `present`, behind the same symbol identifiers.
//!
//! ## Modules
//!
//! - `core`: symbols, cards, grid coordinates, RNG
//! - `deck`: supported sizes and the projective-plane generator
//! - `game`: players, the live card, turn resolution
//! - `present`: symbol-to-glyph mapping for UI glue
//!
//! ## Example
//!
//! ```
//! use spotdeck::{Game, ShuffleRng};
//!
//! let mut game = Game::new(8)?; // 8 symbols per card, 57-card deck
//! let mut rng = ShuffleRng::new(42);
//! game.setup(&["Alice", "Bob"], &mut rng)?;
//!
//! let winners = game.find_matching_players("B2");
//! if let Some(&winner) = winners.first() {
//!     game.play_winning_card(winner)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod deck;
pub mod game;
pub mod present;

// Re-export commonly used types
pub use crate::core::{Card, Coordinate, ShuffleRng, ShuffleRngState, SymbolId};

pub use crate::deck::{plane_order, Deck, DeckError, Difficulty, SUPPORTED_CARD_SIZES};

pub use crate::game::{Game, GameError, MatchPhase, Player};

pub use crate::present::EmojiMap;
