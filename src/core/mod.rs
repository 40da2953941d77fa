//! Core types: symbols, cards, coordinates, RNG.
//!
//! These are the building blocks shared by deck generation and match
//! tracking. Nothing here knows about deals or turns.

pub mod card;
pub mod coordinate;
pub mod rng;
pub mod symbol;

pub use card::Card;
pub use coordinate::Coordinate;
pub use rng::{ShuffleRng, ShuffleRngState};
pub use symbol::SymbolId;
