//! Deck generation: the projective-plane construction and the sizes it
//! supports.

pub mod generator;
pub mod sizes;

pub use generator::{Deck, DeckError};
pub use sizes::{plane_order, Difficulty, SUPPORTED_CARD_SIZES};
