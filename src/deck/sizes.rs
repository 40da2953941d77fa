//! Supported deck sizes and difficulty presets.
//!
//! The projective-plane construction in `deck::generator` needs the plane
//! order `n = symbols_per_card - 1` to be prime, so only an enumerated set
//! of card sizes is accepted. Everything else fails validation up front.

use serde::{Deserialize, Serialize};

/// Every `symbols_per_card` value the generator accepts.
///
/// Each entry is `n + 1` for a prime order `n` (1, 2, 3, 5, ..., 59).
pub const SUPPORTED_CARD_SIZES: [usize; 18] = [
    2, 3, 4, 6, 8, 12, 14, 18, 20, 24, 30, 32, 38, 42, 44, 48, 54, 60,
];

/// Map a card size to its plane order, if supported.
///
/// ```
/// use spotdeck::deck::plane_order;
///
/// assert_eq!(plane_order(8), Some(7));
/// assert_eq!(plane_order(7), None); // no order-6 plane among supported sizes
/// ```
#[must_use]
pub fn plane_order(symbols_per_card: usize) -> Option<usize> {
    if SUPPORTED_CARD_SIZES.contains(&symbols_per_card) {
        Some(symbols_per_card - 1)
    } else {
        None
    }
}

/// Difficulty presets mapping to a card size.
///
/// More symbols per card means more to scan on every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Trivial,
    Easy,
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Trivial,
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// The card size this preset plays with.
    #[must_use]
    pub const fn symbols_per_card(self) -> usize {
        match self {
            Difficulty::Trivial => 3,
            Difficulty::Easy => 4,
            Difficulty::Normal => 8,
            Difficulty::Hard => 12,
            Difficulty::Extreme => 18,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Trivial => "Trivial",
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        };
        write!(f, "{}", name)
    }
}
