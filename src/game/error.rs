//! Match errors.
//!
//! Two kinds exist: configuration errors that are fatal to the failing
//! call (`NoPlayers`, and `DeckError` at deck generation), and turn errors
//! for a winner index that cannot play. Coordinate lookups that simply
//! miss are not errors - they return `None` so the caller can re-prompt.

use thiserror::Error;

/// Errors raised by match operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// `setup` was called with an empty name list.
    #[error("must provide at least one player name")]
    NoPlayers,

    /// A winner index that names no player.
    #[error("no player at index {0}")]
    UnknownPlayer(usize),

    /// The named winner has no cards left to play.
    #[error("player {0} has no cards left to play")]
    EmptyHand(usize),
}
