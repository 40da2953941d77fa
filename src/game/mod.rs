//! Match tracking: players, the live card, and turn resolution.

pub mod error;
pub mod player;
pub mod state;

pub use error::GameError;
pub use player::Player;
pub use state::{Game, MatchPhase};
