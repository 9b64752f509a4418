//! Entity definitions for the game board.

mod player;
mod space;

pub use player::*;
pub use space::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency amount. Signed, because non-start space rents and prices are
/// stored as negative magnitudes.
pub type Money = i64;

/// Unique identifier for one game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Create a new random game ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a game ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil game ID.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
