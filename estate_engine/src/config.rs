//! Game configuration, loadable from TOML.
//!
//! ```toml
//! start_reward = 200
//! rents = [50, 50, 50, 50, 50, 50]
//!
//! [[players]]
//! name = "P1"
//! balance = 1000
//! ```

use estate_rules::Money;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reward for passing start in the classic layout.
pub const DEFAULT_START_REWARD: Money = 200;

/// Rent of every space in the classic layout.
pub const DEFAULT_RENT: Money = 50;

/// Number of rent-bearing spaces in the classic layout.
pub const DEFAULT_RENT_SPACES: usize = 24;

/// A player to register when the game is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub balance: Money,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

/// Everything needed to set up a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Paid to a player landing on or passing the start space.
    pub start_reward: Money,

    /// Rent of each space after start, in board order. Given as positive amounts.
    pub rents: Vec<Money>,

    /// Players registered in order.
    #[serde(default)]
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_reward: DEFAULT_START_REWARD,
            rents: vec![DEFAULT_RENT; DEFAULT_RENT_SPACES],
            players: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Add a player to register.
    pub fn with_player(mut self, name: impl Into<String>, balance: Money) -> Self {
        self.players.push(PlayerConfig::new(name, balance));
        self
    }

    /// Replace the board layout.
    pub fn with_board(mut self, start_reward: Money, rents: Vec<Money>) -> Self {
        self.start_reward = start_reward;
        self.rents = rents;
        self
    }
}
