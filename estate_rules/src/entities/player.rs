//! Player definitions.

use serde::{Deserialize, Serialize};

use super::Money;
use crate::mechanics::START_INDEX;

/// A participant in the game, identified by a unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: Money,
    /// Index into the board. Every player starts on the start space.
    position: usize,
}

impl Player {
    /// Create a new player standing on the start space.
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
            position: START_INDEX,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Add a signed amount to the balance. Positive credits, negative debits.
    ///
    /// No floor is enforced here; the engine keeps balances at or above zero.
    pub fn adjust_balance(&mut self, delta: Money) {
        self.balance += delta;
    }

    pub fn set_position(&mut self, index: usize) {
        self.position = index;
    }

    /// A player with exactly zero balance is out of the game.
    pub fn is_eliminated(&self) -> bool {
        self.balance == 0
    }

    /// Check if the player can still win.
    pub fn is_contender(&self) -> bool {
        self.balance > 0
    }
}
