//! Board space definitions.

use serde::{Deserialize, Serialize};

use super::Money;
use crate::mechanics::price_for_rent;

/// A cell on the board.
///
/// For the start space `rent` holds the reward paid to players landing on or
/// passing it. Every other space stores its rent and price as negative
/// amounts, so adding either to a balance applies its effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    price: Money,
    rent: Money,
    /// Name of the owning player. A key into the player table, not a reference.
    owner: Option<String>,
}

impl Space {
    /// Create an unowned space. The price is derived from the rent.
    pub fn new(rent: Money) -> Self {
        Self {
            price: price_for_rent(rent),
            rent,
            owner: None,
        }
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn rent(&self) -> Money {
        self.rent
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Replace the owner unconditionally. `None` releases the space.
    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owned_by(&self, name: &str) -> bool {
        self.owner.as_deref() == Some(name)
    }
}
