//! Game mechanics: move limits, price derivation, wrapping and rent.

use serde::{Deserialize, Serialize};

use crate::entities::Money;

/// Board index of the start space.
pub const START_INDEX: usize = 0;

/// Smallest distance a player may move in one turn.
pub const MIN_MOVE: i64 = 1;

/// Largest distance a player may move in one turn.
pub const MAX_MOVE: i64 = 6;

/// A space costs this many times its rent.
pub const PRICE_MULTIPLIER: Money = 5;

/// Fewest rent-bearing spaces a board may have, so one move never laps it twice.
pub const MIN_RENT_SPACES: usize = MAX_MOVE as usize;

/// Purchase price of a space with the given rent.
pub fn price_for_rent(rent: Money) -> Money {
    PRICE_MULTIPLIER * rent
}

/// Purchase price of a space with the given rent, or `None` if it does not
/// fit in `Money`.
pub fn checked_price_for_rent(rent: Money) -> Option<Money> {
    rent.checked_mul(PRICE_MULTIPLIER)
}

/// A validated move distance in `[MIN_MOVE, MAX_MOVE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCount(u8);

impl MoveCount {
    /// Validate a raw move distance.
    pub fn new(count: i64) -> Option<Self> {
        if (MIN_MOVE..=MAX_MOVE).contains(&count) {
            Some(Self(count as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Where a move lands and whether it went past the start space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    pub position: usize,
    pub passed_start: bool,
}

/// Move forward from `position` on a board of `board_len` spaces.
///
/// Going beyond the last index wraps by subtracting the board length once.
/// Requires `board_len > MAX_MOVE` so the result is always a valid index.
pub fn advance(position: usize, count: MoveCount, board_len: usize) -> Advance {
    let raw = position + count.get();
    if raw >= board_len {
        Advance {
            position: raw - board_len,
            passed_start: true,
        }
    } else {
        Advance {
            position: raw,
            passed_start: false,
        }
    }
}

/// Outcome of charging rent to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentDue {
    /// The full rent is paid and the player stays in the game.
    Full(Money),
    /// The player cannot cover the rent: everything they hold is paid and
    /// they are eliminated.
    Insolvent(Money),
}

impl RentDue {
    /// Decide what a player with `balance` pays for a rent of `magnitude`.
    ///
    /// Owing at least the whole balance is insolvency, even when equal.
    pub fn assess(balance: Money, magnitude: Money) -> Self {
        if balance <= magnitude {
            RentDue::Insolvent(balance)
        } else {
            RentDue::Full(magnitude)
        }
    }

    /// Amount actually transferred to the owner.
    pub fn paid(&self) -> Money {
        match self {
            RentDue::Full(amount) | RentDue::Insolvent(amount) => *amount,
        }
    }

    pub fn is_insolvent(&self) -> bool {
        matches!(self, RentDue::Insolvent(_))
    }
}
