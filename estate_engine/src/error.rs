//! Errors reported by the engine.
//!
//! Every variant is recoverable: the failed operation leaves the game
//! untouched and the caller may retry with different input.

use estate_rules::Money;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("player `{0}` is not registered")]
    UnknownPlayer(String),

    #[error("player name `{0}` is already taken")]
    DuplicatePlayer(String),

    #[error("number of moves must be an integer from 1 to 6, got {0}")]
    InvalidMoveCount(i64),

    #[error("the start space cannot be purchased")]
    StartSpaceNotPurchasable,

    #[error("space {index} is already owned by `{owner}`")]
    SpaceAlreadyOwned { index: usize, owner: String },

    #[error("balance {balance} is not enough to pay price {price}")]
    InsufficientFunds { balance: Money, price: Money },

    #[error("{what} must not be negative, got {amount}")]
    NegativeAmount { what: &'static str, amount: Money },

    #[error("{what} is too large to fit in a balance")]
    AmountTooLarge { what: &'static str },

    #[error("board needs at least {min} rent spaces, got {got}")]
    BoardTooSmall { min: usize, got: usize },

    #[error("the board has already been built")]
    BoardAlreadyBuilt,

    #[error("the board has not been built yet")]
    BoardNotReady,

    #[error("invalid game configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize game snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
