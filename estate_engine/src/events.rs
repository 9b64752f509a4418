//! Game events - the outcomes and diagnostics produced by the engine.

use estate_rules::{GameId, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Something that happened while resolving a call against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board was built.
    SpacesCreated { start_reward: Money, board_len: usize },

    /// A player joined the game.
    PlayerJoined { name: String, balance: Money },

    /// A registration was refused.
    PlayerRejected { name: String, reason: String },

    /// A movement request was refused; the player did not move.
    MoveRejected { name: String, reason: String },

    /// An eliminated player asked to move and was ignored.
    TurnSkipped { name: String },

    /// A player moved along the board.
    Moved { name: String, from: usize, to: usize },

    /// A player went past (or onto) the start space and collected the reward.
    PassedStart { name: String, reward: Money },

    /// A player bought the space they stand on.
    SpacePurchased {
        name: String,
        index: usize,
        price: Money,
    },

    /// A purchase was refused.
    PurchaseRefused {
        name: String,
        index: usize,
        reason: String,
    },

    /// Rent changed hands.
    RentPaid {
        payer: String,
        owner: String,
        index: usize,
        amount: Money,
    },

    /// A player ran out of money and lost their spaces.
    PlayerEliminated { name: String, released: Vec<usize> },

    /// Exactly one contender remains.
    Victory { winner: String },
}

impl GameEvent {
    /// Emit this event to the `tracing` subscriber.
    ///
    /// Refusals are warnings, game milestones are info, bookkeeping is debug.
    pub fn log(&self, game: GameId) {
        match self {
            GameEvent::SpacesCreated {
                start_reward,
                board_len,
            } => info!(%game, start_reward, board_len, "board created"),
            GameEvent::PlayerJoined { name, balance } => {
                info!(%game, player = %name, balance, "player joined")
            }
            GameEvent::PlayerRejected { name, reason } => {
                warn!(%game, player = %name, %reason, "player rejected")
            }
            GameEvent::MoveRejected { name, reason } => {
                warn!(%game, player = %name, %reason, "{name} stayed at current location")
            }
            GameEvent::TurnSkipped { name } => {
                debug!(%game, player = %name, "eliminated player cannot move")
            }
            GameEvent::Moved { name, from, to } => {
                debug!(%game, player = %name, from, to, "player moved")
            }
            GameEvent::PassedStart { name, reward } => {
                debug!(%game, player = %name, reward, "passed start")
            }
            GameEvent::SpacePurchased { name, index, price } => {
                info!(%game, player = %name, space = index, price, "space purchased")
            }
            GameEvent::PurchaseRefused {
                name,
                index,
                reason,
            } => warn!(%game, player = %name, space = index, %reason, "purchase refused"),
            GameEvent::RentPaid {
                payer,
                owner,
                index,
                amount,
            } => info!(%game, player = %payer, %owner, space = index, amount, "rent paid"),
            GameEvent::PlayerEliminated { name, released } => info!(
                %game,
                player = %name,
                released = released.len(),
                "{name} has been eliminated from the game"
            ),
            GameEvent::Victory { winner } => info!(%game, %winner, "winner: {winner}"),
        }
    }

    /// The player this event is about, if any.
    pub fn player(&self) -> Option<&str> {
        match self {
            GameEvent::SpacesCreated { .. } => None,
            GameEvent::PlayerJoined { name, .. }
            | GameEvent::PlayerRejected { name, .. }
            | GameEvent::MoveRejected { name, .. }
            | GameEvent::TurnSkipped { name }
            | GameEvent::Moved { name, .. }
            | GameEvent::PassedStart { name, .. }
            | GameEvent::SpacePurchased { name, .. }
            | GameEvent::PurchaseRefused { name, .. }
            | GameEvent::PlayerEliminated { name, .. } => Some(name),
            GameEvent::RentPaid { payer, .. } => Some(payer),
            GameEvent::Victory { winner } => Some(winner),
        }
    }

    /// Check if this event reports a refused request.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            GameEvent::PlayerRejected { .. }
                | GameEvent::MoveRejected { .. }
                | GameEvent::PurchaseRefused { .. }
        )
    }
}
