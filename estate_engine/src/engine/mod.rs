//! The Real Estate Game engine - owns the board and players of one game.
//!
//! A game is set up in two steps:
//! 1. **Board**: `create_spaces` builds the start space and the rent spaces
//! 2. **Players**: `create_player` registers each participant on the start space
//!
//! Turns are then resolved by `move_player` and `buy_space`, and
//! `check_game_over` reports the winner once a single contender remains.

mod turn;

pub use turn::*;

use estate_rules::{
    checked_price_for_rent, GameId, GameState, Money, Player, Space, MIN_RENT_SPACES,
};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::events::GameEvent;

/// One game of Real Estate.
#[derive(Debug, Clone, Default)]
pub struct RealEstateGame {
    state: GameState,

    /// Outcomes and diagnostics recorded since the last `take_events`.
    events: Vec<GameEvent>,

    /// Last winner reported by `check_game_over`, so it is recorded once.
    announced_winner: Option<String>,
}

impl RealEstateGame {
    /// Create a game with no board and no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty game carrying a specific ID.
    pub fn with_id(id: GameId) -> Self {
        Self {
            state: GameState::with_id(id),
            events: Vec::new(),
            announced_winner: None,
        }
    }

    /// Build the board and register the players described by `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let mut game = Self::new();
        game.create_spaces(config.start_reward, &config.rents)?;
        for player in &config.players {
            game.create_player(&player.name, player.balance)?;
        }
        Ok(game)
    }

    /*********        SETUP        *********/

    /// Build the board: the start space paying `start_reward`, followed by one
    /// space per entry of `rents`.
    ///
    /// Rents are given as positive amounts and stored negated.
    pub fn create_spaces(&mut self, start_reward: Money, rents: &[Money]) -> Result<()> {
        if self.state.is_board_ready() {
            return Err(GameError::BoardAlreadyBuilt);
        }
        if start_reward < 0 {
            return Err(GameError::NegativeAmount {
                what: "start reward",
                amount: start_reward,
            });
        }
        if let Some(&rent) = rents.iter().find(|&&rent| rent < 0) {
            return Err(GameError::NegativeAmount {
                what: "rent",
                amount: rent,
            });
        }
        // Prices are five times the amount and must fit in Money
        if checked_price_for_rent(start_reward).is_none() {
            return Err(GameError::AmountTooLarge {
                what: "start reward",
            });
        }
        if rents.iter().any(|&rent| checked_price_for_rent(rent).is_none()) {
            return Err(GameError::AmountTooLarge { what: "rent" });
        }
        if rents.len() < MIN_RENT_SPACES {
            return Err(GameError::BoardTooSmall {
                min: MIN_RENT_SPACES,
                got: rents.len(),
            });
        }

        let mut board = Vec::with_capacity(rents.len() + 1);
        board.push(Space::new(start_reward));
        board.extend(rents.iter().map(|&rent| Space::new(-rent)));
        self.state.set_board(board);

        self.record(GameEvent::SpacesCreated {
            start_reward,
            board_len: self.state.board_len(),
        });
        Ok(())
    }

    /// Register a player on the start space.
    ///
    /// A taken name is reported and leaves the existing player untouched.
    pub fn create_player(&mut self, name: &str, balance: Money) -> Result<()> {
        let refusal = if self.state.contains_player(name) {
            Some(GameError::DuplicatePlayer(name.to_string()))
        } else if balance < 0 {
            Some(GameError::NegativeAmount {
                what: "starting balance",
                amount: balance,
            })
        } else {
            None
        };

        if let Some(err) = refusal {
            self.record(GameEvent::PlayerRejected {
                name: name.to_string(),
                reason: err.to_string(),
            });
            return Err(err);
        }

        self.state.add_player(Player::new(name, balance));
        self.record(GameEvent::PlayerJoined {
            name: name.to_string(),
            balance,
        });
        Ok(())
    }

    /*********        QUERIES        *********/

    pub fn game_id(&self) -> GameId {
        self.state.id
    }

    /// The full board and player table.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn account_balance(&self, name: &str) -> Result<Money> {
        Ok(self.player(name)?.balance())
    }

    pub fn current_position(&self, name: &str) -> Result<usize> {
        Ok(self.player(name)?.position())
    }

    pub fn space(&self, index: usize) -> Option<&Space> {
        self.state.space(index)
    }

    pub fn board_len(&self) -> usize {
        self.state.board_len()
    }

    /// Indices of the spaces the named player owns.
    pub fn owned_spaces(&self, name: &str) -> Result<Vec<usize>> {
        self.player(name)?;
        Ok(self.state.owned_spaces(name))
    }

    /// Names of the players still holding money.
    pub fn contenders(&self) -> Vec<&str> {
        self.state.contenders().into_iter().map(Player::name).collect()
    }

    /*********        EVENTS & SNAPSHOTS        *********/

    /// Events recorded since the last `take_events`, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render the current state as pretty-printed JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /*********        INTERNALS        *********/

    fn player(&self, name: &str) -> Result<&Player> {
        self.state
            .player(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    fn player_mut(&mut self, name: &str) -> Result<&mut Player> {
        self.state
            .player_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    /// Log an event and append it to the event log.
    fn record(&mut self, event: GameEvent) {
        event.log(self.state.id);
        self.events.push(event);
    }
}
