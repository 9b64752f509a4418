//! Game state management - the board and the player table of one game.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{GameId, Money, Player, Space};
use crate::mechanics::START_INDEX;

/// The complete state of one game at any point in time.
///
/// The board keeps its length and order once built; only space ownership
/// changes afterwards. Players are added by name and never removed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameState {
    /// Identifies this game in logs and snapshots.
    pub id: GameId,

    /// Start space at index 0 followed by the rent-bearing spaces.
    board: Vec<Space>,

    /// All registered players, keyed by name.
    players: HashMap<String, Player>,
}

impl GameState {
    /// Create a new game state with an empty board and no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty game state carrying a specific ID.
    pub fn with_id(id: GameId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Install the spaces of the board. Callers build the board only once.
    pub fn set_board(&mut self, board: Vec<Space>) {
        self.board = board;
    }

    pub fn is_board_ready(&self) -> bool {
        !self.board.is_empty()
    }

    pub fn board_len(&self) -> usize {
        self.board.len()
    }

    pub fn space(&self, index: usize) -> Option<&Space> {
        self.board.get(index)
    }

    pub fn space_mut(&mut self, index: usize) -> Option<&mut Space> {
        self.board.get_mut(index)
    }

    /// Reward for landing on or passing the start space, zero before setup.
    pub fn start_reward(&self) -> Money {
        self.board.get(START_INDEX).map_or(0, Space::rent)
    }

    /// Register a player. Returns false, leaving the existing entry alone,
    /// if the name is already taken.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.players.contains_key(player.name()) {
            return false;
        }
        self.players.insert(player.name().to_string(), player);
        true
    }

    pub fn contains_player(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Indices of every space owned by the named player, ascending.
    pub fn owned_spaces(&self, name: &str) -> Vec<usize> {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, space)| space.is_owned_by(name))
            .map(|(index, _)| index)
            .collect()
    }

    /// Clear ownership of every space the named player holds.
    ///
    /// Returns the indices that were released.
    pub fn release_spaces(&mut self, name: &str) -> Vec<usize> {
        let mut released = Vec::new();
        for (index, space) in self.board.iter_mut().enumerate() {
            if space.is_owned_by(name) {
                space.set_owner(None);
                released.push(index);
            }
        }
        released
    }

    /// All players who still have a positive balance.
    pub fn contenders(&self) -> Vec<&Player> {
        self.players.values().filter(|p| p.is_contender()).collect()
    }
}
