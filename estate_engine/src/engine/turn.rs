//! Turn resolution: movement, purchases, rent settlement and the win check.

use estate_rules::{advance, Money, MoveCount, RentDue, START_INDEX};
use serde::{Deserialize, Serialize};

use super::RealEstateGame;
use crate::error::{GameError, Result};
use crate::events::GameEvent;

/// Rent charged when a player lands on someone else's space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSettlement {
    pub owner: String,
    /// Amount moved from the mover to the owner.
    pub paid: Money,
    /// Whether paying emptied the mover's balance.
    pub eliminated: bool,
}

/// What a call to `move_player` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnReport {
    /// The player is eliminated; nothing happened.
    Skipped,
    Moved {
        from: usize,
        to: usize,
        /// Reward collected for passing or landing on start.
        start_reward: Option<Money>,
        rent: Option<RentSettlement>,
    },
}

impl TurnReport {
    /// Position after the turn, if the player moved.
    pub fn destination(&self) -> Option<usize> {
        match self {
            TurnReport::Skipped => None,
            TurnReport::Moved { to, .. } => Some(*to),
        }
    }

    pub fn rent(&self) -> Option<&RentSettlement> {
        match self {
            TurnReport::Skipped => None,
            TurnReport::Moved { rent, .. } => rent.as_ref(),
        }
    }
}

impl RealEstateGame {
    /// Buy the space the named player stands on.
    ///
    /// Refused, with no change to the game, when the player is on start, the
    /// space is already owned, or the balance is below the price. Returns the
    /// price paid.
    pub fn buy_space(&mut self, name: &str) -> Result<Money> {
        let index = self.player(name)?.position();

        let price = match self.purchase_price(name, index) {
            Ok(price) => price,
            Err(err) => {
                self.record(GameEvent::PurchaseRefused {
                    name: name.to_string(),
                    index,
                    reason: err.to_string(),
                });
                return Err(err);
            }
        };

        self.player_mut(name)?.adjust_balance(-price);
        if let Some(space) = self.state.space_mut(index) {
            space.set_owner(Some(name.to_string()));
        }

        self.record(GameEvent::SpacePurchased {
            name: name.to_string(),
            index,
            price,
        });
        Ok(price)
    }

    /// Move the named player `move_count` spaces forward and settle any rent.
    ///
    /// Eliminated players are skipped. A count outside 1..=6 is refused and
    /// the player stays put.
    pub fn move_player(&mut self, name: &str, move_count: i64) -> Result<TurnReport> {
        let (eliminated, from) = {
            let player = self.player(name)?;
            (player.is_eliminated(), player.position())
        };

        if eliminated {
            self.record(GameEvent::TurnSkipped {
                name: name.to_string(),
            });
            return Ok(TurnReport::Skipped);
        }

        let Some(count) = MoveCount::new(move_count) else {
            let err = GameError::InvalidMoveCount(move_count);
            self.record(GameEvent::MoveRejected {
                name: name.to_string(),
                reason: err.to_string(),
            });
            return Err(err);
        };

        if !self.state.is_board_ready() {
            return Err(GameError::BoardNotReady);
        }

        let landed = advance(from, count, self.state.board_len());
        let reward = self.state.start_reward();

        // Work out every balance change before touching the game
        let planned = self.plan_turn(name, landed.position, landed.passed_start, reward);
        let rent = match planned {
            Ok(planned) => planned,
            Err(err) => {
                self.record(GameEvent::MoveRejected {
                    name: name.to_string(),
                    reason: err.to_string(),
                });
                return Err(err);
            }
        };

        let player = self.player_mut(name)?;
        if landed.passed_start {
            player.adjust_balance(reward);
        }
        player.set_position(landed.position);

        self.record(GameEvent::Moved {
            name: name.to_string(),
            from,
            to: landed.position,
        });
        if landed.passed_start {
            self.record(GameEvent::PassedStart {
                name: name.to_string(),
                reward,
            });
        }

        let rent = match rent {
            Some((owner, due)) => Some(self.settle_rent(name, owner, landed.position, due)?),
            None => None,
        };

        Ok(TurnReport::Moved {
            from,
            to: landed.position,
            start_reward: landed.passed_start.then_some(reward),
            rent,
        })
    }

    /// Return the winner if exactly one player still has money.
    ///
    /// With no contenders at all nobody wins. Victory is recorded once per
    /// winner, however often this is called.
    pub fn check_game_over(&mut self) -> Option<String> {
        let contenders = self.state.contenders();
        if contenders.len() != 1 {
            return None;
        }

        let winner = contenders[0].name().to_string();
        if self.announced_winner.as_deref() != Some(winner.as_str()) {
            self.announced_winner = Some(winner.clone());
            self.record(GameEvent::Victory {
                winner: winner.clone(),
            });
        }
        Some(winner)
    }

    /// Validate a purchase of the space at `index` and return its price as a
    /// positive amount.
    fn purchase_price(&self, name: &str, index: usize) -> Result<Money> {
        if index == START_INDEX {
            return Err(GameError::StartSpaceNotPurchasable);
        }

        let space = self.state.space(index).ok_or(GameError::BoardNotReady)?;
        if let Some(owner) = space.owner() {
            return Err(GameError::SpaceAlreadyOwned {
                index,
                owner: owner.to_string(),
            });
        }

        let price = -space.price();
        let player = self.player(name)?;
        // Eliminated players stay out even for a free space
        if player.is_eliminated() || player.balance() < price {
            return Err(GameError::InsufficientFunds {
                balance: player.balance(),
                price,
            });
        }
        Ok(price)
    }

    /// Work out the rent owed on the space at `index` if another player owns
    /// it, charged against the mover's balance after any start reward.
    ///
    /// Fails without side effects if a credit would overflow a balance.
    fn plan_turn(
        &self,
        name: &str,
        index: usize,
        passed_start: bool,
        reward: Money,
    ) -> Result<Option<(String, RentDue)>> {
        let mut balance = self.player(name)?.balance();
        if passed_start {
            balance = balance
                .checked_add(reward)
                .ok_or(GameError::AmountTooLarge {
                    what: "balance after start reward",
                })?;
        }

        let space = self.state.space(index).ok_or(GameError::BoardNotReady)?;
        let owner = match space.owner() {
            Some(owner) if owner != name => owner,
            _ => return Ok(None),
        };
        let due = RentDue::assess(balance, -space.rent());

        let owner_balance = self
            .state
            .player(owner)
            .ok_or_else(|| GameError::UnknownPlayer(owner.to_string()))?
            .balance();
        if owner_balance.checked_add(due.paid()).is_none() {
            return Err(GameError::AmountTooLarge {
                what: "owner balance after rent",
            });
        }

        Ok(Some((owner.to_string(), due)))
    }

    /// Move the rent from the mover to the owner, eliminating an insolvent mover.
    fn settle_rent(
        &mut self,
        name: &str,
        owner: String,
        index: usize,
        due: RentDue,
    ) -> Result<RentSettlement> {
        let paid = due.paid();

        self.player_mut(name)?.adjust_balance(-paid);
        self.player_mut(&owner)?.adjust_balance(paid);

        self.record(GameEvent::RentPaid {
            payer: name.to_string(),
            owner: owner.clone(),
            index,
            amount: paid,
        });

        if due.is_insolvent() {
            let released = self.state.release_spaces(name);
            self.record(GameEvent::PlayerEliminated {
                name: name.to_string(),
                released,
            });
        }

        Ok(RentSettlement {
            owner,
            paid,
            eliminated: due.is_insolvent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classic board: 200 for passing start, 24 spaces at rent 50.
    fn classic_game(players: &[(&str, Money)]) -> RealEstateGame {
        let mut game = RealEstateGame::new();
        game.create_spaces(200, &[50; 24]).unwrap();
        for (name, balance) in players {
            game.create_player(name, *balance).unwrap();
        }
        game
    }

    #[test]
    fn test_move_without_wrap() {
        let mut game = classic_game(&[("P1", 1000)]);

        let report = game.move_player("P1", 4).unwrap();
        assert_eq!(
            report,
            TurnReport::Moved {
                from: 0,
                to: 4,
                start_reward: None,
                rent: None,
            }
        );
        assert_eq!(game.account_balance("P1").unwrap(), 1000);
    }

    #[test]
    fn test_invalid_move_counts() {
        let mut game = classic_game(&[("P1", 1000)]);

        for count in [0, 7, -1, 100] {
            let result = game.move_player("P1", count);
            assert!(matches!(result, Err(GameError::InvalidMoveCount(c)) if c == count));
        }
        assert_eq!(game.current_position("P1").unwrap(), 0);
        assert_eq!(game.account_balance("P1").unwrap(), 1000);
        assert!(game.events().last().unwrap().is_refusal());
    }

    #[test]
    fn test_unknown_player_cannot_move() {
        let mut game = classic_game(&[]);
        assert!(matches!(
            game.move_player("ghost", 3),
            Err(GameError::UnknownPlayer(_))
        ));
    }

    #[test]
    fn test_move_before_board_is_built() {
        let mut game = RealEstateGame::new();
        game.create_player("P1", 100).unwrap();
        assert!(matches!(
            game.move_player("P1", 3),
            Err(GameError::BoardNotReady)
        ));
        assert_eq!(game.current_position("P1").unwrap(), 0);
    }

    #[test]
    fn test_passing_start_pays_reward_once() {
        let mut game = classic_game(&[("P1", 1000)]);
        for _ in 0..3 {
            game.move_player("P1", 6).unwrap();
        }
        game.move_player("P1", 5).unwrap();
        assert_eq!(game.current_position("P1").unwrap(), 23);

        let report = game.move_player("P1", 5).unwrap();
        assert_eq!(report.destination(), Some(3));
        assert_eq!(game.account_balance("P1").unwrap(), 1200);
    }

    #[test]
    fn test_landing_on_start_pays_reward() {
        let mut game = classic_game(&[("P1", 1000)]);
        for count in [6, 6, 6, 6] {
            game.move_player("P1", count).unwrap();
        }
        let report = game.move_player("P1", 1).unwrap();
        assert_eq!(report.destination(), Some(0));
        assert_eq!(game.account_balance("P1").unwrap(), 1200);
    }

    #[test]
    fn test_buy_space() {
        let mut game = classic_game(&[("P1", 1000)]);
        game.move_player("P1", 3).unwrap();

        assert_eq!(game.buy_space("P1").unwrap(), 250);
        assert_eq!(game.account_balance("P1").unwrap(), 750);
        assert_eq!(game.space(3).unwrap().owner(), Some("P1"));
        assert_eq!(game.owned_spaces("P1").unwrap(), vec![3]);
    }

    #[test]
    fn test_cannot_buy_start() {
        let mut game = classic_game(&[("P1", 1000)]);
        let result = game.buy_space("P1");
        assert!(matches!(result, Err(GameError::StartSpaceNotPurchasable)));
        assert_eq!(game.account_balance("P1").unwrap(), 1000);
        assert!(game.space(0).unwrap().owner().is_none());
    }

    #[test]
    fn test_cannot_buy_owned_space() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 1000)]);
        game.move_player("P1", 3).unwrap();
        game.buy_space("P1").unwrap();
        game.move_player("P2", 3).unwrap();

        let balance = game.account_balance("P2").unwrap();
        let result = game.buy_space("P2");
        assert!(matches!(
            result,
            Err(GameError::SpaceAlreadyOwned { index: 3, ref owner }) if owner == "P1"
        ));
        assert_eq!(game.account_balance("P2").unwrap(), balance);
        assert_eq!(game.space(3).unwrap().owner(), Some("P1"));

        // Owner buying again is refused too
        assert!(game.buy_space("P1").is_err());
        assert_eq!(game.account_balance("P1").unwrap(), 800);
    }

    #[test]
    fn test_insufficient_funds() {
        let mut game = classic_game(&[("P1", 249)]);
        game.move_player("P1", 2).unwrap();

        let result = game.buy_space("P1");
        assert!(matches!(
            result,
            Err(GameError::InsufficientFunds {
                balance: 249,
                price: 250
            })
        ));
        assert!(game.space(2).unwrap().owner().is_none());
    }

    #[test]
    fn test_exact_funds_buy() {
        let mut game = classic_game(&[("P1", 250)]);
        game.move_player("P1", 2).unwrap();
        assert_eq!(game.buy_space("P1").unwrap(), 250);
        assert_eq!(game.account_balance("P1").unwrap(), 0);
    }

    #[test]
    fn test_rent_on_own_space_is_free() {
        let mut game = classic_game(&[("P1", 1000)]);
        game.move_player("P1", 3).unwrap();
        game.buy_space("P1").unwrap();

        for count in [6, 6, 6, 4] {
            game.move_player("P1", count).unwrap();
        }
        assert_eq!(game.current_position("P1").unwrap(), 0);
        let report = game.move_player("P1", 3).unwrap();
        assert_eq!(report.destination(), Some(3));
        assert!(report.rent().is_none());
        assert_eq!(game.account_balance("P1").unwrap(), 950);
    }

    #[test]
    fn test_rent_paid_to_owner() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 1000)]);
        game.move_player("P1", 3).unwrap();
        game.buy_space("P1").unwrap();

        let report = game.move_player("P2", 3).unwrap();
        assert_eq!(
            report.rent(),
            Some(&RentSettlement {
                owner: "P1".into(),
                paid: 50,
                eliminated: false,
            })
        );
        assert_eq!(game.account_balance("P2").unwrap(), 950);
        assert_eq!(game.account_balance("P1").unwrap(), 800);
    }

    #[test]
    fn test_rent_equal_to_balance_eliminates() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 50)]);
        game.move_player("P1", 3).unwrap();
        game.buy_space("P1").unwrap();

        let report = game.move_player("P2", 3).unwrap();
        assert!(report.rent().unwrap().eliminated);
        assert_eq!(game.account_balance("P2").unwrap(), 0);
        assert_eq!(game.account_balance("P1").unwrap(), 800);
    }

    #[test]
    fn test_insolvent_player_is_eliminated() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 1000)]);
        // P2 buys two spaces, then is left with 30
        game.move_player("P2", 1).unwrap();
        game.buy_space("P2").unwrap();
        game.move_player("P2", 1).unwrap();
        game.buy_space("P2").unwrap();
        assert_eq!(game.account_balance("P2").unwrap(), 500);

        game.move_player("P1", 4).unwrap();
        game.buy_space("P1").unwrap();
        game.state.player_mut("P2").unwrap().adjust_balance(-470);

        let report = game.move_player("P2", 2).unwrap();
        assert_eq!(
            report.rent(),
            Some(&RentSettlement {
                owner: "P1".into(),
                paid: 30,
                eliminated: true,
            })
        );
        assert_eq!(game.account_balance("P2").unwrap(), 0);
        assert_eq!(game.account_balance("P1").unwrap(), 780);
        assert!(game.owned_spaces("P2").unwrap().is_empty());
        assert!(game.space(1).unwrap().owner().is_none());
        assert!(game.space(2).unwrap().owner().is_none());
        assert!(game.events().iter().any(|e| matches!(
            e,
            GameEvent::PlayerEliminated { name, released } if name == "P2" && released == &vec![1, 2]
        )));
    }

    #[test]
    fn test_eliminated_player_is_skipped() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 0)]);

        let report = game.move_player("P2", 3).unwrap();
        assert_eq!(report, TurnReport::Skipped);
        assert_eq!(game.current_position("P2").unwrap(), 0);

        // Even an invalid count is ignored for an eliminated player
        assert_eq!(game.move_player("P2", 9).unwrap(), TurnReport::Skipped);
    }

    #[test]
    fn test_eliminated_player_cannot_buy_free_space() {
        let mut game = RealEstateGame::new();
        game.create_spaces(200, &[0; 6]).unwrap();
        game.create_player("P1", 10).unwrap();
        game.move_player("P1", 2).unwrap();
        game.state.player_mut("P1").unwrap().adjust_balance(-10);

        assert!(matches!(
            game.buy_space("P1"),
            Err(GameError::InsufficientFunds { balance: 0, price: 0 })
        ));
    }

    #[test]
    fn test_check_game_over() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 1000)]);
        assert_eq!(game.check_game_over(), None);

        game.state.player_mut("P2").unwrap().adjust_balance(-1000);
        assert_eq!(game.check_game_over(), Some("P1".to_string()));
        assert_eq!(
            game.events().last(),
            Some(&GameEvent::Victory {
                winner: "P1".into()
            })
        );
    }

    #[test]
    fn test_victory_is_recorded_once() {
        let mut game = classic_game(&[("P1", 1000), ("P2", 0)]);
        game.take_events();

        for _ in 0..5 {
            assert_eq!(game.check_game_over(), Some("P1".to_string()));
        }
        let victories = game
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Victory { .. }))
            .count();
        assert_eq!(victories, 1);
    }

    #[test]
    fn test_zero_rent_owned_by_another() {
        let mut game = RealEstateGame::new();
        game.create_spaces(200, &[0; 6]).unwrap();
        game.create_player("P1", 100).unwrap();
        game.create_player("P2", 100).unwrap();
        game.move_player("P1", 2).unwrap();
        assert_eq!(game.buy_space("P1").unwrap(), 0);

        let report = game.move_player("P2", 2).unwrap();
        assert_eq!(
            report.rent(),
            Some(&RentSettlement {
                owner: "P1".into(),
                paid: 0,
                eliminated: false,
            })
        );
        assert_eq!(game.account_balance("P1").unwrap(), 100);
        assert_eq!(game.account_balance("P2").unwrap(), 100);
        assert_eq!(game.space(2).unwrap().owner(), Some("P1"));
        assert_eq!(
            game.events().last(),
            Some(&GameEvent::RentPaid {
                payer: "P2".into(),
                owner: "P1".into(),
                index: 2,
                amount: 0,
            })
        );
    }

    #[test]
    fn test_start_reward_overflow_is_refused() {
        let mut game = RealEstateGame::new();
        game.create_spaces(200, &[50; 6]).unwrap();
        game.create_player("P1", Money::MAX - 100).unwrap();
        game.move_player("P1", 6).unwrap();

        let result = game.move_player("P1", 6);
        assert!(matches!(result, Err(GameError::AmountTooLarge { .. })));
        assert_eq!(game.current_position("P1").unwrap(), 6);
        assert_eq!(game.account_balance("P1").unwrap(), Money::MAX - 100);
        assert!(game.events().last().unwrap().is_refusal());
    }

    #[test]
    fn test_rent_overflow_is_refused() {
        let mut game = RealEstateGame::new();
        game.create_spaces(300, &[50; 6]).unwrap();
        game.create_player("P1", Money::MAX - 70).unwrap();
        game.create_player("P2", 1000).unwrap();
        game.move_player("P1", 1).unwrap();
        game.buy_space("P1").unwrap();
        // A lap back to start leaves the owner 20 short of the maximum
        game.move_player("P1", 6).unwrap();
        assert_eq!(game.account_balance("P1").unwrap(), Money::MAX - 20);

        let result = game.move_player("P2", 1);
        assert!(matches!(result, Err(GameError::AmountTooLarge { .. })));
        assert_eq!(game.current_position("P2").unwrap(), 0);
        assert_eq!(game.account_balance("P2").unwrap(), 1000);
        assert_eq!(game.account_balance("P1").unwrap(), Money::MAX - 20);
    }

    #[test]
    fn test_no_contenders_means_no_winner() {
        let mut game = classic_game(&[("P1", 0), ("P2", 0)]);
        assert_eq!(game.check_game_over(), None);
    }
}
