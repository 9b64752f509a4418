//! # Estate Rules
//!
//! The data model of the Real Estate Game: spaces, players, the board they
//! share, and the pure rules that govern prices, movement and rent.
//! This crate holds state only; turn resolution lives in `estate_engine`.

pub mod entities;
pub mod game_state;
pub mod mechanics;

pub use entities::*;
pub use game_state::*;
pub use mechanics::*;
