//! # Estate Engine
//!
//! Turn resolution for the Real Estate Game. This crate drives the state
//! defined in `estate_rules`: it builds the board, registers players, moves
//! them, sells spaces, collects rent and detects the winner.
//!
//! ## Core Components
//!
//! - **engine**: `RealEstateGame`, the owner of one game's board and players
//! - **events**: Structured outcomes and diagnostics, also logged via `tracing`
//! - **config**: TOML-loadable game setup
//! - **error**: The `GameError` returned by every refused operation
//!
//! Move distances are always supplied by the caller; the engine never rolls dice.

pub mod config;
pub mod engine;
pub mod error;
pub mod events;

pub use config::*;
pub use engine::*;
pub use error::{GameError, Result};
pub use events::*;
