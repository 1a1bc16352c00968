//! Core types: players, RNG, configuration.
//!
//! These are the building blocks the deck loader and round controller
//! share. Sessions are configured via `GameConfig` rather than by
//! modifying the controller.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, DEFAULT_HISTORY_LIMIT};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
