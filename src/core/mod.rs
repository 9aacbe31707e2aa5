//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the building blocks the turn engine is assembled
//! from. Configuration is validated here, never inside the engine.

pub mod config;
pub mod config_file;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, InvalidConfig};
pub use config_file::ConfigFileError;
pub use error::{GameError, Result};
pub use player::Player;
pub use rng::GameRng;
