//! Core engine types: sides, RNG, configuration, errors.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{BattleConfig, GameConfig, SelectionConfig};
pub use error::{ConfigError, GameError, Result};
