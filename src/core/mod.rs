//! Core engine types: entity ids, players, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PlayerConfig};
pub use entity::EntityId;
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
