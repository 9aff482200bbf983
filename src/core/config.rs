//! Game configuration.
//!
//! - `PlayerConfig`: per-side limits (hand size, mana cap, starting hand)
//! - `GameConfig`: board limits, hero health, turn order, plus the player config
//!
//! Both are serde-loadable; every field has a default so partial documents
//! work:
//!
//! ```
//! use ccg_player::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "max_minions_on_field": 5 }"#).unwrap();
//! assert_eq!(config.max_minions_on_field, 5);
//! assert_eq!(config.player.max_hand_size, 10);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::PlayerId;

/// Per-player limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Cards a hand can hold; further draws are burned.
    pub max_hand_size: usize,

    /// Cap on mana crystals.
    pub max_resources: i32,

    /// Starting hand for the first player (the second player gets one more).
    pub start_hand_size: usize,

    /// Turn timer in seconds. Informational; the turn loop enforces it.
    pub timeout: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hand_size: 10,
            max_resources: 10,
            start_hand_size: 3,
            timeout: 75,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minions a single field can hold.
    pub max_minions_on_field: usize,

    /// Health for heroes whose definition has no `health` attribute.
    pub hero_health: i64,

    /// Seat that goes first. `None` tosses a coin with the game RNG.
    pub first_player: Option<PlayerId>,

    /// Limits applied to every player.
    pub player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_minions_on_field: 7,
            hero_health: 30,
            first_player: None,
            player: PlayerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field size.
    #[must_use]
    pub fn with_max_minions(mut self, max: usize) -> Self {
        self.max_minions_on_field = max;
        self
    }

    /// Set the default hero health.
    #[must_use]
    pub fn with_hero_health(mut self, health: i64) -> Self {
        self.hero_health = health;
        self
    }

    /// Fix the first player instead of tossing a coin.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Replace the per-player limits.
    #[must_use]
    pub fn with_player_config(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_minions_on_field == 0 {
            return Err(GameError::InvalidConfig(
                "max_minions_on_field must be at least 1".into(),
            ));
        }
        if self.player.max_hand_size == 0 {
            return Err(GameError::InvalidConfig(
                "max_hand_size must be at least 1".into(),
            ));
        }
        if self.player.max_resources < 0 {
            return Err(GameError::InvalidConfig(
                "max_resources cannot be negative".into(),
            ));
        }
        if self.player.start_hand_size > self.player.max_hand_size {
            return Err(GameError::InvalidConfig(format!(
                "start_hand_size {} exceeds max_hand_size {}",
                self.player.start_hand_size, self.player.max_hand_size
            )));
        }
        Ok(())
    }
}
