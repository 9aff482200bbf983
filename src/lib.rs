//! # ccg-player
//!
//! The player-side rules core of a turn-based card game simulator.
//!
//! ## Design Principles
//!
//! 1. **Queued mutation**: Every visible state change is an `Action` handed
//!    to a `Dispatcher`, so triggered effects observe changes in one
//!    consistent order.
//!
//! 2. **Live aggregation**: Derived attributes (spell damage, healing,
//!    overload immunity) are folded from the active aura sources on every
//!    read. Nothing derived is cached.
//!
//! 3. **Arena of ids**: Cards live in one entity arena keyed by `EntityId`.
//!    Zones, controllers and creators are ids, never references.
//!
//! ## Modules
//!
//! - `core`: Entity ids, players, RNG, configuration, errors
//! - `zones`: Zone and play-state enums, per-player containers
//! - `cards`: Card definitions, registry and runtime card entities
//! - `auras`: Aura slots, aggregation policies and sources
//! - `player`: The `Player` aggregate, mana economy and queued operations
//! - `actions`: Actions, results and the `Dispatcher` contract
//! - `game`: The concrete dispatcher and its builder

pub mod actions;
pub mod auras;
pub mod cards;
pub mod core;
pub mod game;
pub mod player;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    EntityId, GameConfig, GameError, GameRng, PlayerConfig, PlayerId, PlayerMap,
    Result,
};

pub use crate::zones::{PlayState, Zone, ZoneManager, ZonePosition};

pub use crate::cards::{
    AttributeKey, AttributeValue, Attributes, Card, CardDefinition, CardId, CardRegistry,
    CardType,
};

pub use crate::auras::{Aggregation, AuraBuff, AuraSlot, AuraSource, TargetableByAuras};

pub use crate::player::{Choice, ManaPool, Player, PlayerContext, SummonTarget};

pub use crate::actions::{Action, ActionResult, Dispatcher, QueuedAction};

pub use crate::game::{ActionTrigger, Game, GameBuilder};
