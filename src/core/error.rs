//! Error types.
//!
//! Only lookups and configuration are fallible. Rule no-ops (drawing while
//! `cant_draw`, milling an empty deck) are not errors, and broken invariants
//! (a card in two containers, a second `prepare_for_game`) panic.

use thiserror::Error;

use super::entity::EntityId;
use crate::cards::CardId;
use crate::zones::Zone;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown card definition: {0}")]
    UnknownCard(CardId),

    #[error("Entity not found: {0}")]
    UnknownEntity(EntityId),

    #[error("Action resolved without creating a card")]
    NoCardCreated,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(usize),

    #[error("Cards cannot be created directly in {0}")]
    InvalidPlacement(Zone),
}

pub type Result<T> = std::result::Result<T, GameError>;
