//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: the fixed set of battlefield locations
//! - `PlayState`: a player's standing in the match
//! - `ZoneManager`: one player's ordered zone sequences
//! - `ZonePosition`: where to insert into an ordered zone

pub mod manager;
pub mod zone;

pub use manager::{ZoneManager, ZonePosition};
pub use zone::{PlayState, Zone};
