//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for card definitions
//! - `CardType`: hero, hero power, minion, spell, weapon, enchantment
//! - `CardDefinition`: static card data with attributes
//! - `Card`: the runtime entity (zone, controller, creator, play counter)
//! - `CardRegistry`: definition lookup

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use definition::{CardDefinition, CardId, CardType};
pub use instance::Card;
pub use registry::CardRegistry;
