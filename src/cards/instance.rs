//! Card entities - runtime card state.
//!
//! A `Card` is one concrete copy of a definition in a game: it has an entity
//! id, a controller, a zone, a play-order counter and a bag of mutable state
//! (damage taken, temporary buffs).
//!
//! `zone`, `controller` and `card_type` decide which container holds the
//! card, so they are only writable from inside the crate.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardType};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::zones::Zone;

/// A card entity.
///
/// ## State Values
///
/// `state` uses `FxHashMap<String, i64>`: booleans are 0/1, entity
/// references are `EntityId.0`. Known keys: `damage`, `spellpower`,
/// `heropower_damage` (the last two add to the definition's values).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Copied from the definition so routing doesn't need the registry.
    pub(crate) card_type: CardType,

    /// The entity that created this card, if any. Informational only.
    pub creator: Option<EntityId>,

    /// Game-wide creation order.
    pub play_counter: u32,

    controller: PlayerId,

    zone: Zone,

    /// Mutable instance state.
    #[serde(default)]
    pub state: FxHashMap<String, i64>,
}

impl Card {
    /// Create an unplaced card (zone `Invalid`) controlled by `controller`.
    #[must_use]
    pub fn new(
        entity_id: EntityId,
        definition: &CardDefinition,
        controller: PlayerId,
        play_counter: u32,
    ) -> Self {
        Self {
            entity_id,
            card_id: definition.id,
            card_type: definition.card_type,
            creator: None,
            play_counter,
            controller,
            zone: Zone::Invalid,
            state: FxHashMap::default(),
        }
    }

    /// Set the creator (builder pattern).
    #[must_use]
    pub fn with_creator(mut self, creator: Option<EntityId>) -> Self {
        self.creator = creator;
        self
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn controller(&self) -> PlayerId {
        self.controller
    }

    pub(crate) fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    pub(crate) fn set_controller(&mut self, controller: PlayerId) {
        self.controller = controller;
    }

    /// Get a state value with a default.
    #[must_use]
    pub fn get_state(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).copied().unwrap_or(default)
    }

    /// Set a state value.
    pub fn set_state(&mut self, key: impl Into<String>, value: i64) {
        self.state.insert(key.into(), value);
    }

    /// Modify a state value by delta.
    pub fn modify_state(&mut self, key: &str, delta: i64) {
        let current = self.get_state(key, 0);
        self.state.insert(key.to_string(), current + delta);
    }

    /// Damage taken so far.
    #[must_use]
    pub fn damage(&self) -> i64 {
        self.get_state("damage", 0)
    }

    /// Spell damage this card adds while on the field.
    #[must_use]
    pub fn spellpower(&self, definition: &CardDefinition) -> i64 {
        definition.get_int("spellpower", 0) + self.get_state("spellpower", 0)
    }

    /// Hero-power damage this card adds while on the field.
    #[must_use]
    pub fn heropower_damage(&self, definition: &CardDefinition) -> i64 {
        definition.get_int("heropower_damage", 0) + self.get_state("heropower_damage", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minion() -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Dalaran Mage", CardType::Minion)
            .with_attr("spellpower", 1i32)
    }

    #[test]
    fn test_new_card_is_unplaced() {
        let card = Card::new(EntityId(10), &minion(), PlayerId::new(0), 4);

        assert_eq!(card.entity_id, EntityId(10));
        assert_eq!(card.card_id, CardId::new(1));
        assert_eq!(card.card_type(), CardType::Minion);
        assert_eq!(card.controller(), PlayerId::new(0));
        assert_eq!(card.zone(), Zone::Invalid);
        assert_eq!(card.play_counter, 4);
        assert_eq!(card.creator, None);
    }

    #[test]
    fn test_creator() {
        let card = Card::new(EntityId(10), &minion(), PlayerId::new(0), 0)
            .with_creator(Some(EntityId(3)));
        assert_eq!(card.creator, Some(EntityId(3)));
    }

    #[test]
    fn test_state() {
        let mut card = Card::new(EntityId(10), &minion(), PlayerId::new(0), 0);

        assert_eq!(card.damage(), 0);
        card.modify_state("damage", 2);
        card.modify_state("damage", 3);
        assert_eq!(card.damage(), 5);

        card.set_state("damage", 1);
        assert_eq!(card.get_state("damage", 0), 1);
    }

    #[test]
    fn test_spellpower_adds_buffs() {
        let definition = minion();
        let mut card = Card::new(EntityId(10), &definition, PlayerId::new(0), 0);

        assert_eq!(card.spellpower(&definition), 1);
        card.modify_state("spellpower", 2);
        assert_eq!(card.spellpower(&definition), 3);
        assert_eq!(card.heropower_damage(&definition), 0);
    }
}
