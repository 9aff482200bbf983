//! Ordered zone containers for one player.
//!
//! `ZoneManager` holds the deck, hand, field, graveyard, secrets and set-aside
//! sequences of a single player as `im::Vector`s of entity ids, so taking a
//! snapshot before a mutating loop is O(1).
//!
//! Ordering conventions:
//! - Deck: index 0 is the bottom, the last element is the top (drawn first).
//! - Hand / field: insertion order, which is display order.
//! - Graveyard / secrets: insertion order, informational only.
//!
//! The manager only keeps the sequences. Keeping each card's `zone` field in
//! sync with them is the job of the game's `move_to`, which is the single
//! write path for both.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Append (top of the deck, right end of hand and field).
    #[default]
    Top,
    /// Prepend (bottom of the deck).
    Bottom,
    /// Insert at a specific index, clamped to the zone length.
    Index(usize),
}

/// A player's zone sequences.
///
/// ```
/// use ccg_player::core::EntityId;
/// use ccg_player::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut zones = ZoneManager::new();
/// zones.insert(EntityId(10), Zone::Deck, ZonePosition::Top);
/// zones.insert(EntityId(11), Zone::Deck, ZonePosition::Bottom);
///
/// assert_eq!(zones.top_card(Zone::Deck), Some(EntityId(10)));
/// assert_eq!(zones.bottom_card(Zone::Deck), Some(EntityId(11)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    deck: Vector<EntityId>,
    hand: Vector<EntityId>,
    field: Vector<EntityId>,
    graveyard: Vector<EntityId>,
    secrets: Vector<EntityId>,
    setaside: Vector<EntityId>,
}

impl ZoneManager {
    /// Create an empty set of zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, zone: Zone) -> Option<&Vector<EntityId>> {
        match zone {
            Zone::Deck => Some(&self.deck),
            Zone::Hand => Some(&self.hand),
            Zone::Play => Some(&self.field),
            Zone::Graveyard => Some(&self.graveyard),
            Zone::Secret => Some(&self.secrets),
            Zone::SetAside => Some(&self.setaside),
            Zone::Invalid => None,
        }
    }

    fn list_mut(&mut self, zone: Zone) -> Option<&mut Vector<EntityId>> {
        match zone {
            Zone::Deck => Some(&mut self.deck),
            Zone::Hand => Some(&mut self.hand),
            Zone::Play => Some(&mut self.field),
            Zone::Graveyard => Some(&mut self.graveyard),
            Zone::Secret => Some(&mut self.secrets),
            Zone::SetAside => Some(&mut self.setaside),
            Zone::Invalid => None,
        }
    }

    /// The ordered contents of a zone. `Invalid` is always empty.
    ///
    /// Cloning the returned vector is O(1); use it as a snapshot when the
    /// zone is about to be mutated while iterating.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> Vector<EntityId> {
        self.list(zone).cloned().unwrap_or_default()
    }

    /// Iterate a zone in order without cloning.
    pub fn iter(&self, zone: Zone) -> impl Iterator<Item = EntityId> + '_ {
        self.list(zone).into_iter().flat_map(|list| list.iter().copied())
    }

    /// Add a card to a zone.
    ///
    /// Panics if the card is already in that zone, or if `zone` is `Invalid`.
    pub fn insert(&mut self, entity: EntityId, zone: Zone, position: ZonePosition) {
        let list = self
            .list_mut(zone)
            .unwrap_or_else(|| panic!("Zone {zone} has no container"));
        if list.contains(&entity) {
            panic!("Entity {entity} already in {zone}");
        }
        match position {
            ZonePosition::Top => list.push_back(entity),
            ZonePosition::Bottom => list.push_front(entity),
            ZonePosition::Index(i) => {
                let idx = i.min(list.len());
                list.insert(idx, entity);
            }
        }
    }

    /// Remove a card from a zone, preserving the order of the rest.
    ///
    /// Returns false if it was not there.
    pub fn remove(&mut self, entity: EntityId, zone: Zone) -> bool {
        let Some(list) = self.list_mut(zone) else {
            return false;
        };
        match list.index_of(&entity) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn contains(&self, entity: EntityId, zone: Zone) -> bool {
        self.list(zone).is_some_and(|list| list.contains(&entity))
    }

    /// Find which zone sequence holds a card, if any.
    #[must_use]
    pub fn zone_of(&self, entity: EntityId) -> Option<Zone> {
        Zone::CONTAINERS
            .into_iter()
            .find(|&zone| self.contains(entity, zone))
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.list(zone).map_or(0, Vector::len)
    }

    /// Whether a zone is empty.
    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.len(zone) == 0
    }

    /// Last card of a zone (top of the deck).
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<EntityId> {
        self.list(zone)?.last().copied()
    }

    /// First card of a zone (bottom of the deck).
    #[must_use]
    pub fn bottom_card(&self, zone: Zone) -> Option<EntityId> {
        self.list(zone)?.front().copied()
    }

    /// Uniformly permute a zone in place.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(list) = self.list_mut(zone) {
            let mut cards: Vec<EntityId> = list.iter().copied().collect();
            rng.shuffle(&mut cards);
            *list = cards.into_iter().collect();
        }
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Zone::CONTAINERS.into_iter().map(|zone| self.len(zone)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_positions() {
        let mut zones = ZoneManager::new();

        zones.insert(EntityId(10), Zone::Deck, ZonePosition::Top);
        zones.insert(EntityId(11), Zone::Deck, ZonePosition::Bottom);
        zones.insert(EntityId(12), Zone::Deck, ZonePosition::Top);
        zones.insert(EntityId(13), Zone::Deck, ZonePosition::Index(1));

        let order: Vec<_> = zones.iter(Zone::Deck).collect();
        assert_eq!(order, vec![EntityId(11), EntityId(13), EntityId(10), EntityId(12)]);
        assert_eq!(zones.top_card(Zone::Deck), Some(EntityId(12)));
        assert_eq!(zones.bottom_card(Zone::Deck), Some(EntityId(11)));
    }

    #[test]
    fn test_index_clamped() {
        let mut zones = ZoneManager::new();
        zones.insert(EntityId(1), Zone::Hand, ZonePosition::Top);
        zones.insert(EntityId(2), Zone::Hand, ZonePosition::Index(99));

        assert_eq!(zones.top_card(Zone::Hand), Some(EntityId(2)));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut zones = ZoneManager::new();
        for i in 1..=4 {
            zones.insert(EntityId(i), Zone::Hand, ZonePosition::Top);
        }

        assert!(zones.remove(EntityId(2), Zone::Hand));
        assert!(!zones.remove(EntityId(2), Zone::Hand));

        let order: Vec<_> = zones.iter(Zone::Hand).collect();
        assert_eq!(order, vec![EntityId(1), EntityId(3), EntityId(4)]);
    }

    #[test]
    fn test_zone_of() {
        let mut zones = ZoneManager::new();
        zones.insert(EntityId(5), Zone::Secret, ZonePosition::Top);

        assert_eq!(zones.zone_of(EntityId(5)), Some(Zone::Secret));
        assert_eq!(zones.zone_of(EntityId(6)), None);
        assert!(zones.contains(EntityId(5), Zone::Secret));
        assert!(!zones.contains(EntityId(5), Zone::Invalid));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut zones = ZoneManager::new();
        zones.insert(EntityId(1), Zone::Hand, ZonePosition::Top);
        zones.insert(EntityId(2), Zone::Hand, ZonePosition::Top);

        let snapshot = zones.cards(Zone::Hand);
        zones.remove(EntityId(1), Zone::Hand);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(zones.len(Zone::Hand), 1);
    }

    #[test]
    fn test_shuffle() {
        let mut zones = ZoneManager::new();
        for i in 0..20 {
            zones.insert(EntityId(i), Zone::Deck, ZonePosition::Top);
        }

        let before: Vec<_> = zones.iter(Zone::Deck).collect();
        zones.shuffle(Zone::Deck, &mut GameRng::new(42));
        let mut after: Vec<_> = zones.iter(Zone::Deck).collect();

        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_total_cards() {
        let mut zones = ZoneManager::new();
        assert_eq!(zones.total_cards(), 0);

        zones.insert(EntityId(1), Zone::Deck, ZonePosition::Top);
        zones.insert(EntityId(2), Zone::Graveyard, ZonePosition::Top);

        assert_eq!(zones.total_cards(), 2);
        assert!(zones.is_empty(Zone::Hand));
    }

    #[test]
    #[should_panic(expected = "already in")]
    fn test_duplicate_entity_panics() {
        let mut zones = ZoneManager::new();
        zones.insert(EntityId(10), Zone::Hand, ZonePosition::Top);
        zones.insert(EntityId(10), Zone::Hand, ZonePosition::Top);
    }

    #[test]
    #[should_panic(expected = "has no container")]
    fn test_invalid_zone_panics() {
        let mut zones = ZoneManager::new();
        zones.insert(EntityId(10), Zone::Invalid, ZonePosition::Top);
    }
}
