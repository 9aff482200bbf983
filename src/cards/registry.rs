//! Card registry for definition lookup.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::{GameError, Result};

/// Registry of card definitions.
///
/// ```
/// use ccg_player::cards::{CardDefinition, CardId, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Wisp", CardType::Minion));
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Wisp");
/// assert!(registry.lookup(CardId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Builder-style registration.
    #[must_use]
    pub fn with(mut self, card: CardDefinition) -> Self {
        self.register(card);
        self
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a definition, or `GameError::UnknownCard`.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition> {
        self.cards.get(&id).ok_or(GameError::UnknownCard(id))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_register_and_get() {
        let registry = CardRegistry::new()
            .with(CardDefinition::new(CardId::new(1), "Wisp", CardType::Minion))
            .with(CardDefinition::new(CardId::new(2), "Fireball", CardType::Spell));

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains(CardId::new(2)));
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Wisp");
        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_lookup_error() {
        let registry = CardRegistry::new();
        assert_eq!(
            registry.lookup(CardId::new(5)).unwrap_err(),
            GameError::UnknownCard(CardId::new(5))
        );
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "A", CardType::Minion));
        registry.register(CardDefinition::new(CardId::new(1), "B", CardType::Minion));
    }
}
