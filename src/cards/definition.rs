//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: its name,
//! its `CardType`, and attributes. Per-instance data (zone, controller,
//! damage) lives in [`Card`](super::Card).
//!
//! ## Attributes the engine reads
//!
//! | key | used for |
//! |---|---|
//! | `health` | hero health (falls back to `GameConfig::hero_health`) |
//! | `spellpower` | minion spell damage bonus |
//! | `heropower_damage` | minion hero-power damage bonus |
//! | `hero_power` | definition id of the power a hero brings |
//! | `aura.<slot>` | player-level aura contribution while in play |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::auras::AuraSlot;

/// Identifier of a card definition (e.g. "Fireball"), not of an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Kind of card, which decides where it goes when summoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Hero,
    HeroPower,
    Minion,
    Spell,
    Weapon,
    Enchantment,
}

/// Static card definition.
///
/// ```
/// use ccg_player::auras::AuraSlot;
/// use ccg_player::cards::{CardDefinition, CardId, CardType};
///
/// let velen = CardDefinition::new(CardId::new(7), "Prophet Velen", CardType::Minion)
///     .with_aura(AuraSlot::SpellpowerDouble, 1)
///     .with_aura(AuraSlot::HealingDouble, 1);
///
/// assert_eq!(velen.aura_contributions().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub attributes: Attributes,
}

impl CardDefinition {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            attributes: Attributes::default(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Contribute `value` to `slot` of the controller while in play.
    #[must_use]
    pub fn with_aura(self, slot: AuraSlot, value: i64) -> Self {
        self.with_attr(slot.attribute_key(), value)
    }

    /// Make a hero bring a hero power when summoned.
    #[must_use]
    pub fn with_hero_power(self, power: CardId) -> Self {
        self.with_attr("hero_power", power.raw() as i64)
    }

    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key)
            .and_then(|v| v.as_int())
            .unwrap_or(default)
    }

    /// Get a boolean attribute with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_attr(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    /// The hero power this hero brings, if any.
    #[must_use]
    pub fn hero_power(&self) -> Option<CardId> {
        self.get_attr("hero_power")
            .and_then(|v| v.as_int())
            .and_then(|raw| u32::try_from(raw).ok())
            .map(CardId::new)
    }

    /// Every non-zero `aura.<slot>` attribute.
    #[must_use]
    pub fn aura_contributions(&self) -> SmallVec<[(AuraSlot, i64); 2]> {
        AuraSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                let value = self.get_int(&slot.attribute_key(), 0);
                (value != 0).then_some((slot, value))
            })
            .collect()
    }
}
