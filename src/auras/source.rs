//! Aura sources and the targets they apply to.
//!
//! A target keeps the set of sources currently applying to it. Reading a
//! slot folds their contributions on every call; nothing is cached, so a
//! source that is removed stops counting on the very next read.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::slot::AuraSlot;
use crate::core::EntityId;

/// Anything that can contribute to aura slots.
pub trait AuraSource {
    /// The entity providing the aura.
    fn source(&self) -> EntityId;

    /// This source's contribution to `slot`, if it has one.
    fn contribution(&self, slot: AuraSlot) -> Option<i64>;
}

/// An applied aura: a source entity and its per-slot contributions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraBuff {
    pub source: EntityId,
    pub contributions: SmallVec<[(AuraSlot, i64); 2]>,
}

impl AuraBuff {
    #[must_use]
    pub fn new(source: EntityId) -> Self {
        Self {
            source,
            contributions: SmallVec::new(),
        }
    }

    /// Add a slot contribution (builder pattern).
    #[must_use]
    pub fn with(mut self, slot: AuraSlot, value: i64) -> Self {
        self.contributions.push((slot, value));
        self
    }
}

impl AuraSource for AuraBuff {
    fn source(&self) -> EntityId {
        self.source
    }

    fn contribution(&self, slot: AuraSlot) -> Option<i64> {
        let mut matching = self
            .contributions
            .iter()
            .filter(|(s, _)| *s == slot)
            .map(|(_, v)| *v)
            .peekable();
        matching.peek()?;
        Some(slot.policy().fold(matching))
    }
}

/// Something auras can apply to.
///
/// ```
/// use ccg_player::auras::{AuraBuff, AuraSlot, TargetableByAuras};
/// use ccg_player::core::EntityId;
///
/// struct Target(Vec<AuraBuff>);
///
/// impl TargetableByAuras for Target {
///     type Source = AuraBuff;
///     fn aura_sources(&self) -> &[AuraBuff] {
///         &self.0
///     }
/// }
///
/// let mut target = Target(vec![AuraBuff::new(EntityId(5)).with(AuraSlot::Spellpower, 1)]);
/// assert_eq!(target.slot(AuraSlot::Spellpower), 1);
///
/// target.0.clear();
/// assert_eq!(target.slot(AuraSlot::Spellpower), 0);
/// ```
pub trait TargetableByAuras {
    type Source: AuraSource;

    /// Sources currently applying to this target.
    fn aura_sources(&self) -> &[Self::Source];

    /// Current value of `slot`, folded with the slot's policy.
    fn slot(&self, slot: AuraSlot) -> i64 {
        slot.policy().fold(
            self.aura_sources()
                .iter()
                .filter_map(|source| source.contribution(slot)),
        )
    }

    /// `slot` read as a flag.
    fn has_slot(&self, slot: AuraSlot) -> bool {
        self.slot(slot) != 0
    }
}
