//! Aura slots and their aggregation policies.

use serde::{Deserialize, Serialize};

/// How contributions to a slot combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aggregation {
    /// Numeric total, 0 when nobody contributes.
    Sum,
    /// 1 if any contribution is non-zero, else 0.
    Any,
}

impl Aggregation {
    /// Fold contributions with this policy.
    ///
    /// ```
    /// use ccg_player::auras::Aggregation;
    ///
    /// assert_eq!(Aggregation::Sum.fold([1, 2, 3]), 6);
    /// assert_eq!(Aggregation::Any.fold([0, 2]), 1);
    /// assert_eq!(Aggregation::Any.fold([]), 0);
    /// ```
    pub fn fold(self, values: impl IntoIterator<Item = i64>) -> i64 {
        let mut values = values.into_iter();
        match self {
            Aggregation::Sum => values.sum(),
            Aggregation::Any => i64::from(values.any(|v| v != 0)),
        }
    }
}

/// A named player-level attribute that auras contribute to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuraSlot {
    CantOverload,
    ExtraBattlecries,
    ExtraDeathrattles,
    /// Left-shift applied to healing.
    HealingDouble,
    /// Left-shift applied to hero power damage.
    HeroPowerDouble,
    OutgoingHealingAdjustment,
    Shadowform,
    /// Left-shift applied to spell damage.
    SpellpowerDouble,
    /// Player-level spell damage adjustment, on top of minion spellpower.
    Spellpower,
}

impl AuraSlot {
    pub const ALL: [AuraSlot; 9] = [
        AuraSlot::CantOverload,
        AuraSlot::ExtraBattlecries,
        AuraSlot::ExtraDeathrattles,
        AuraSlot::HealingDouble,
        AuraSlot::HeroPowerDouble,
        AuraSlot::OutgoingHealingAdjustment,
        AuraSlot::Shadowform,
        AuraSlot::SpellpowerDouble,
        AuraSlot::Spellpower,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AuraSlot::CantOverload => "cant_overload",
            AuraSlot::ExtraBattlecries => "extra_battlecries",
            AuraSlot::ExtraDeathrattles => "extra_deathrattles",
            AuraSlot::HealingDouble => "healing_double",
            AuraSlot::HeroPowerDouble => "hero_power_double",
            AuraSlot::OutgoingHealingAdjustment => "outgoing_healing_adjustment",
            AuraSlot::Shadowform => "shadowform",
            AuraSlot::SpellpowerDouble => "spellpower_double",
            AuraSlot::Spellpower => "spellpower",
        }
    }

    /// Numeric slots sum, flag slots are "any".
    #[must_use]
    pub const fn policy(self) -> Aggregation {
        match self {
            AuraSlot::HealingDouble
            | AuraSlot::HeroPowerDouble
            | AuraSlot::SpellpowerDouble
            | AuraSlot::Spellpower => Aggregation::Sum,
            AuraSlot::CantOverload
            | AuraSlot::ExtraBattlecries
            | AuraSlot::ExtraDeathrattles
            | AuraSlot::OutgoingHealingAdjustment
            | AuraSlot::Shadowform => Aggregation::Any,
        }
    }

    /// Definition attribute holding a card's contribution, e.g. `aura.shadowform`.
    #[must_use]
    pub fn attribute_key(self) -> String {
        format!("aura.{}", self.name())
    }
}

impl std::fmt::Display for AuraSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
