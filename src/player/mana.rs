//! The mana economy.
//!
//! `ManaPool` owns the crystal count and everything that eats into it. All
//! writes go through setters; `max_mana` in particular is clamped to
//! `[0, max_resources]` on every write.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A player's mana crystals, spending and overload.
///
/// ```
/// use ccg_player::player::ManaPool;
///
/// let mut pool = ManaPool::new(10);
/// pool.set_max_mana(15);
/// assert_eq!(pool.max_mana(), 10);
///
/// pool.set_used_mana(3);
/// pool.set_overload_locked(2);
/// pool.set_temp_mana(1);
/// assert_eq!(pool.mana(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawManaPool")]
pub struct ManaPool {
    max_mana: i32,
    used_mana: i32,
    temp_mana: i32,
    overloaded: i32,
    overload_locked: i32,
    max_resources: i32,
}

/// Wire shape of a [`ManaPool`]. Loaded values go back through the setters.
#[derive(Deserialize)]
struct RawManaPool {
    max_mana: i32,
    used_mana: i32,
    temp_mana: i32,
    overloaded: i32,
    overload_locked: i32,
    max_resources: i32,
}

impl From<RawManaPool> for ManaPool {
    fn from(raw: RawManaPool) -> Self {
        let mut pool = ManaPool::new(raw.max_resources);
        pool.set_max_mana(raw.max_mana);
        pool.set_used_mana(raw.used_mana);
        pool.set_temp_mana(raw.temp_mana);
        pool.set_overloaded(raw.overloaded);
        pool.set_overload_locked(raw.overload_locked);
        pool
    }
}

impl ManaPool {
    /// An empty pool capped at `max_resources` crystals.
    #[must_use]
    pub fn new(max_resources: i32) -> Self {
        Self {
            max_resources: max_resources.max(0),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn max_resources(&self) -> i32 {
        self.max_resources
    }

    #[must_use]
    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    /// Set the crystal count, clamped to `[0, max_resources]`.
    pub fn set_max_mana(&mut self, amount: i32) {
        self.max_mana = amount.clamp(0, self.max_resources);
        debug!(max_mana = self.max_mana, requested = amount, "mana crystals set");
    }

    /// Mana available to spend right now.
    #[must_use]
    pub fn mana(&self) -> i32 {
        self.max_mana
            .saturating_sub(self.used_mana)
            .saturating_sub(self.overload_locked)
            .max(0)
            .saturating_add(self.temp_mana)
    }

    /// Spend `amount`, temporary mana first.
    ///
    /// Returns the part charged to `used_mana`.
    pub fn pay_mana(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let from_temp = self.temp_mana.min(amount);
        self.temp_mana -= from_temp;
        let charged = amount - from_temp;
        self.used_mana = self.used_mana.saturating_add(charged);
        debug!(amount, from_temp, charged, "paid mana");
        charged
    }

    #[must_use]
    pub fn used_mana(&self) -> i32 {
        self.used_mana
    }

    pub fn set_used_mana(&mut self, amount: i32) {
        self.used_mana = amount.max(0);
    }

    #[must_use]
    pub fn temp_mana(&self) -> i32 {
        self.temp_mana
    }

    pub fn set_temp_mana(&mut self, amount: i32) {
        self.temp_mana = amount.max(0);
    }

    #[must_use]
    pub fn overloaded(&self) -> i32 {
        self.overloaded
    }

    pub fn set_overloaded(&mut self, amount: i32) {
        self.overloaded = amount.max(0);
    }

    /// Lock `amount` more crystals next turn.
    pub fn add_overload(&mut self, amount: i32) {
        self.overloaded = self.overloaded.saturating_add(amount.max(0));
        debug!(amount, overloaded = self.overloaded, "overloaded");
    }

    #[must_use]
    pub fn overload_locked(&self) -> i32 {
        self.overload_locked
    }

    pub fn set_overload_locked(&mut self, amount: i32) {
        self.overload_locked = amount.max(0);
    }

    /// Turn start: gain a crystal, refill, and lock last turn's overload.
    pub fn begin_turn(&mut self) {
        self.set_max_mana(self.max_mana.saturating_add(1));
        self.set_used_mana(0);
        self.set_overload_locked(self.overloaded);
        self.set_overloaded(0);
    }

    /// Turn end: temporary mana expires.
    pub fn end_turn(&mut self) {
        self.set_temp_mana(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(15);
        assert_eq!(pool.max_mana(), 10);
        pool.set_max_mana(-3);
        assert_eq!(pool.max_mana(), 0);
    }

    #[test]
    fn test_mana_formula() {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(10);
        pool.set_used_mana(3);
        pool.set_overload_locked(2);
        pool.set_temp_mana(1);
        assert_eq!(pool.mana(), 6);
    }

    #[test]
    fn test_mana_never_negative_before_temp() {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(2);
        pool.set_used_mana(2);
        pool.set_overload_locked(3);
        pool.set_temp_mana(2);
        assert_eq!(pool.mana(), 2);
    }

    #[test]
    fn test_pay_uses_temp_first() {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(5);
        pool.set_temp_mana(2);

        assert_eq!(pool.pay_mana(3), 1);
        assert_eq!(pool.temp_mana(), 0);
        assert_eq!(pool.used_mana(), 1);
        assert_eq!(pool.mana(), 4);

        assert_eq!(pool.pay_mana(0), 0);
    }

    #[test]
    fn test_pay_all_from_temp() {
        let mut pool = ManaPool::new(10);
        pool.set_temp_mana(4);
        assert_eq!(pool.pay_mana(3), 0);
        assert_eq!(pool.temp_mana(), 1);
        assert_eq!(pool.used_mana(), 0);
    }

    #[test]
    fn test_turn_cycle() {
        let mut pool = ManaPool::new(10);
        pool.begin_turn();
        pool.begin_turn();
        assert_eq!(pool.max_mana(), 2);

        pool.pay_mana(2);
        pool.add_overload(1);
        pool.set_temp_mana(1);
        pool.end_turn();
        assert_eq!(pool.temp_mana(), 0);

        pool.begin_turn();
        assert_eq!(pool.max_mana(), 3);
        assert_eq!(pool.used_mana(), 0);
        assert_eq!(pool.overload_locked(), 1);
        assert_eq!(pool.overloaded(), 0);
        assert_eq!(pool.mana(), 2);
    }

    #[test]
    fn test_huge_counters_saturate() {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(10);
        pool.set_used_mana(i32::MAX);
        pool.set_overload_locked(i32::MAX);
        pool.set_temp_mana(i32::MAX);
        assert_eq!(pool.mana(), i32::MAX);

        pool.set_temp_mana(0);
        pool.set_used_mana(0);
        assert_eq!(pool.pay_mana(i32::MAX), i32::MAX);
        assert_eq!(pool.pay_mana(1), 1);
        assert_eq!(pool.used_mana(), i32::MAX);

        pool.add_overload(i32::MAX);
        pool.add_overload(1);
        assert_eq!(pool.overloaded(), i32::MAX);
    }

    #[test]
    fn test_begin_turn_respects_cap() {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(10);
        pool.begin_turn();
        assert_eq!(pool.max_mana(), 10);
    }
}
