//! Mana economy tests, including property tests for the pool laws.

use ccg_player::player::ManaPool;
use proptest::prelude::*;

// =============================================================================
// Scenarios
// =============================================================================

/// Test the clamp and available-mana scenario.
#[test]
fn test_clamp_and_formula_scenario() {
    let mut pool = ManaPool::new(10);
    pool.set_max_mana(15);
    assert_eq!(pool.max_mana(), 10);

    pool.set_used_mana(3);
    pool.set_overload_locked(2);
    pool.set_temp_mana(1);
    assert_eq!(pool.mana(), 6);
}

/// Test a few turns of gaining crystals, spending and overloading.
#[test]
fn test_turn_sequence() {
    let mut pool = ManaPool::new(10);

    pool.begin_turn();
    assert_eq!(pool.mana(), 1);
    pool.pay_mana(1);
    pool.add_overload(1);
    pool.end_turn();

    pool.begin_turn();
    assert_eq!(pool.max_mana(), 2);
    assert_eq!(pool.mana(), 1, "one crystal locked by overload");
    pool.end_turn();

    pool.begin_turn();
    assert_eq!(pool.mana(), 3);
}

/// Test a zero cap pins crystals at zero.
#[test]
fn test_zero_cap() {
    let mut pool = ManaPool::new(0);
    pool.begin_turn();
    assert_eq!(pool.max_mana(), 0);
    pool.set_temp_mana(2);
    assert_eq!(pool.mana(), 2);
}

/// Test a loaded pool is clamped like any other write.
#[test]
fn test_deserialize_clamps() {
    let json = r#"{
        "max_mana": 50,
        "used_mana": -2,
        "temp_mana": 1,
        "overloaded": 0,
        "overload_locked": 0,
        "max_resources": 10
    }"#;
    let pool: ManaPool = serde_json::from_str(json).unwrap();
    assert_eq!(pool.max_mana(), 10);
    assert_eq!(pool.used_mana(), 0);
    assert_eq!(pool.mana(), 11);

    let back: ManaPool = serde_json::from_str(&serde_json::to_string(&pool).unwrap()).unwrap();
    assert_eq!(back, pool);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    /// `max_mana` always lands in `[0, max_resources]`.
    #[test]
    fn prop_max_mana_clamped(cap in 0i32..20, amount in any::<i32>()) {
        let mut pool = ManaPool::new(cap);
        pool.set_max_mana(amount);
        prop_assert!(pool.max_mana() >= 0);
        prop_assert!(pool.max_mana() <= cap);
        prop_assert_eq!(pool.max_mana(), amount.clamp(0, cap));
    }

    /// `mana = max(0, max - used - locked) + temp`.
    #[test]
    fn prop_mana_formula(
        max in 0i32..=10,
        used in 0i32..=i32::MAX,
        locked in 0i32..=i32::MAX,
        temp in 0i32..=i32::MAX,
    ) {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(max);
        pool.set_used_mana(used);
        pool.set_overload_locked(locked);
        pool.set_temp_mana(temp);
        let expected = (i64::from(max) - i64::from(used) - i64::from(locked)).max(0) + i64::from(temp);
        prop_assert_eq!(i64::from(pool.mana()), expected.min(i64::from(i32::MAX)));
    }

    /// Paying spends temporary mana first and charges the rest to `used_mana`.
    #[test]
    fn prop_pay_mana(
        temp in 0i32..=i32::MAX,
        used in 0i32..=i32::MAX,
        amount in 0i32..=i32::MAX,
    ) {
        let mut pool = ManaPool::new(10);
        pool.set_max_mana(10);
        pool.set_temp_mana(temp);
        pool.set_used_mana(used);

        let charged = pool.pay_mana(amount);

        let from_temp = temp.min(amount);
        prop_assert_eq!(charged, amount - from_temp);
        prop_assert_eq!(pool.temp_mana(), temp - from_temp);
        prop_assert_eq!(pool.used_mana(), used.saturating_add(charged));
    }

    /// Any sequence of turns keeps crystals within the cap.
    #[test]
    fn prop_turns_stay_in_cap(cap in 0i32..12, turns in 0usize..30) {
        let mut pool = ManaPool::new(cap);
        for turn in 0..turns {
            pool.begin_turn();
            prop_assert!(pool.max_mana() <= cap);
            prop_assert_eq!(pool.max_mana(), ((turn + 1) as i32).min(cap));
            pool.end_turn();
        }
    }
}
