//! The per-side player aggregate.
//!
//! A `Player` composes one side's zones, hero slots, mana, counters and the
//! aura sources applying to it. It holds plain state; operations that go
//! through the action queue live on [`PlayerContext`], which pairs a player
//! id with a [`Dispatcher`](crate::actions::Dispatcher).
//!
//! ## Key Types
//!
//! - `Player`: the aggregate
//! - `ManaPool`: crystals, spending, overload
//! - `PlayerContext`: queue-driven operations (draw, summon, steal, ...)
//! - `Choice`: a pending pick-one decision
//!
//! ## Derived views
//!
//! `characters`, `live_entities` and `actionable_entities` are iterators
//! built from the current containers on every call.

pub mod mana;
pub mod ops;

pub use mana::ManaPool;
pub use ops::{PlayerContext, SummonTarget};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auras::{AuraBuff, AuraSlot, TargetableByAuras};
use crate::cards::CardId;
use crate::core::{EntityId, PlayerConfig, PlayerId};
use crate::zones::{PlayState, Zone, ZoneManager};

/// A pending decision: pick among `cards`, offered by `source`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub source: EntityId,
    pub cards: Vec<EntityId>,
}

/// One side of the match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Deck blueprint, materialised by `prepare_for_game`.
    pub starting_deck: Vec<CardId>,
    /// Hero blueprint.
    pub starting_hero: CardId,

    zones: ZoneManager,
    pub(crate) hero: Option<EntityId>,
    pub(crate) hero_power: Option<EntityId>,
    pub(crate) weapon: Option<EntityId>,

    pub choice: Option<Choice>,
    playstate: PlayState,
    pub mana: ManaPool,

    fatigue_counter: u32,
    pub cards_drawn_this_turn: u32,
    pub minions_killed_this_turn: u32,
    pub times_hero_power_used_this_game: u32,
    pub last_card_played: Option<EntityId>,

    /// Turn timer in seconds.
    pub timeout: u32,
    pub cant_draw: bool,
    pub cant_fatigue: bool,
    pub max_hand_size: usize,
    base_start_hand_size: usize,
    pub(crate) first_player: bool,

    buffs: Vec<AuraBuff>,
}

impl Player {
    /// A player that has not been prepared yet.
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        deck: Vec<CardId>,
        hero: CardId,
        config: &PlayerConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            starting_deck: deck,
            starting_hero: hero,
            zones: ZoneManager::new(),
            hero: None,
            hero_power: None,
            weapon: None,
            choice: None,
            playstate: PlayState::Invalid,
            mana: ManaPool::new(config.max_resources),
            fatigue_counter: 0,
            cards_drawn_this_turn: 0,
            minions_killed_this_turn: 0,
            times_hero_power_used_this_game: 0,
            last_card_played: None,
            timeout: config.timeout,
            cant_draw: false,
            cant_fatigue: false,
            max_hand_size: config.max_hand_size,
            base_start_hand_size: config.start_hand_size,
            first_player: false,
            buffs: Vec::new(),
        }
    }

    /// The entity id standing for this player.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        EntityId::player(self.id)
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    pub(crate) fn zones_mut(&mut self) -> &mut ZoneManager {
        &mut self.zones
    }

    #[must_use]
    pub fn hero(&self) -> Option<EntityId> {
        self.hero
    }

    #[must_use]
    pub fn hero_power(&self) -> Option<EntityId> {
        self.hero_power
    }

    #[must_use]
    pub fn weapon(&self) -> Option<EntityId> {
        self.weapon
    }

    #[must_use]
    pub fn playstate(&self) -> PlayState {
        self.playstate
    }

    /// Move to `next`.
    ///
    /// Panics on a transition `PlayState::can_transition_to` forbids.
    pub fn set_playstate(&mut self, next: PlayState) {
        assert!(
            self.playstate.can_transition_to(next),
            "{} cannot go from {:?} to {:?}",
            self.name,
            self.playstate,
            next
        );
        info!(player = %self.id, from = ?self.playstate, to = ?next, "playstate changed");
        self.playstate = next;
    }

    #[must_use]
    pub fn fatigue_counter(&self) -> u32 {
        self.fatigue_counter
    }

    /// Count one fatigue and return the new counter.
    pub(crate) fn record_fatigue(&mut self) -> u32 {
        self.fatigue_counter += 1;
        self.fatigue_counter
    }

    #[must_use]
    pub fn is_first_player(&self) -> bool {
        self.first_player
    }

    /// Opening hand size; the player going second gets one extra card.
    #[must_use]
    pub fn start_hand_size(&self) -> usize {
        if self.first_player {
            self.base_start_hand_size
        } else {
            self.base_start_hand_size + 1
        }
    }

    /// Hero, then the field.
    pub fn characters(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.hero.into_iter().chain(self.zones.iter(Zone::Play))
    }

    /// Field, then hero, then weapon.
    pub fn live_entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.zones
            .iter(Zone::Play)
            .chain(self.hero)
            .chain(self.weapon)
    }

    /// Characters, then hand, then hero power.
    pub fn actionable_entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.characters()
            .chain(self.zones.iter(Zone::Hand))
            .chain(self.hero_power)
    }

    /// Mana available to spend.
    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana.mana()
    }

    pub fn pay_mana(&mut self, amount: i32) -> i32 {
        debug!(player = %self.id, amount, "paying mana");
        self.mana.pay_mana(amount)
    }

    /// Lock `amount` crystals next turn, unless an aura forbids overload.
    ///
    /// Returns whether the overload applied.
    pub fn overload(&mut self, amount: i32) -> bool {
        if self.has_slot(AuraSlot::CantOverload) {
            debug!(player = %self.id, amount, "overload prevented");
            return false;
        }
        self.mana.add_overload(amount);
        true
    }

    /// Healing after `healing_double`.
    #[must_use]
    pub fn get_heal(&self, amount: i64) -> i64 {
        doubled(amount, self.slot(AuraSlot::HealingDouble))
    }

    /// Start-of-turn bookkeeping: mana refill and per-turn counters.
    pub fn begin_turn(&mut self) {
        self.mana.begin_turn();
        self.cards_drawn_this_turn = 0;
        self.minions_killed_this_turn = 0;
    }

    pub fn end_turn(&mut self) {
        self.mana.end_turn();
    }

    #[must_use]
    pub fn buffs(&self) -> &[AuraBuff] {
        &self.buffs
    }

    /// Start applying an aura to this player.
    pub fn add_aura(&mut self, buff: AuraBuff) {
        debug!(player = %self.id, source = %buff.source, "aura applied");
        self.buffs.push(buff);
    }

    /// Stop applying every aura from `source`. Returns whether any was removed.
    pub fn remove_aura(&mut self, source: EntityId) -> bool {
        let before = self.buffs.len();
        self.buffs.retain(|buff| buff.source != source);
        let removed = self.buffs.len() != before;
        if removed {
            debug!(player = %self.id, source = %source, "aura removed");
        }
        removed
    }
}

impl TargetableByAuras for Player {
    type Source = AuraBuff;

    fn aura_sources(&self) -> &[AuraBuff] {
        &self.buffs
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// `amount` doubled `shift` times. Negative shifts count as zero.
pub(crate) fn doubled(amount: i64, shift: i64) -> i64 {
    amount << shift.clamp(0, 62)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(
            PlayerId::new(0),
            "Jaina",
            vec![CardId::new(1); 5],
            CardId::new(100),
            &PlayerConfig::default(),
        )
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.playstate(), PlayState::Invalid);
        assert_eq!(p.fatigue_counter(), 0);
        assert_eq!(p.max_hand_size, 10);
        assert_eq!(p.mana.max_resources(), 10);
        assert_eq!(p.timeout, 75);
        assert_eq!(p.hero(), None);
        assert_eq!(p.entity(), EntityId(0));
        assert_eq!(p.to_string(), "Jaina");
    }

    #[test]
    fn test_start_hand_size() {
        let mut p = player();
        p.first_player = true;
        let first = p.start_hand_size();
        p.first_player = false;
        assert_eq!(p.start_hand_size(), first + 1);
    }

    #[test]
    fn test_record_fatigue() {
        let mut p = player();
        assert_eq!(p.record_fatigue(), 1);
        assert_eq!(p.record_fatigue(), 2);
        assert_eq!(p.fatigue_counter(), 2);
    }

    #[test]
    fn test_playstate_transitions() {
        let mut p = player();
        p.set_playstate(PlayState::Playing);
        p.set_playstate(PlayState::Lost);
        p.set_playstate(PlayState::Tied);
        assert_eq!(p.playstate(), PlayState::Tied);
    }

    #[test]
    #[should_panic(expected = "cannot go from")]
    fn test_cannot_leave_terminal() {
        let mut p = player();
        p.set_playstate(PlayState::Playing);
        p.set_playstate(PlayState::Conceded);
        p.set_playstate(PlayState::Playing);
    }

    #[test]
    #[should_panic(expected = "cannot go from")]
    fn test_cannot_reenter_invalid() {
        let mut p = player();
        p.set_playstate(PlayState::Playing);
        p.set_playstate(PlayState::Invalid);
    }

    #[test]
    fn test_views() {
        let mut p = player();
        p.zones_mut().insert(EntityId(10), Zone::Play, Default::default());
        p.zones_mut().insert(EntityId(11), Zone::Play, Default::default());
        p.zones_mut().insert(EntityId(12), Zone::Hand, Default::default());

        assert_eq!(p.characters().collect::<Vec<_>>(), vec![EntityId(10), EntityId(11)]);

        p.hero = Some(EntityId(5));
        p.weapon = Some(EntityId(6));
        p.hero_power = Some(EntityId(7));

        assert_eq!(
            p.characters().collect::<Vec<_>>(),
            vec![EntityId(5), EntityId(10), EntityId(11)]
        );
        assert_eq!(
            p.live_entities().collect::<Vec<_>>(),
            vec![EntityId(10), EntityId(11), EntityId(5), EntityId(6)]
        );
        assert_eq!(
            p.actionable_entities().collect::<Vec<_>>(),
            vec![EntityId(5), EntityId(10), EntityId(11), EntityId(12), EntityId(7)]
        );
    }

    #[test]
    fn test_overload_and_cant_overload() {
        let mut p = player();
        assert!(p.overload(2));
        assert_eq!(p.mana.overloaded(), 2);

        p.add_aura(AuraBuff::new(EntityId(20)).with(AuraSlot::CantOverload, 1));
        assert!(!p.overload(3));
        assert_eq!(p.mana.overloaded(), 2);

        assert!(p.remove_aura(EntityId(20)));
        assert!(p.overload(1));
        assert_eq!(p.mana.overloaded(), 3);
    }

    #[test]
    fn test_heal_doubling() {
        let mut p = player();
        assert_eq!(p.get_heal(3), 3);
        p.add_aura(AuraBuff::new(EntityId(20)).with(AuraSlot::HealingDouble, 1));
        assert_eq!(p.get_heal(3), 6);
        p.add_aura(AuraBuff::new(EntityId(21)).with(AuraSlot::HealingDouble, 1));
        assert_eq!(p.get_heal(3), 12);
    }

    #[test]
    fn test_begin_turn_resets_counters() {
        let mut p = player();
        p.cards_drawn_this_turn = 3;
        p.minions_killed_this_turn = 2;
        p.begin_turn();
        assert_eq!(p.cards_drawn_this_turn, 0);
        assert_eq!(p.minions_killed_this_turn, 0);
        assert_eq!(p.mana.max_mana(), 1);
    }

    #[test]
    fn test_doubled() {
        assert_eq!(doubled(5, 0), 5);
        assert_eq!(doubled(5, 2), 20);
        assert_eq!(doubled(5, -1), 5);
    }
}
