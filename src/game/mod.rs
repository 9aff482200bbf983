//! The concrete dispatcher.
//!
//! `Game` owns the players, the entity arena, the card registry and the RNG,
//! and resolves queued actions. It is the only place that moves cards
//! between containers, so every card's `zone` always matches the container
//! holding it.
//!
//! ## Resolution order
//!
//! `queue_actions` resolves entries strictly in order. After each action
//! resolves, every `ActionTrigger` sees it and may return follow-ups; those
//! go to the back of a FIFO queue that is drained before the next top-level
//! entry starts. Follow-ups of follow-ups join the same queue. Once the
//! queue is empty, playstates are updated (dead heroes lose, a last player
//! standing wins).
//!
//! ## Key Types
//!
//! - `Game`: state plus the `Dispatcher` implementation
//! - `GameBuilder`: validated construction
//! - `ActionTrigger`: reaction hook for resolved actions

mod builder;
mod resolve;
mod trigger;

pub use builder::GameBuilder;
pub use trigger::ActionTrigger;

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::actions::{Action, ActionResult, Dispatcher, QueuedAction};
use crate::auras::AuraBuff;
use crate::cards::{Card, CardRegistry, CardType};
use crate::core::{EntityId, GameConfig, GameRng, PlayerId, PlayerMap, Result};
use crate::player::{Player, PlayerContext};
use crate::zones::{Zone, ZonePosition};

/// A match in progress.
pub struct Game {
    config: GameConfig,
    registry: CardRegistry,
    players: PlayerMap<Player>,
    entities: FxHashMap<EntityId, Card>,
    next_entity: u32,
    play_counter: u32,
    rng: GameRng,
    current_player: Option<PlayerId>,
    pending: VecDeque<(EntityId, QueuedAction)>,
    triggers: Vec<Box<dyn ActionTrigger>>,
}

impl Game {
    pub(crate) fn new(
        config: GameConfig,
        registry: CardRegistry,
        players: PlayerMap<Player>,
        seed: u64,
    ) -> Self {
        let next_entity = EntityId::first_non_player(players.player_count());
        Self {
            config,
            registry,
            players,
            entities: FxHashMap::default(),
            next_entity,
            play_counter: 0,
            rng: GameRng::new(seed),
            current_player: None,
            pending: VecDeque::new(),
            triggers: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> + '_ {
        self.players.iter()
    }

    /// Operations for one player.
    pub fn player_context(&mut self, player: PlayerId) -> PlayerContext<'_, Self> {
        PlayerContext::new(self, player)
    }

    /// Register a reaction hook.
    pub fn add_trigger(&mut self, trigger: impl ActionTrigger + 'static) {
        self.triggers.push(Box::new(trigger));
    }

    pub fn card_mut(&mut self, entity: EntityId) -> Option<&mut Card> {
        self.entities.get_mut(&entity)
    }

    #[must_use]
    pub fn card_zone(&self, entity: EntityId) -> Option<Zone> {
        self.entities.get(&entity).map(Card::zone)
    }

    /// Every card entity id, in no particular order.
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// The controller of `source`: the player itself, or a card's controller.
    #[must_use]
    pub fn controller_of(&self, source: EntityId) -> Option<PlayerId> {
        source
            .as_player(self.player_count())
            .or_else(|| self.entities.get(&source).map(Card::controller))
    }

    /// Free spaces on a player's field.
    #[must_use]
    pub fn minion_slots(&self, player: PlayerId) -> usize {
        self.config
            .max_minions_on_field
            .saturating_sub(self.players[player].zones().len(Zone::Play))
    }

    /// Remaining health of a player's hero.
    ///
    /// Uses the hero's `health` attribute, or the configured default.
    #[must_use]
    pub fn hero_health(&self, player: PlayerId) -> Option<i64> {
        let hero = self.entities.get(&self.players[player].hero()?)?;
        let base = self
            .registry
            .get(hero.card_id)
            .map_or(self.config.hero_health, |def| {
                def.get_int("health", self.config.hero_health)
            });
        Some(base - hero.damage())
    }

    /// Pick the first player and prepare every player.
    ///
    /// Uses `GameConfig::first_player`, or a coin toss.
    pub fn start(&mut self) -> Result<()> {
        let first = match self.config.first_player {
            Some(player) => player,
            None => PlayerId::new(self.rng.gen_range_usize(0..self.player_count()) as u8),
        };
        for (id, player) in self.players.iter_mut() {
            player.first_player = id == first;
        }
        info!(first = %first, "starting game");

        let ids: Vec<PlayerId> = self.players.player_ids().collect();
        for id in ids {
            self.player_context(id).prepare_for_game()?;
        }
        self.current_player = Some(first);
        Ok(())
    }

    /// Make `player` current and run their start-of-turn bookkeeping.
    pub fn begin_turn(&mut self, player: PlayerId) {
        self.current_player = Some(player);
        self.players[player].begin_turn();
        debug!(player = %player, mana = self.players[player].mana(), "turn begins");
    }

    pub fn end_turn(&mut self, player: PlayerId) {
        self.players[player].end_turn();
    }

    /// Resolve one action, then let triggers react to it.
    fn resolve(&mut self, source: EntityId, action: &Action) -> ActionResult {
        let result = self.apply(source, action);

        let mut triggers = std::mem::take(&mut self.triggers);
        let mut follow_ups = Vec::new();
        for trigger in &mut triggers {
            follow_ups.extend(trigger.on_resolved(self, source, action, &result));
        }
        self.triggers = triggers;
        self.pending.extend(follow_ups);

        result
    }

    fn resolve_queued(&mut self, source: EntityId, queued: &QueuedAction) -> ActionResult {
        if queued.times == 1 {
            self.resolve(source, &queued.action)
        } else {
            ActionResult::Batch(
                (0..queued.times)
                    .map(|_| self.resolve(source, &queued.action))
                    .collect(),
            )
        }
    }

    fn drain_pending(&mut self) {
        while let Some((source, queued)) = self.pending.pop_front() {
            self.resolve_queued(source, &queued);
        }
    }

    /// Move `entity` to `zone` under `controller`, updating the card,
    /// both players' containers and hero slots, and aura registration.
    pub(crate) fn relocate(&mut self, entity: EntityId, controller: PlayerId, zone: Zone) {
        let card = self
            .entities
            .get(&entity)
            .unwrap_or_else(|| panic!("Unknown entity {entity}"));
        let (owner, from, card_type, card_id) =
            (card.controller(), card.zone(), card.card_type, card.card_id);

        self.detach(entity, owner, from, card_type);
        if zone == Zone::Play {
            let contributions = self
                .registry
                .get(card_id)
                .map(|def| def.aura_contributions())
                .unwrap_or_default();
            if !contributions.is_empty() {
                self.players[controller].add_aura(AuraBuff {
                    source: entity,
                    contributions,
                });
            }
        }
        self.attach(entity, controller, zone, card_type);

        if let Some(card) = self.entities.get_mut(&entity) {
            card.set_controller(controller);
            card.set_zone(zone);
        }
        debug!(card = %entity, player = %controller, from = %from, to = %zone, "moved");
    }

    fn detach(&mut self, entity: EntityId, owner: PlayerId, zone: Zone, card_type: CardType) {
        let player = &mut self.players[owner];
        match (zone, card_type) {
            (Zone::Invalid, _) => return,
            (Zone::Play, CardType::Hero) => {
                assert_eq!(player.hero, Some(entity), "{entity} is not {owner}'s hero");
                player.hero = None;
            }
            (Zone::Play, CardType::HeroPower) => {
                assert_eq!(player.hero_power, Some(entity), "{entity} is not {owner}'s hero power");
                player.hero_power = None;
            }
            (Zone::Play, CardType::Weapon) => {
                assert_eq!(player.weapon, Some(entity), "{entity} is not {owner}'s weapon");
                player.weapon = None;
            }
            _ => {
                let removed = player.zones_mut().remove(entity, zone);
                assert!(removed, "{entity} missing from {owner}'s {zone}");
            }
        }
        if zone == Zone::Play {
            player.remove_aura(entity);
        }
    }

    fn attach(&mut self, entity: EntityId, controller: PlayerId, zone: Zone, card_type: CardType) {
        let player = &mut self.players[controller];
        let slot = match (zone, card_type) {
            (Zone::Invalid, _) => return,
            (Zone::Play, CardType::Hero) => &mut player.hero,
            (Zone::Play, CardType::HeroPower) => &mut player.hero_power,
            (Zone::Play, CardType::Weapon) => &mut player.weapon,
            _ => {
                player.zones_mut().insert(entity, zone, ZonePosition::Top);
                return;
            }
        };
        assert!(slot.is_none(), "{controller} already has a {card_type:?} in play");
        *slot = Some(entity);
    }

    /// Panic unless every card sits in exactly the container its zone and
    /// controller name.
    pub fn assert_zone_invariants(&self) {
        let mut placed = 0;
        for (entity, card) in &self.entities {
            let player = &self.players[card.controller()];
            let in_slot = [player.hero, player.hero_power, player.weapon].contains(&Some(*entity));
            match card.zone() {
                Zone::Invalid => {
                    assert!(!in_slot, "{entity} is unplaced but holds a slot");
                }
                Zone::Play if in_slot => placed += 1,
                zone => {
                    assert_eq!(
                        player.zones().zone_of(*entity),
                        Some(zone),
                        "{entity} says {zone} but is not there"
                    );
                    placed += 1;
                }
            }
            for (other, p) in self.players.iter() {
                if other != card.controller() {
                    assert!(
                        p.zones().zone_of(*entity).is_none(),
                        "{entity} also held by {other}"
                    );
                }
            }
        }

        let held: usize = self
            .players
            .iter()
            .map(|(_, p)| {
                p.zones().total_cards()
                    + [p.hero, p.hero_power, p.weapon].iter().flatten().count()
            })
            .sum();
        assert_eq!(held, placed, "containers hold cards no zone accounts for");
    }
}

impl Dispatcher for Game {
    fn queue_actions(
        &mut self,
        source: EntityId,
        actions: Vec<QueuedAction>,
    ) -> Vec<ActionResult> {
        let mut results = Vec::with_capacity(actions.len());
        for queued in actions {
            let result = self.resolve_queued(source, &queued);
            self.drain_pending();
            self.update_playstates();
            results.push(result);
        }
        results
    }

    fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    fn player_and_rng(&mut self, id: PlayerId) -> (&mut Player, &mut GameRng) {
        (&mut self.players[id], &mut self.rng)
    }

    fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    fn card(&self, entity: EntityId) -> Option<&Card> {
        self.entities.get(&entity)
    }

    fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    fn play_counter(&self) -> u32 {
        self.play_counter
    }

    fn next_play_counter(&mut self) -> u32 {
        let counter = self.play_counter;
        self.play_counter += 1;
        counter
    }

    fn alloc_entity(&mut self) -> EntityId {
        let entity = EntityId(self.next_entity);
        self.next_entity += 1;
        entity
    }

    fn new_entity(&mut self, card: Card) -> EntityId {
        let entity = card.entity_id;
        assert!(
            !entity.is_player(self.player_count()),
            "{entity} is reserved for a player"
        );
        let previous = self.entities.insert(entity, card);
        assert!(previous.is_none(), "{entity} registered twice");
        entity
    }

    fn move_to(&mut self, entity: EntityId, zone: Zone) {
        let controller = self
            .entities
            .get(&entity)
            .map(Card::controller)
            .unwrap_or_else(|| panic!("Unknown entity {entity}"));
        self.relocate(entity, controller, zone);
    }

    fn max_minions_on_field(&self) -> usize {
        self.config.max_minions_on_field
    }

    fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }
}
