//! Queue-driven player operations.
//!
//! `PlayerContext` borrows a dispatcher for one player and exposes the
//! operations that change visible state. Each one pre-validates, builds the
//! actions, queues them and interprets the results. The only operations
//! that move cards directly are the ones that are not actions: card
//! creation, game preparation, milling, discarding and shuffling.

use tracing::debug;

use super::{doubled, Player};
use crate::actions::{Action, ActionResult, Dispatcher, QueuedAction};
use crate::auras::{AuraSlot, TargetableByAuras};
use crate::cards::{Card, CardDefinition, CardId};
use crate::core::{EntityId, GameError, PlayerId, Result};
use crate::zones::{PlayState, Zone};

/// What to summon: a definition to instantiate, or an existing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummonTarget {
    Definition(CardId),
    Entity(EntityId),
}

impl From<CardId> for SummonTarget {
    fn from(id: CardId) -> Self {
        SummonTarget::Definition(id)
    }
}

impl From<EntityId> for SummonTarget {
    fn from(entity: EntityId) -> Self {
        SummonTarget::Entity(entity)
    }
}

/// One player's operations, driven through a dispatcher.
///
/// ```
/// use ccg_player::cards::{CardDefinition, CardId, CardRegistry, CardType};
/// use ccg_player::core::PlayerId;
/// use ccg_player::game::GameBuilder;
/// use ccg_player::zones::Zone;
///
/// let registry = CardRegistry::new()
///     .with(CardDefinition::new(CardId::new(1), "Wisp", CardType::Minion))
///     .with(CardDefinition::new(CardId::new(100), "Jaina", CardType::Hero));
///
/// let mut game = GameBuilder::new()
///     .registry(registry)
///     .player("Alice", vec![CardId::new(1); 10], CardId::new(100))
///     .player("Bob", vec![CardId::new(1); 10], CardId::new(100))
///     .build(42)
///     .unwrap();
/// game.start().unwrap();
///
/// let mut alice = game.player_context(PlayerId::new(0));
/// let drawn = alice.draw().unwrap();
/// assert_eq!(game.card_zone(drawn), Some(Zone::Hand));
/// ```
pub struct PlayerContext<'g, D: Dispatcher> {
    game: &'g mut D,
    player: PlayerId,
}

impl<'g, D: Dispatcher> PlayerContext<'g, D> {
    #[must_use]
    pub fn new(game: &'g mut D, player: PlayerId) -> Self {
        Self { game, player }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        self.game.player(self.player)
    }

    pub fn player_mut(&mut self) -> &mut Player {
        self.game.player_mut(self.player)
    }

    /// The dispatcher this context drives.
    #[must_use]
    pub fn game(&self) -> &D {
        &*self.game
    }

    fn entity(&self) -> EntityId {
        EntityId::player(self.player)
    }

    fn queue(&mut self, actions: Vec<QueuedAction>) -> Vec<ActionResult> {
        let source = self.entity();
        self.game.queue_actions(source, actions)
    }

    fn queue_one(&mut self, action: Action) -> ActionResult {
        self.queue(vec![action.into()])
            .into_iter()
            .next()
            .unwrap_or(ActionResult::Vetoed)
    }

    /// Create a card of definition `id` for this player in `zone`.
    ///
    /// The card gets the next play counter and is registered with the
    /// dispatcher before it is placed. PLAY is refused; summon instead.
    pub fn card(&mut self, id: CardId, source: Option<EntityId>, zone: Zone) -> Result<EntityId> {
        if zone == Zone::Play {
            return Err(GameError::InvalidPlacement(zone));
        }
        self.game.registry().lookup(id)?;

        let play_counter = self.game.next_play_counter();
        let entity = self.game.alloc_entity();
        let card = Card::new(entity, self.game.registry().lookup(id)?, self.player, play_counter)
            .with_creator(source);
        self.game.new_entity(card);
        if zone != Zone::Invalid {
            self.game.move_to(entity, zone);
        }
        Ok(entity)
    }

    /// Summon the hero, build and shuffle the deck, and deal the opening hand.
    ///
    /// The opening hand is moved straight to HAND, not drawn.
    ///
    /// Panics if the player was already prepared.
    pub fn prepare_for_game(&mut self) -> Result<()> {
        assert_eq!(
            self.player().playstate(),
            PlayState::Invalid,
            "{} is already prepared",
            self.player()
        );

        let hero = self.player().starting_hero;
        self.summon(hero)?;

        let deck = self.player().starting_deck.clone();
        for id in deck {
            self.card(id, None, Zone::Deck)?;
        }
        self.shuffle_deck();
        self.player_mut().set_playstate(PlayState::Playing);

        let deck: Vec<EntityId> = self.player().zones().iter(Zone::Deck).collect();
        let hand_size = deck.len().min(self.player().start_hand_size());
        let starting_hand = self.game.rng_mut().sample(&deck, hand_size);
        for card in starting_hand {
            self.game.move_to(card, Zone::Hand);
        }
        debug!(player = %self.player, hand = hand_size, "dealt opening hand");
        Ok(())
    }

    /// Draw one card. `None` when drawing is blocked or the deck was empty.
    pub fn draw(&mut self) -> Option<EntityId> {
        match self.draw_cards(1).into_iter().next()? {
            ActionResult::Single(card) | ActionResult::Burned(card) => Some(card),
            _ => None,
        }
    }

    /// Draw `count` cards, one result per draw. Empty when drawing is blocked.
    pub fn draw_cards(&mut self, count: u32) -> Vec<ActionResult> {
        if self.player().cant_draw {
            debug!(player = %self.player, count, "tries to draw but can't draw");
            return Vec::new();
        }
        if count == 0 {
            return Vec::new();
        }
        let action = Action::Draw { player: self.player };
        self.queue(vec![action.times(count)])
            .into_iter()
            .flat_map(ActionResult::into_vec)
            .collect()
    }

    /// Discard the top card of the deck.
    pub fn mill(&mut self) -> Option<EntityId> {
        let card = self.player().zones().top_card(Zone::Deck)?;
        debug!(player = %self.player, card = %card, "mills");
        self.game.move_to(card, Zone::Graveyard);
        Some(card)
    }

    /// Mill `count` times. Runs that found an empty deck are `None`.
    pub fn mill_cards(&mut self, count: u32) -> Vec<Option<EntityId>> {
        (0..count).map(|_| self.mill()).collect()
    }

    pub fn fatigue(&mut self) -> ActionResult {
        let action = Action::Fatigue { player: self.player };
        self.queue_one(action)
    }

    /// Summon a card for this player and return it, whatever the outcome.
    ///
    /// A definition is instantiated in SETASIDE first; a summon that gets
    /// vetoed leaves it there.
    pub fn summon(&mut self, target: impl Into<SummonTarget>) -> Result<EntityId> {
        let card = match target.into() {
            SummonTarget::Definition(id) => self.card(id, None, Zone::SetAside)?,
            SummonTarget::Entity(entity) => {
                if self.game.card(entity).is_none() {
                    return Err(GameError::UnknownEntity(entity));
                }
                entity
            }
        };
        let action = Action::Summon {
            player: self.player,
            card,
        };
        self.queue_one(action);
        Ok(card)
    }

    /// Give this player a new copy of `id`, returning the created card.
    pub fn give(&mut self, id: CardId) -> Result<EntityId> {
        self.game.registry().lookup(id)?;
        let action = Action::Give {
            player: self.player,
            card: id,
        };
        self.queue_one(action).card().ok_or(GameError::NoCardCreated)
    }

    /// Take control of `card`. Returns the whole result batch.
    pub fn steal(&mut self, card: EntityId) -> Vec<ActionResult> {
        self.queue(vec![Action::Steal { card }.into()])
    }

    pub fn concede(&mut self) -> Vec<ActionResult> {
        let action = Action::Concede { player: self.player };
        self.queue(vec![action.into()])
    }

    /// Discard the whole hand, last card first. Returns the discarded cards.
    pub fn discard_hand(&mut self) -> Vec<EntityId> {
        let hand = self.player().zones().cards(Zone::Hand);
        debug!(player = %self.player, cards = hand.len(), "discards their entire hand");
        hand.iter()
            .rev()
            .map(|&card| {
                self.game.move_to(card, Zone::Graveyard);
                card
            })
            .collect()
    }

    pub fn shuffle_deck(&mut self) {
        debug!(player = %self.player, "shuffles their deck");
        let (player, rng) = self.game.player_and_rng(self.player);
        player.zones_mut().shuffle(Zone::Deck, rng);
    }

    fn field_sum(&self, value: impl Fn(&Card, &CardDefinition) -> i64) -> i64 {
        let registry = self.game.registry();
        self.player()
            .zones()
            .iter(Zone::Play)
            .filter_map(|entity| self.game.card(entity))
            .filter_map(|card| registry.get(card.card_id).map(|def| value(card, def)))
            .sum()
    }

    /// Player-level `spellpower` aura plus every field minion's spellpower.
    #[must_use]
    pub fn spellpower(&self) -> i64 {
        self.player().slot(AuraSlot::Spellpower) + self.field_sum(Card::spellpower)
    }

    /// Spell damage after spellpower, then `spellpower_double`.
    #[must_use]
    pub fn get_spell_damage(&self, amount: i64) -> i64 {
        doubled(
            amount + self.spellpower(),
            self.player().slot(AuraSlot::SpellpowerDouble),
        )
    }

    /// Sum of field minions' hero-power damage bonus.
    #[must_use]
    pub fn heropower_damage(&self) -> i64 {
        self.field_sum(Card::heropower_damage)
    }

    #[must_use]
    pub fn get_hero_power_damage(&self, amount: i64) -> i64 {
        doubled(
            amount + self.heropower_damage(),
            self.player().slot(AuraSlot::HeroPowerDouble),
        )
    }

    #[must_use]
    pub fn get_heal(&self, amount: i64) -> i64 {
        self.player().get_heal(amount)
    }

    /// Free spaces on the field.
    #[must_use]
    pub fn minion_slots(&self) -> usize {
        self.game
            .max_minions_on_field()
            .saturating_sub(self.player().zones().len(Zone::Play))
    }

    #[must_use]
    pub fn is_current_player(&self) -> bool {
        self.game.current_player() == Some(self.player)
    }

    pub fn pay_mana(&mut self, amount: i32) -> i32 {
        self.player_mut().pay_mana(amount)
    }
}
