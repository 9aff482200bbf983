//! Action handlers.
//!
//! Each handler checks everything first and moves cards last, so a vetoed
//! action leaves the game untouched.

use tracing::{debug, info, warn};

use super::Game;
use crate::actions::{Action, ActionResult, Dispatcher};
use crate::cards::{CardId, CardType};
use crate::core::{EntityId, PlayerId};
use crate::player::PlayerContext;
use crate::zones::{PlayState, Zone};

impl Game {
    pub(super) fn apply(&mut self, source: EntityId, action: &Action) -> ActionResult {
        match *action {
            Action::Concede { player } => self.concede(player),
            Action::Draw { player } => self.draw(source, player),
            Action::Fatigue { player } => self.fatigue(player),
            Action::Give { player, card } => self.give(source, player, card),
            Action::Steal { card } => self.steal(source, card),
            Action::Summon { player, card } => self.summon(player, card),
        }
    }

    fn concede(&mut self, player: PlayerId) -> ActionResult {
        let state = &mut self.players[player];
        if state.playstate().is_terminal() {
            warn!(player = %player, "concede after the game ended");
            return ActionResult::Vetoed;
        }
        info!(player = %player, "concedes");
        state.set_playstate(PlayState::Conceded);
        ActionResult::Done
    }

    fn draw(&mut self, source: EntityId, player: PlayerId) -> ActionResult {
        let Some(card) = self.players[player].zones().top_card(Zone::Deck) else {
            debug!(player = %player, "draws from an empty deck");
            self.resolve(source, &Action::Fatigue { player });
            return ActionResult::Fatigued;
        };

        self.players[player].cards_drawn_this_turn += 1;
        if self.hand_is_full(player) {
            debug!(player = %player, card = %card, "hand full, card burned");
            self.move_to(card, Zone::Graveyard);
            return ActionResult::Burned(card);
        }
        debug!(player = %player, card = %card, "draws");
        self.move_to(card, Zone::Hand);
        ActionResult::Single(card)
    }

    fn fatigue(&mut self, player: PlayerId) -> ActionResult {
        let state = &mut self.players[player];
        if state.cant_fatigue {
            debug!(player = %player, "fatigue prevented");
            return ActionResult::Vetoed;
        }
        let damage = i64::from(state.record_fatigue());
        let hero = state.hero();
        if let Some(hero) = hero.and_then(|hero| self.entities.get_mut(&hero)) {
            hero.modify_state("damage", damage);
        }
        debug!(player = %player, damage, "takes fatigue damage");
        ActionResult::Damage(damage)
    }

    fn give(&mut self, source: EntityId, player: PlayerId, id: CardId) -> ActionResult {
        let card = match PlayerContext::new(self, player).card(id, Some(source), Zone::SetAside) {
            Ok(card) => card,
            Err(err) => {
                warn!(player = %player, error = %err, "give failed");
                return ActionResult::Vetoed;
            }
        };

        if self.hand_is_full(player) {
            debug!(player = %player, card = %card, "hand full, given card burned");
            self.move_to(card, Zone::Graveyard);
            return ActionResult::Burned(card);
        }
        debug!(player = %player, card = %card, "receives");
        self.move_to(card, Zone::Hand);
        ActionResult::Single(card)
    }

    fn steal(&mut self, source: EntityId, card: EntityId) -> ActionResult {
        let Some(thief) = self.controller_of(source) else {
            warn!(source = %source, "steal from a source with no controller");
            return ActionResult::Vetoed;
        };
        let Some(target) = self.entities.get(&card) else {
            warn!(card = %card, "steal of an unknown card");
            return ActionResult::Vetoed;
        };
        let (owner, zone, card_type) = (target.controller(), target.zone(), target.card_type);

        if owner == thief {
            warn!(player = %thief, card = %card, "steal of an own card");
            return ActionResult::Vetoed;
        }
        let target_zone = match zone {
            Zone::Graveyard | Zone::SetAside | Zone::Invalid => {
                warn!(player = %thief, card = %card, zone = %zone, "card cannot be stolen from here");
                return ActionResult::Vetoed;
            }
            Zone::Play if card_type != CardType::Minion => {
                warn!(player = %thief, card = %card, "only minions can be stolen from play");
                return ActionResult::Vetoed;
            }
            Zone::Play if self.minion_slots(thief) == 0 => {
                warn!(player = %thief, card = %card, "no room to steal a minion");
                return ActionResult::Vetoed;
            }
            Zone::Hand if self.hand_is_full(thief) => Zone::Graveyard,
            zone => zone,
        };

        debug!(player = %thief, card = %card, from = %owner, zone = %target_zone, "steals");
        self.relocate(card, thief, target_zone);
        if target_zone == zone {
            ActionResult::Single(card)
        } else {
            ActionResult::Burned(card)
        }
    }

    fn summon(&mut self, player: PlayerId, card: EntityId) -> ActionResult {
        let Some(target) = self.entities.get(&card) else {
            warn!(player = %player, card = %card, "summon of an unknown card");
            return ActionResult::Vetoed;
        };
        if target.zone() == Zone::Play {
            warn!(player = %player, card = %card, "already in play");
            return ActionResult::Vetoed;
        }
        let (card_id, card_type) = (target.card_id, target.card_type);

        match card_type {
            CardType::Hero => {
                let state = &self.players[player];
                let replaced = [state.hero_power(), state.hero()];
                for old in replaced.into_iter().flatten() {
                    self.move_to(old, Zone::Graveyard);
                }
                self.relocate(card, player, Zone::Play);
                self.summon_hero_power(player, card, card_id);
            }
            CardType::Weapon => {
                if let Some(old) = self.players[player].weapon() {
                    debug!(player = %player, weapon = %old, "weapon replaced");
                    self.move_to(old, Zone::Graveyard);
                }
                self.relocate(card, player, Zone::Play);
            }
            CardType::Minion => {
                if self.minion_slots(player) == 0 {
                    warn!(player = %player, card = %card, "field is full");
                    return ActionResult::Vetoed;
                }
                self.relocate(card, player, Zone::Play);
            }
            other => {
                warn!(player = %player, card = %card, card_type = ?other, "cannot be summoned");
                return ActionResult::Vetoed;
            }
        }
        debug!(player = %player, card = %card, "summons");
        ActionResult::Single(card)
    }

    fn hand_is_full(&self, player: PlayerId) -> bool {
        let state = &self.players[player];
        state.zones().len(Zone::Hand) >= state.max_hand_size
    }

    fn summon_hero_power(&mut self, player: PlayerId, hero: EntityId, hero_id: CardId) {
        let Some(power) = self.registry.get(hero_id).and_then(|def| def.hero_power()) else {
            return;
        };
        match PlayerContext::new(self, player).card(power, Some(hero), Zone::SetAside) {
            Ok(entity) => {
                self.relocate(entity, player, Zone::Play);
                debug!(player = %player, power = %entity, "hero power ready");
            }
            Err(err) => warn!(player = %player, error = %err, "hero power missing"),
        }
    }

    /// Dead heroes lose; the last player standing wins; players who all
    /// lost together tie.
    pub(super) fn update_playstates(&mut self) {
        let ids: Vec<PlayerId> = self.players.player_ids().collect();

        let mut lost = Vec::new();
        for &id in &ids {
            let dead = self.hero_health(id).is_some_and(|health| health <= 0);
            if dead && self.players[id].playstate() == PlayState::Playing {
                info!(player = %id, "hero died");
                self.players[id].set_playstate(PlayState::Lost);
                lost.push(id);
            }
        }

        if ids.len() < 2
            || ids
                .iter()
                .any(|&id| self.players[id].playstate() == PlayState::Invalid)
        {
            return;
        }

        let playing: Vec<PlayerId> = ids
            .iter()
            .copied()
            .filter(|&id| self.players[id].playstate() == PlayState::Playing)
            .collect();
        match playing.as_slice() {
            [winner] => self.players[*winner].set_playstate(PlayState::Won),
            [] if lost.len() > 1 => {
                for id in lost {
                    self.players[id].set_playstate(PlayState::Tied);
                }
            }
            _ => {}
        }
    }
}
