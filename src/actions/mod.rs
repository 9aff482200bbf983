//! The action queue contract.
//!
//! Player operations never touch zones or counters that triggered effects
//! could care about. They build `Action`s and hand them to a `Dispatcher`,
//! which resolves them in order and returns one `ActionResult` per entry.
//!
//! ## Key Types
//!
//! - `Action`: what to do (draw, fatigue, give, steal, summon, concede)
//! - `QueuedAction`: an action plus a repeat count
//! - `ActionResult`: tagged outcome, matched on by callers
//! - `Dispatcher`: the engine seam; [`Game`](crate::game::Game) implements it

mod action;
mod result;

pub use action::{Action, QueuedAction};
pub use result::ActionResult;

use crate::cards::{Card, CardRegistry};
use crate::core::{EntityId, GameRng, PlayerId};
use crate::player::Player;
use crate::zones::Zone;

/// The engine a player is driven by.
///
/// `queue_actions` resolves the whole batch, including anything triggered
/// along the way, before it returns. The result vector is aligned 1:1 with
/// `actions`.
pub trait Dispatcher {
    /// Resolve `actions` in order on behalf of `source`.
    fn queue_actions(&mut self, source: EntityId, actions: Vec<QueuedAction>)
        -> Vec<ActionResult>;

    fn player(&self, id: PlayerId) -> &Player;

    fn player_mut(&mut self, id: PlayerId) -> &mut Player;

    /// A player together with the game RNG, for in-place shuffles.
    fn player_and_rng(&mut self, id: PlayerId) -> (&mut Player, &mut GameRng);

    fn rng_mut(&mut self) -> &mut GameRng;

    /// Look up a card entity.
    fn card(&self, entity: EntityId) -> Option<&Card>;

    fn registry(&self) -> &CardRegistry;

    /// Creation counter value the next card will get.
    fn play_counter(&self) -> u32;

    /// Take the current creation counter value and advance it.
    fn next_play_counter(&mut self) -> u32;

    /// Reserve a fresh entity id.
    fn alloc_entity(&mut self) -> EntityId;

    /// Register a card built with an id from `alloc_entity`.
    ///
    /// The card is unplaced until `move_to` puts it somewhere.
    fn new_entity(&mut self, card: Card) -> EntityId;

    /// Move a card to `zone` of its controller, keeping the card's zone and
    /// the containers in sync.
    fn move_to(&mut self, entity: EntityId, zone: Zone);

    fn max_minions_on_field(&self) -> usize;

    fn current_player(&self) -> Option<PlayerId>;
}
