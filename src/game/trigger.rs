//! Hooks that react to resolved actions.

use super::Game;
use crate::actions::{Action, ActionResult, QueuedAction};
use crate::core::EntityId;

/// Observes every resolved action and may queue follow-ups.
///
/// Follow-ups are `(source, action)` pairs. They resolve after the current
/// top-level action, in the order they were returned, before the next
/// top-level action of the batch.
///
/// Closures with the same shape implement this trait:
///
/// ```
/// use ccg_player::actions::{Action, ActionResult, QueuedAction};
/// use ccg_player::core::EntityId;
/// use ccg_player::game::{ActionTrigger, Game};
///
/// fn draw_on_fatigue(
///     _game: &Game,
///     source: EntityId,
///     action: &Action,
///     _result: &ActionResult,
/// ) -> Vec<(EntityId, QueuedAction)> {
///     match action {
///         Action::Fatigue { player } => vec![(source, Action::Draw { player: *player }.into())],
///         _ => Vec::new(),
///     }
/// }
///
/// let _trigger: Box<dyn ActionTrigger> = Box::new(draw_on_fatigue);
/// ```
pub trait ActionTrigger {
    fn on_resolved(
        &mut self,
        game: &Game,
        source: EntityId,
        action: &Action,
        result: &ActionResult,
    ) -> Vec<(EntityId, QueuedAction)>;
}

impl<F> ActionTrigger for F
where
    F: FnMut(&Game, EntityId, &Action, &ActionResult) -> Vec<(EntityId, QueuedAction)>,
{
    fn on_resolved(
        &mut self,
        game: &Game,
        source: EntityId,
        action: &Action,
        result: &ActionResult,
    ) -> Vec<(EntityId, QueuedAction)> {
        self(game, source, action, result)
    }
}
