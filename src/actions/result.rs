//! Structured results of resolved actions.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

/// What resolving one queue entry produced.
///
/// Entries with `times > 1` resolve to a `Batch` with one result per run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionResult {
    /// A card ended up where it was meant to go.
    Single(EntityId),
    /// A card was created or drawn but went to the graveyard (hand full).
    Burned(EntityId),
    /// A draw found an empty deck; fatigue was resolved instead.
    Fatigued,
    /// Fatigue damage dealt to the hero.
    Damage(i64),
    /// Resolved with nothing to report.
    Done,
    /// The dispatcher refused the action. Nothing changed.
    Vetoed,
    Batch(Vec<ActionResult>),
}

impl ActionResult {
    /// The card this result is about. For a batch, the first card in it.
    ///
    /// ```
    /// use ccg_player::actions::ActionResult;
    /// use ccg_player::core::EntityId;
    ///
    /// let batch = ActionResult::Batch(vec![ActionResult::Fatigued, ActionResult::Single(EntityId(8))]);
    /// assert_eq!(batch.card(), Some(EntityId(8)));
    /// assert_eq!(ActionResult::Vetoed.card(), None);
    /// ```
    #[must_use]
    pub fn card(&self) -> Option<EntityId> {
        match self {
            ActionResult::Single(entity) | ActionResult::Burned(entity) => Some(*entity),
            ActionResult::Batch(results) => results.iter().find_map(ActionResult::card),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_vetoed(&self) -> bool {
        matches!(self, ActionResult::Vetoed)
    }

    #[must_use]
    pub fn is_fatigue(&self) -> bool {
        matches!(self, ActionResult::Fatigued)
    }

    /// Flatten into per-run results. Non-batch results yield themselves.
    #[must_use]
    pub fn into_vec(self) -> Vec<ActionResult> {
        match self {
            ActionResult::Batch(results) => results,
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card() {
        assert_eq!(ActionResult::Single(EntityId(3)).card(), Some(EntityId(3)));
        assert_eq!(ActionResult::Burned(EntityId(4)).card(), Some(EntityId(4)));
        assert_eq!(ActionResult::Damage(2).card(), None);
        assert_eq!(ActionResult::Batch(vec![]).card(), None);
    }

    #[test]
    fn test_into_vec() {
        assert_eq!(ActionResult::Done.into_vec(), vec![ActionResult::Done]);
        let batch = ActionResult::Batch(vec![ActionResult::Fatigued, ActionResult::Fatigued]);
        assert_eq!(batch.into_vec().len(), 2);
    }

    #[test]
    fn test_predicates() {
        assert!(ActionResult::Vetoed.is_vetoed());
        assert!(ActionResult::Fatigued.is_fatigue());
        assert!(!ActionResult::Done.is_fatigue());
    }
}
