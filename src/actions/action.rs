//! Action descriptors.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{EntityId, PlayerId};

/// A requested state change.
///
/// Actions describe what should happen; the dispatcher decides whether and
/// how it does. They carry ids only, never references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The player gives up.
    Concede { player: PlayerId },

    /// Top card of the deck to hand, or fatigue when the deck is empty.
    Draw { player: PlayerId },

    /// Bump the fatigue counter and damage the hero by it.
    Fatigue { player: PlayerId },

    /// Create a copy of `card` in the player's hand.
    Give { player: PlayerId, card: CardId },

    /// Take control of `card`. The thief is the controller of the source.
    Steal { card: EntityId },

    /// Put `card` into play for `player`.
    Summon { player: PlayerId, card: EntityId },
}

impl Action {
    /// Repeat this action `times` times as one queue entry.
    ///
    /// ```
    /// use ccg_player::actions::Action;
    /// use ccg_player::core::PlayerId;
    ///
    /// let draws = Action::Draw { player: PlayerId::new(0) }.times(3);
    /// assert_eq!(draws.times, 3);
    /// ```
    #[must_use]
    pub fn times(self, times: u32) -> QueuedAction {
        QueuedAction { action: self, times }
    }

    /// The player this action is aimed at, when it names one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Action::Concede { player }
            | Action::Draw { player }
            | Action::Fatigue { player }
            | Action::Give { player, .. }
            | Action::Summon { player, .. } => Some(*player),
            Action::Steal { .. } => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Concede { .. } => "Concede",
            Action::Draw { .. } => "Draw",
            Action::Fatigue { .. } => "Fatigue",
            Action::Give { .. } => "Give",
            Action::Steal { .. } => "Steal",
            Action::Summon { .. } => "Summon",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Give { player, card } => write!(f, "Give({player}, {card})"),
            Action::Steal { card } => write!(f, "Steal({card})"),
            Action::Summon { player, card } => write!(f, "Summon({player}, {card})"),
            other => match other.player() {
                Some(player) => write!(f, "{}({player})", other.name()),
                None => f.write_str(other.name()),
            },
        }
    }
}

/// One entry of a queued batch: an action and how many times to run it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub action: Action,
    pub times: u32,
}

impl From<Action> for QueuedAction {
    fn from(action: Action) -> Self {
        action.times(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_action_is_single() {
        let queued: QueuedAction = Action::Concede { player: PlayerId::new(1) }.into();
        assert_eq!(queued.times, 1);
    }

    #[test]
    fn test_player() {
        let p = PlayerId::new(1);
        assert_eq!(Action::Draw { player: p }.player(), Some(p));
        assert_eq!(Action::Steal { card: EntityId(4) }.player(), None);
    }

    #[test]
    fn test_display() {
        let p = PlayerId::new(0);
        assert_eq!(Action::Draw { player: p }.to_string(), "Draw(Player 0)");
        assert_eq!(Action::Steal { card: EntityId(9) }.to_string(), "Steal(Entity(9))");
        assert_eq!(
            Action::Give { player: p, card: CardId::new(3) }.to_string(),
            "Give(Player 0, Card(3))"
        );
    }

    #[test]
    fn test_serde() {
        let action = Action::Summon {
            player: PlayerId::new(1),
            card: EntityId(12),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
