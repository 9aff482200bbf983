//! Zone and play-state enums.

use serde::{Deserialize, Serialize};

/// A battlefield location. Every entity is in exactly one zone at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Not placed yet (players themselves, freshly allocated entities).
    #[default]
    Invalid,
    Deck,
    Hand,
    /// On the board: minions on the field, plus the hero, hero power and weapon slots.
    Play,
    Graveyard,
    Secret,
    /// Created or moved aside, waiting for an action to place it.
    SetAside,
}

impl Zone {
    /// All zones that have an ordered container.
    pub const CONTAINERS: [Zone; 6] = [
        Zone::Deck,
        Zone::Hand,
        Zone::Play,
        Zone::Graveyard,
        Zone::Secret,
        Zone::SetAside,
    ];

    /// Short lowercase name, used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Invalid => "invalid",
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Play => "play",
            Zone::Graveyard => "graveyard",
            Zone::Secret => "secret",
            Zone::SetAside => "setaside",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a player stands in the match.
///
/// `Invalid` until the player is prepared, `Playing` during the match, then
/// one of the terminal states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayState {
    #[default]
    Invalid,
    Playing,
    Won,
    Lost,
    Conceded,
    Tied,
}

impl PlayState {
    /// Won, lost, conceded or tied.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            PlayState::Won | PlayState::Lost | PlayState::Conceded | PlayState::Tied
        )
    }

    /// Whether a player in this state may move to `next`.
    ///
    /// `Invalid -> Playing -> terminal`, with one extra edge: a player who
    /// lost in the same resolution step as everyone else ends up `Tied`.
    #[must_use]
    pub const fn can_transition_to(self, next: PlayState) -> bool {
        match (self, next) {
            (PlayState::Invalid, PlayState::Playing) => true,
            (PlayState::Playing, next) => next.is_terminal(),
            (PlayState::Lost, PlayState::Tied) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!PlayState::Invalid.is_terminal());
        assert!(!PlayState::Playing.is_terminal());
        assert!(PlayState::Won.is_terminal());
        assert!(PlayState::Lost.is_terminal());
        assert!(PlayState::Conceded.is_terminal());
        assert!(PlayState::Tied.is_terminal());
    }

    #[test]
    fn test_transitions() {
        assert!(PlayState::Invalid.can_transition_to(PlayState::Playing));
        assert!(!PlayState::Invalid.can_transition_to(PlayState::Won));
        assert!(PlayState::Playing.can_transition_to(PlayState::Conceded));
        assert!(!PlayState::Playing.can_transition_to(PlayState::Invalid));
        assert!(!PlayState::Won.can_transition_to(PlayState::Lost));
        assert!(PlayState::Lost.can_transition_to(PlayState::Tied));
    }

    #[test]
    fn test_zone_display() {
        assert_eq!(Zone::Graveyard.to_string(), "graveyard");
        assert_eq!(Zone::default(), Zone::Invalid);
        assert!(!Zone::CONTAINERS.contains(&Zone::Invalid));
    }
}
