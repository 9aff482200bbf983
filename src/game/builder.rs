//! Game construction.

use super::Game;
use crate::cards::{CardId, CardRegistry};
use crate::core::{GameConfig, GameError, PlayerId, PlayerMap, Result};
use crate::player::Player;

struct Seat {
    name: String,
    deck: Vec<CardId>,
    hero: CardId,
}

/// Builder for a [`Game`].
///
/// ```
/// use ccg_player::cards::{CardDefinition, CardId, CardRegistry, CardType};
/// use ccg_player::core::GameConfig;
/// use ccg_player::game::GameBuilder;
///
/// let registry = CardRegistry::new()
///     .with(CardDefinition::new(CardId::new(100), "Rexxar", CardType::Hero));
///
/// let game = GameBuilder::new()
///     .config(GameConfig::new().with_max_minions(5))
///     .registry(registry)
///     .player("Alice", vec![], CardId::new(100))
///     .player("Bob", vec![], CardId::new(100))
///     .build(7)
///     .unwrap();
///
/// assert_eq!(game.player_count(), 2);
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    registry: CardRegistry,
    seats: Vec<Seat>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: CardRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Add a seat with a deck list and a hero.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, deck: Vec<CardId>, hero: CardId) -> Self {
        self.seats.push(Seat {
            name: name.into(),
            deck,
            hero,
        });
        self
    }

    /// Validate and build. The game still has to be [`start`](Game::start)ed.
    pub fn build(self, seed: u64) -> Result<Game> {
        self.config.validate()?;

        let count = self.seats.len();
        if count == 0 || count > usize::from(u8::MAX) {
            return Err(GameError::InvalidPlayerCount(count));
        }

        for seat in &self.seats {
            self.registry.lookup(seat.hero)?;
            for &id in &seat.deck {
                self.registry.lookup(id)?;
            }
        }

        let players = self
            .seats
            .into_iter()
            .zip(PlayerId::all(count))
            .map(|(seat, id)| Player::new(id, seat.name, seat.deck, seat.hero, &self.config.player))
            .collect();

        Ok(Game::new(
            self.config,
            self.registry,
            PlayerMap::from_vec(players),
            seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Dispatcher;
    use crate::cards::{CardDefinition, CardType};

    fn registry() -> CardRegistry {
        CardRegistry::new()
            .with(CardDefinition::new(CardId::new(1), "Wisp", CardType::Minion))
            .with(CardDefinition::new(CardId::new(100), "Thrall", CardType::Hero))
    }

    #[test]
    fn test_no_players() {
        let result = GameBuilder::new().registry(registry()).build(1);
        assert!(matches!(result, Err(GameError::InvalidPlayerCount(0))));
    }

    #[test]
    fn test_unknown_deck_card() {
        let result = GameBuilder::new()
            .registry(registry())
            .player("Alice", vec![CardId::new(1), CardId::new(2)], CardId::new(100))
            .build(1);
        assert!(matches!(result, Err(GameError::UnknownCard(id)) if id == CardId::new(2)));
    }

    #[test]
    fn test_invalid_config() {
        let result = GameBuilder::new()
            .config(GameConfig::new().with_max_minions(0))
            .registry(registry())
            .player("Alice", vec![], CardId::new(100))
            .build(1);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_players_and_entity_ids() {
        let mut game = GameBuilder::new()
            .registry(registry())
            .player("Alice", vec![CardId::new(1)], CardId::new(100))
            .player("Bob", vec![CardId::new(1)], CardId::new(100))
            .player("Carol", vec![CardId::new(1)], CardId::new(100))
            .build(1)
            .unwrap();

        assert_eq!(game.player_count(), 3);
        assert_eq!(game.player(PlayerId::new(2)).name, "Carol");

        game.start().unwrap();
        let first_card = game.entity_ids().min().unwrap();
        assert_eq!(first_card.raw(), 3);
    }
}
