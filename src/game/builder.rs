//! Fluent construction of a seated, not-yet-started game.

use super::game::Game;
use crate::cards::Card;
use crate::core::{GameConfig, GameRng, InvalidConfig, Result};

/// Builds a [`Game`] from configuration edits.
///
/// Each setter goes through the matching [`GameConfig`] setter, in call
/// order, so the same consistency rules apply. The first rejected edit is
/// kept and returned by [`GameBuilder::build`].
///
/// ```
/// use tcg::game::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .players(["Rahmi", "Berk", "Sefkatli"])
///     .initial_health(20)
///     .build(42)
///     .unwrap();
///
/// game.start().unwrap();
/// assert!(game.players().all(|p| p.health() == 20));
/// assert_eq!(game.roster().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    error: Option<InvalidConfig>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration instead of the defaults.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            error: None,
        }
    }

    fn apply<F>(mut self, edit: F) -> Self
    where
        F: FnOnce(&mut GameConfig) -> std::result::Result<(), InvalidConfig>,
    {
        if self.error.is_none() {
            if let Err(err) = edit(&mut self.config) {
                self.error = Some(err);
            }
        }
        self
    }

    #[must_use]
    pub fn players<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.apply(|c| c.set_players(names))
    }

    #[must_use]
    pub fn deck(self, deck: Vec<Card>) -> Self {
        self.apply(|c| c.set_deck(deck))
    }

    #[must_use]
    pub fn initial_health(self, value: i32) -> Self {
        self.apply(|c| c.set_initial_health(value))
    }

    #[must_use]
    pub fn initial_mana_capacity(self, value: i32) -> Self {
        self.apply(|c| c.set_initial_mana_capacity(value))
    }

    #[must_use]
    pub fn initial_hand_size(self, value: i32) -> Self {
        self.apply(|c| c.set_initial_hand_size(value))
    }

    #[must_use]
    pub fn max_mana_capacity(self, value: i32) -> Self {
        self.apply(|c| c.set_max_mana_capacity(value))
    }

    #[must_use]
    pub fn max_hand_size(self, value: i32) -> Self {
        self.apply(|c| c.set_max_hand_size(value))
    }

    #[must_use]
    pub fn bleeding_damage(self, value: i32) -> Self {
        self.apply(|c| c.set_bleeding_damage(value))
    }

    /// Build a game seated with the configured players, seeded with `seed`.
    pub fn build(self, seed: u64) -> Result<Game> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build a game using the given RNG.
    pub fn build_with_rng(self, rng: GameRng) -> Result<Game> {
        if let Some(err) = self.error {
            return Err(err.into());
        }
        Game::with_config_players(self.config, rng)
    }
}
