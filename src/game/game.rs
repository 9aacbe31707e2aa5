//! The turn engine's state and its read-only queries.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::result::GameResult;
use crate::cards::Deck;
use crate::core::{GameConfig, GameError, GameRng, Player, Result};
use crate::events::GameEvent;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Players may still be added and removed.
    #[default]
    NotStarted,
    /// Turns are being played.
    Live,
    /// Terminal. Nothing leaves this phase.
    Ended,
}

/// The turn engine.
///
/// Owns the roster (in turn order), the active-player index and the match
/// lifecycle. All commands are synchronous and run every cascade they
/// trigger (eliminations, automatic turn passes) before returning.
///
/// ## Invariants
///
/// While [`MatchPhase::Live`]:
/// - the roster holds at least 2 players and `active_index` is in range;
/// - every player has `0 <= mana <= mana_capacity <= max_mana_capacity`
///   and no more than `max_hand_size` cards in hand;
/// - no player in the roster is dead.
///
/// ## Example
///
/// ```
/// use tcg::core::{GameConfig, GameRng};
/// use tcg::game::Game;
///
/// let mut game = Game::new(GameConfig::default(), GameRng::new(42));
/// game.add_player("Rahmi").unwrap();
/// game.add_player("Berk").unwrap();
/// game.start().unwrap();
///
/// assert!(game.is_live());
/// let active = game.active_player().unwrap();
/// assert_eq!(active.mana_capacity(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) rng: GameRng,
    /// Turn order. Fixed at start, afterwards only shrinks.
    pub(super) roster: Vector<Player>,
    pub(super) active_index: usize,
    pub(super) phase: MatchPhase,
    pub(super) turn_number: u32,
    pub(super) result: Option<GameResult>,
    pub(super) events: Vec<GameEvent>,
}

impl Game {
    /// Create an engine with an empty roster.
    ///
    /// `config` is assumed to have been validated by its own setters.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            roster: Vector::new(),
            active_index: 0,
            phase: MatchPhase::NotStarted,
            turn_number: 0,
            result: None,
            events: Vec::new(),
        }
    }

    /// Create an engine seated with the config's player set.
    pub fn with_config_players(config: GameConfig, rng: GameRng) -> Result<Self> {
        let names = config.players().to_vec();
        let mut game = Self::new(config, rng);
        for name in names {
            game.add_player(name)?;
        }
        Ok(game)
    }

    /// Start the match.
    ///
    /// Every player gets the configured health and mana capacity, a freshly
    /// shuffled copy of the starting deck and an opening hand. A random
    /// seat is chosen as the pre-turn placeholder and the turn immediately
    /// advances to the player after it.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != MatchPhase::NotStarted {
            return Err(GameError::MatchAlreadyStarted);
        }
        if self.roster.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: self.roster.len(),
            });
        }
        self.config.validate()?;

        let mut deck_rng = self.rng.for_context("deck");
        let mut seat_rng = self.rng.for_context("seat");

        let config = &self.config;
        for player in self.roster.iter_mut() {
            let deck = Deck::shuffled(config.deck(), &mut deck_rng);
            player.prepare(
                config.initial_health(),
                config.initial_mana_capacity(),
                deck,
                config.initial_hand_size(),
            );
        }

        self.active_index = seat_rng.gen_range_usize(0..self.roster.len());
        self.phase = MatchPhase::Live;
        tracing::info!(
            players = self.roster.len(),
            seed = self.rng.seed(),
            "match started"
        );

        self.advance_turn();
        Ok(())
    }

    // === Queries ===

    /// Snapshot of the roster in turn order.
    ///
    /// The returned vector shares structure with the engine but is detached
    /// from it: later commands never change a snapshot already taken.
    #[must_use]
    pub fn roster(&self) -> Vector<Player> {
        self.roster.clone()
    }

    /// Iterate over the roster in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter()
    }

    /// Look a player up by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.roster.iter().find(|p| p.name() == name)
    }

    /// The player whose turn it is. `None` before the match starts.
    ///
    /// After the match ends this is the winner (or, on a stalemate, the
    /// last player to have had a turn).
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            MatchPhase::NotStarted => None,
            MatchPhase::Live | MatchPhase::Ended => self.roster.get(self.active_index),
        }
    }

    /// Position of the active player in [`Game::roster`].
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_player().map(|_| self.active_index)
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.phase == MatchPhase::Live
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != MatchPhase::NotStarted
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.result.as_ref().and_then(GameResult::winner)
    }

    /// Number of turn advancements so far, skipped turns included.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Events recorded since the last [`Game::take_events`].
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain recorded events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internal helpers ===

    pub(super) fn record(&mut self, event: GameEvent) {
        tracing::debug!(player = event.player(), ?event, "game event");
        self.events.push(event);
    }

    pub(super) fn ensure_live(&self) -> Result<()> {
        if self.phase == MatchPhase::Live {
            Ok(())
        } else {
            Err(GameError::MatchNotLive)
        }
    }

    pub(super) fn position_of(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|p| p.name() == name)
    }

    pub(super) fn active_name(&self) -> String {
        self.roster[self.active_index].name().to_owned()
    }

    /// End the match if only one player remains.
    ///
    /// Returns true if the match is over.
    pub(super) fn check_last_standing(&mut self) -> bool {
        if self.roster.len() != 1 {
            return false;
        }
        let winner = self.roster[0].name().to_owned();
        self.active_index = 0;
        self.record(GameEvent::Victory {
            player: winner.clone(),
        });
        self.finish(GameResult::Winner(winner));
        true
    }

    pub(super) fn finish(&mut self, result: GameResult) {
        tracing::info!(?result, turns = self.turn_number, "match ended");
        self.phase = MatchPhase::Ended;
        self.result = Some(result);
    }

    #[cfg(test)]
    pub(crate) fn active_player_mut(&mut self) -> &mut Player {
        &mut self.roster[self.active_index]
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::game::test_support::{game_with_deck, uniform_game};

    #[test]
    fn test_start_initializes_players() {
        let mut game = uniform_game(0, &["Rahmi", "Berk", "Sefkatli"], 42);
        game.start().unwrap();

        let active = game.active_player().unwrap().clone();
        for player in game.players() {
            if *player == active {
                assert_eq!(player.mana_capacity(), 1);
                assert_eq!(player.mana(), 1);
                assert_eq!(player.hand().len(), 4);
                assert_eq!(player.deck_size(), 16);
            } else {
                assert_eq!(player.mana_capacity(), 0);
                assert_eq!(player.mana(), 0);
                assert_eq!(player.hand().len(), 3);
                assert_eq!(player.deck_size(), 17);
            }
            assert_eq!(player.health(), 30);
        }
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_start_requires_two_players() {
        let mut game = uniform_game(0, &["Berk"], 42);

        assert_eq!(game.start(), Err(GameError::NotEnoughPlayers { count: 1 }));
        assert_eq!(game.phase(), MatchPhase::NotStarted);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut game = uniform_game(0, &["Rahmi", "Berk"], 42);
        game.start().unwrap();

        assert_eq!(game.start(), Err(GameError::MatchAlreadyStarted));
    }

    #[test]
    fn test_start_rejects_inconsistent_config() {
        let json = serde_json::json!({
            "players": ["A", "B"],
            "deck": [1, 1],
            "initialHealth": 30,
            "initialManaCapacity": 0,
            "initialHandSize": 3,
            "maxManaCapacity": 10,
            "maxHandSize": 5,
            "bleedingDamage": 1
        });
        let config: GameConfig = serde_json::from_value(json).unwrap();
        let mut game = Game::with_config_players(config, GameRng::new(1)).unwrap();

        assert!(matches!(game.start(), Err(GameError::InvalidConfiguration(_))));
        assert!(!game.is_started());
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = game_with_deck(&[0, 1, 2, 3, 4, 5, 6, 7], &["A", "B", "C"], 9);
        let mut b = game_with_deck(&[0, 1, 2, 3, 4, 5, 6, 7], &["A", "B", "C"], 9);
        a.start().unwrap();
        b.start().unwrap();

        assert_eq!(a.active_index(), b.active_index());
        for (pa, pb) in a.players().zip(b.players()) {
            assert_eq!(pa.hand(), pb.hand());
            assert_eq!(pa.deck(), pb.deck());
        }
        assert_eq!(a.events(), b.events());
    }

    #[test]
    fn test_decks_are_shuffled_independently() {
        let deck: Vec<i32> = (0..20).collect();
        let mut game = game_with_deck(&deck, &["A", "B", "C"], 3);
        game.start().unwrap();

        let decks: Vec<_> = game.players().map(|p| p.deck().clone()).collect();
        assert_ne!(decks[0], decks[1]);
        assert_ne!(decks[1], decks[2]);
    }

    #[test]
    fn test_queries_before_start() {
        let game = uniform_game(0, &["Rahmi", "Berk"], 42);

        assert!(game.active_player().is_none());
        assert!(game.active_index().is_none());
        assert!(!game.is_live());
        assert!(game.result().is_none());
        assert_eq!(game.roster().len(), 2);
        assert!(game.player(" Berk ").is_some());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut game = uniform_game(1, &["Rahmi", "Berk", "Sefkatli"], 42);
        game.start().unwrap();

        let before = (game.roster(), game.active_index(), game.phase(), game.events().len());
        for _ in 0..5 {
            let _ = game.roster();
            let _ = game.active_player();
            let _ = game.is_live();
        }
        let after = (game.roster(), game.active_index(), game.phase(), game.events().len());

        assert_eq!(before, after);
    }

    #[test]
    fn test_roster_snapshot_is_detached() {
        let mut game = uniform_game(1, &["Rahmi", "Berk", "Sefkatli"], 42);
        game.start().unwrap();
        let snapshot = game.roster();
        let healths: Vec<_> = snapshot.iter().map(Player::health).collect();

        game.play_card(Card::new(1)).unwrap();

        let after: Vec<_> = snapshot.iter().map(Player::health).collect();
        assert_eq!(healths, after);
        assert!(game.players().any(|p| p.health() == 29));
    }

    #[test]
    fn test_take_events_drains() {
        let mut game = uniform_game(0, &["Rahmi", "Berk"], 42);
        game.start().unwrap();

        let events = game.take_events();
        assert!(matches!(events.last(), Some(GameEvent::TurnStarted { turn: 1, .. })));
        assert!(game.events().is_empty());
    }
}
