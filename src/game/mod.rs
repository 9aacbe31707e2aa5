//! The turn engine.
//!
//! [`Game`] owns the roster, the active-player index and the match
//! lifecycle. Its behaviour is split by concern:
//!
//! - `roster`: adding and removing players before the match starts
//! - `turn`: turn advancement, draw, bleed-out and auto-skip
//! - `play`: card play, damage and elimination, voluntary turn end
//!
//! Every command is synchronous and leaves the engine in a state where
//! either the active player can act or the match is over.

mod builder;
#[allow(clippy::module_inception)]
mod game;
mod play;
mod result;
mod roster;
mod turn;

pub use builder::GameBuilder;
pub use game::{Game, MatchPhase};
pub use result::GameResult;

#[cfg(test)]
pub(crate) mod test_support {
    use super::Game;
    use crate::cards::Card;
    use crate::core::{GameConfig, GameRng};

    /// Engine over `config`, seated with `names` instead of the configured players.
    pub(crate) fn game_with_config(config: GameConfig, names: &[&str], seed: u64) -> Game {
        let mut game = Game::new(config, GameRng::new(seed));
        for name in names {
            game.add_player(name).unwrap();
        }
        game
    }

    pub(crate) fn game_with_deck(deck: &[i32], names: &[&str], seed: u64) -> Game {
        let mut config = GameConfig::default();
        config
            .set_deck(deck.iter().copied().map(Card::new).collect())
            .unwrap();
        game_with_config(config, names, seed)
    }

    /// Default config with a 20-card deck where every card costs `cost`.
    pub(crate) fn uniform_game(cost: i32, names: &[&str], seed: u64) -> Game {
        game_with_deck(&[cost; 20], names, seed)
    }

    /// End turns until the currently active player is active again, `n`
    /// times. Stops early if the match ends or that player is eliminated.
    pub(crate) fn end_rounds(game: &mut Game, n: usize) {
        for _ in 0..n {
            let Some(current) = game.active_player().map(|p| p.name().to_owned()) else {
                return;
            };
            loop {
                game.end_turn().unwrap();
                if !game.is_live() || game.player(&current).is_none() {
                    return;
                }
                if game.active_player().is_some_and(|p| p.name() == current) {
                    break;
                }
            }
        }
    }
}
