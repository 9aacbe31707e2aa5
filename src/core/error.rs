//! Errors returned by turn-engine commands.
//!
//! Every variant is a caller-input or sequencing error. Commands validate
//! before they mutate, so a returned error always means the engine state is
//! exactly what it was before the call.

use crate::cards::Card;
use crate::core::config::InvalidConfig;

/// Errors surfaced by [`crate::game::Game`] commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("a player named {0:?} already exists")]
    DuplicatePlayer(String),

    #[error("no player named {0:?} exists")]
    UnknownPlayer(String),

    #[error("players cannot be changed after the game has started")]
    MatchAlreadyStarted,

    #[error("at least 2 players are needed to start, found {count}")]
    NotEnoughPlayers { count: usize },

    #[error("plays can only be made while the game is live")]
    MatchNotLive,

    #[error("only the cards in hand can be played (no card with cost {0} in hand)")]
    CardNotInHand(Card),

    #[error("not enough mana to play requested card (cost {cost}, mana {mana})")]
    InsufficientMana { cost: i32, mana: i32 },

    #[error("player name cannot be empty")]
    InvalidName,

    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfig),
}

pub type Result<T> = std::result::Result<T, GameError>;
