//! # tcg
//!
//! A multiplayer, turn-based resource-and-damage card game.
//!
//! Players take turns gaining mana capacity, drawing cards and spending
//! mana to damage every opponent at once. A card's cost is also its damage.
//! Players who can no longer draw bleed out; the last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **The turn engine owns the rules.** [`Game`] is the only thing that
//!    mutates players. Every command resolves its whole cascade
//!    (eliminations, automatic turn passes) before returning.
//!
//! 2. **N players.** Nothing assumes two seats; eliminations re-anchor the
//!    active-player index by lookup.
//!
//! 3. **Validated configuration.** [`GameConfig`] enforces its own ranges
//!    and cross-field rules so the engine never re-checks them.
//!
//! 4. **Deterministic when seeded.** Seating and shuffles come from an
//!    injected [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration and its JSON file, errors
//! - `cards`: cards, decks and hands
//! - `events`: structured facts recorded by the engine
//! - `game`: the turn engine
//! - `ui`: menu-driven text interface used by the `tcg` binary
//!
//! ## Example
//!
//! ```
//! use tcg::{GameBuilder, GameEvent};
//!
//! let mut game = GameBuilder::new()
//!     .players(["Rahmi", "Berk"])
//!     .build(42)
//!     .unwrap();
//! game.start().unwrap();
//!
//! while game.is_live() {
//!     game.end_turn().unwrap();
//! }
//!
//! // Nobody played a card, so someone bled out.
//! assert!(game.winner().is_some());
//! assert!(game
//!     .events()
//!     .iter()
//!     .any(|e| matches!(e, GameEvent::BleedOut { .. })));
//! ```

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod ui;

pub use crate::cards::{Card, Deck, Hand};
pub use crate::core::{ConfigFileError, GameConfig, GameError, GameRng, InvalidConfig, Player, Result};
pub use crate::events::GameEvent;
pub use crate::game::{Game, GameBuilder, GameResult, MatchPhase};
pub use crate::ui::TextUi;
