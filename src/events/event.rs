//! Game event types.
//!
//! Events are structured facts recorded by the turn engine as it resolves
//! commands. The engine never formats text; renderers decide how each
//! event is shown.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Something that happened during a match.
///
/// Health values are the player's health *after* the event was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to `player` and their mana refilled.
    TurnStarted { player: String, turn: u32, mana: i32 },

    /// `player` drew a card into their hand.
    CardDrawn { player: String, card: Card },

    /// `player` had to draw from an empty deck.
    BleedOut { player: String, damage: i32, health: i32 },

    /// `player` drew with a full hand; the card was discarded.
    Overload { player: String, card: Card },

    /// `player` had nothing affordable, so their turn passed automatically.
    AutoSkip { player: String },

    /// `player` played a card.
    CardPlayed { player: String, card: Card },

    /// `target` took damage from a card played by `source`.
    DamageDealt { source: String, target: String, amount: i32, health: i32 },

    /// `player` dropped to zero health or below and left the roster.
    Eliminated { player: String },

    /// `player` is the last one standing.
    Victory { player: String },

    /// No card can ever be played again, so the remaining `turns` turns
    /// were resolved at once as bleed damage.
    FastForward { turns: u32 },

    /// No future turn can change anything; the match ended without a winner.
    Stalemate,

    /// `player` ended their turn voluntarily.
    TurnEnded { player: String },
}

impl GameEvent {
    /// The player this event is primarily about.
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::BleedOut { player, .. }
            | GameEvent::Overload { player, .. }
            | GameEvent::AutoSkip { player }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::Eliminated { player }
            | GameEvent::Victory { player }
            | GameEvent::TurnEnded { player } => Some(player),
            GameEvent::DamageDealt { target, .. } => Some(target),
            GameEvent::FastForward { .. } | GameEvent::Stalemate => None,
        }
    }

    /// Whether this event ends the match.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Victory { .. } | GameEvent::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player() {
        let damage = GameEvent::DamageDealt {
            source: "Berk".into(),
            target: "Rahmi".into(),
            amount: 3,
            health: 27,
        };
        assert_eq!(damage.player(), Some("Rahmi"));
        assert_eq!(GameEvent::AutoSkip { player: "Berk".into() }.player(), Some("Berk"));
        assert_eq!(GameEvent::Stalemate.player(), None);
        assert_eq!(GameEvent::FastForward { turns: 3 }.player(), None);
    }

    #[test]
    fn test_terminal() {
        assert!(GameEvent::Victory { player: "Berk".into() }.is_terminal());
        assert!(GameEvent::Stalemate.is_terminal());
        assert!(!GameEvent::Eliminated { player: "Berk".into() }.is_terminal());
        assert!(!GameEvent::FastForward { turns: 3 }.is_terminal());
    }
}
