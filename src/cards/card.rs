//! The card value type.
//!
//! A card is nothing but its cost: playing a card of cost N spends N mana
//! and deals N damage to every opponent. Two cards with the same cost are
//! interchangeable.

use serde::{Deserialize, Serialize};

/// A card, identified entirely by its mana cost.
///
/// Serializes as a bare integer so decks read naturally in config files.
///
/// ```
/// use tcg::cards::Card;
///
/// assert_eq!(Card::new(3), Card::new(3));
/// assert_eq!(Card::new(3).damage(), 3);
/// assert_eq!(Card::new(0).damage(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    cost: i32,
}

impl Card {
    /// Create a card with the given cost.
    #[must_use]
    pub const fn new(cost: i32) -> Self {
        Self { cost }
    }

    /// Mana required to play this card.
    #[must_use]
    pub const fn cost(self) -> i32 {
        self.cost
    }

    /// Damage dealt to each opponent when played.
    ///
    /// Zero-cost cards are pure discards.
    #[must_use]
    pub const fn damage(self) -> i32 {
        if self.cost > 0 {
            self.cost
        } else {
            0
        }
    }

    /// Whether `mana` is enough to play this card.
    #[must_use]
    pub const fn is_affordable(self, mana: i32) -> bool {
        self.cost <= mana
    }
}

impl From<i32> for Card {
    fn from(cost: i32) -> Self {
        Self::new(cost)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cost)
    }
}
