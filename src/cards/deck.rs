//! Draw piles.
//!
//! A `Deck` is order-sensitive: its order is fixed when it is shuffled and
//! cards only ever leave from the top (the end of the backing `Vec`).

use serde::{Deserialize, Serialize};

use super::Card;
use crate::core::GameRng;

/// A player's draw pile. Top = end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck in the given order (last card is drawn first).
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build an independently shuffled copy of `template`.
    #[must_use]
    pub fn shuffled(template: &[Card], rng: &mut GameRng) -> Self {
        let mut cards = template.to_vec();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Take the top card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
