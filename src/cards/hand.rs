//! Held cards.
//!
//! Order in a hand carries no meaning; removal takes the first card equal
//! to the one named.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Card;

/// Cards held by a player.
///
/// Hands are bounded by the configured maximum (5 by default), so they
/// live inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card equal to `card`.
    ///
    /// Returns true if a card was found and removed.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Cards whose cost fits within `mana`.
    pub fn playable(&self, mana: i32) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.is_affordable(mana))
    }

    /// Whether any card fits within `mana`.
    #[must_use]
    pub fn has_playable(&self, mana: i32) -> bool {
        self.playable(mana).next().is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(costs: &[i32]) -> Hand {
        costs.iter().copied().map(Card::new).collect()
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut h = hand(&[2, 1, 2]);

        assert!(h.remove(Card::new(2)));
        assert_eq!(h.as_slice(), &[Card::new(1), Card::new(2)]);
        assert!(!h.remove(Card::new(9)));
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_playable() {
        let h = hand(&[0, 3, 5, 1]);

        let playable: Vec<_> = h.playable(1).collect();
        assert_eq!(playable, vec![Card::new(0), Card::new(1)]);
        assert!(h.has_playable(0));
        assert!(!hand(&[4, 4]).has_playable(3));
        assert!(!Hand::new().has_playable(10));
    }

    #[test]
    fn test_contains() {
        let h = hand(&[1, 2]);
        assert!(h.contains(Card::new(1)));
        assert!(!h.contains(Card::new(3)));
    }
}
