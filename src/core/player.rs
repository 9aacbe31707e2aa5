//! Players and their per-match counters.
//!
//! A player is identified by name alone: two `Player` values with the same
//! name are the same player for every roster lookup. All counters start at
//! zero and are populated by the turn engine when a match starts.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::error::GameError;
use crate::cards::{Card, Deck, Hand};

/// A seat at the table.
///
/// Read access is public; only the turn engine mutates counters, hand and
/// deck.
///
/// ```
/// use tcg::core::Player;
///
/// let player = Player::new("  Berk ").unwrap();
/// assert_eq!(player.name(), "Berk");
/// assert!(Player::new("   ").is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: i32,
    mana: i32,
    mana_capacity: i32,
    hand: Hand,
    deck: Deck,
}

impl Player {
    /// Create a player with a trimmed, non-empty name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, GameError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(GameError::InvalidName);
        }

        Ok(Self {
            name: name.to_owned(),
            health: 0,
            mana: 0,
            mana_capacity: 0,
            hand: Hand::new(),
            deck: Deck::default(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Mana available to spend this turn.
    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    /// The level mana refills to at the start of each of this player's turns.
    #[must_use]
    pub fn mana_capacity(&self) -> i32 {
        self.mana_capacity
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Dead players have health at or below zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Cards in hand that current mana can pay for.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<Card> {
        self.hand.playable(self.mana).collect()
    }

    #[must_use]
    pub fn has_playable_card(&self) -> bool {
        self.hand.has_playable(self.mana)
    }

    // === Engine-only mutation ===

    /// Reset every counter for a fresh match and deal the opening hand.
    ///
    /// The deck must hold at least `hand_size` cards.
    pub(crate) fn prepare(&mut self, health: i32, mana_capacity: i32, deck: Deck, hand_size: usize) {
        self.health = health;
        self.mana = 0;
        self.mana_capacity = mana_capacity;
        self.deck = deck;
        self.hand.clear();
        for _ in 0..hand_size {
            if let Some(card) = self.deck.draw() {
                self.hand.push(card);
            }
        }
    }

    /// Grow capacity by one (up to `max`) and refill mana to it.
    pub(crate) fn refill_mana(&mut self, max: i32) {
        self.mana_capacity = self.mana_capacity.saturating_add(1).min(max);
        self.mana = self.mana_capacity;
    }

    /// Apply `turns` turns in which the player can only bleed: capacity
    /// grows once per turn and each turn costs `bleeding` health.
    pub(crate) fn sit_out(&mut self, turns: i64, max: i32, bleeding: i64) {
        if turns <= 0 {
            return;
        }
        let capacity = (i64::from(self.mana_capacity) + turns).min(i64::from(max));
        self.mana_capacity = i32::try_from(capacity).unwrap_or(max);
        self.mana = self.mana_capacity;
        let health = i64::from(self.health).saturating_sub(bleeding.saturating_mul(turns));
        self.health = i32::try_from(health).unwrap_or(i32::MIN);
    }

    pub(crate) fn spend_mana(&mut self, amount: i32) {
        self.mana -= amount;
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let player = Player::new(" Rahmi\t").unwrap();
        assert_eq!(player.name(), "Rahmi");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Player::new("").unwrap_err(), GameError::InvalidName);
        assert_eq!(Player::new("  \n").unwrap_err(), GameError::InvalidName);
    }

    #[test]
    fn test_equality_by_name() {
        let mut a = Player::new("Berk").unwrap();
        let b = Player::new("Berk").unwrap();
        a.take_damage(5);

        assert_eq!(a, b);
        assert_ne!(a, Player::new("Sefkatli").unwrap());
    }

    #[test]
    fn test_prepare_deals_opening_hand() {
        let mut player = Player::new("Berk").unwrap();
        let deck = Deck::new((0..10).map(Card::new).collect());

        player.prepare(30, 0, deck, 3);

        assert_eq!(player.health(), 30);
        assert_eq!(player.mana(), 0);
        assert_eq!(player.mana_capacity(), 0);
        assert_eq!(player.hand().len(), 3);
        assert_eq!(player.deck_size(), 7);
        assert!(player.hand().contains(Card::new(9)));
    }

    #[test]
    fn test_refill_mana_caps_at_max() {
        let mut player = Player::new("Berk").unwrap();
        player.prepare(30, 9, Deck::default(), 0);

        player.refill_mana(10);
        assert_eq!((player.mana(), player.mana_capacity()), (10, 10));

        player.spend_mana(4);
        player.refill_mana(10);
        assert_eq!((player.mana(), player.mana_capacity()), (10, 10));
    }

    #[test]
    fn test_refill_mana_at_integer_ceiling() {
        let mut player = Player::new("Berk").unwrap();
        player.prepare(30, i32::MAX, Deck::default(), 0);

        player.refill_mana(i32::MAX);

        assert_eq!(player.mana_capacity(), i32::MAX);
        assert_eq!(player.mana(), i32::MAX);
    }

    #[test]
    fn test_sit_out_grows_mana_and_bleeds() {
        let mut player = Player::new("Berk").unwrap();
        player.prepare(30, 8, Deck::default(), 0);

        player.sit_out(4, 10, 3);

        assert_eq!((player.mana(), player.mana_capacity()), (10, 10));
        assert_eq!(player.health(), 18);

        player.sit_out(0, 10, 3);
        assert_eq!(player.health(), 18);
    }

    #[test]
    fn test_playable_cards() {
        let mut player = Player::new("Berk").unwrap();
        let deck = Deck::new(vec![Card::new(3), Card::new(1), Card::new(0)]);
        player.prepare(30, 0, deck, 3);
        player.refill_mana(10);

        assert_eq!(player.playable_cards(), vec![Card::new(0), Card::new(1)]);
        assert!(player.has_playable_card());

        player.spend_mana(1);
        assert_eq!(player.playable_cards(), vec![Card::new(0)]);
    }

    #[test]
    fn test_death_is_derived() {
        let mut player = Player::new("Berk").unwrap();
        player.prepare(2, 0, Deck::default(), 0);
        assert!(!player.is_dead());

        player.take_damage(2);
        assert!(player.is_dead());
    }
}
