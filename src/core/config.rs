//! Match configuration.
//!
//! `GameConfig` holds the tunable parameters of a match: starting values,
//! ceilings, the starting deck and the configured player set. It performs no
//! game logic. Every setter validates its input against the current values
//! of the other fields, so an instance that was only ever mutated through
//! setters is always internally consistent and the turn engine never
//! re-checks it.
//!
//! Instances that did not come through the setters (deserialized from a
//! file) must go through [`GameConfig::validate`] before use.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A configuration rule violation.
///
/// The `Display` text is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("There cannot be less than 2 unique players")]
    TooFewPlayers,
    #[error("Player name cannot be empty")]
    BlankPlayerName,
    #[error("Deck must contain at least 1 card")]
    EmptyDeck,
    #[error("Deck size cannot be less than the initial hand size")]
    DeckSmallerThanHand,
    #[error("Card costs cannot be negative")]
    NegativeCardCost,
    #[error("Initial health cannot be less than 1")]
    InitialHealthBelowOne,
    #[error("Initial mana capacity cannot be less than 0")]
    NegativeInitialManaCapacity,
    #[error("Initial mana capacity cannot be greater than the max mana capacity")]
    InitialManaAboveMax,
    #[error("Initial hand size cannot be less than 0")]
    NegativeInitialHandSize,
    #[error("Initial hand size cannot be greater than the number of cards in the initial deck")]
    InitialHandExceedsDeck,
    #[error("Initial hand size cannot be greater than the max hand size")]
    InitialHandExceedsMaxHand,
    #[error("Max mana capacity cannot be less than 1")]
    MaxManaBelowOne,
    #[error("Max mana capacity cannot be less than the initial mana capacity")]
    MaxManaBelowInitial,
    #[error("Max player hand size cannot be less than 1")]
    MaxHandBelowOne,
    #[error("Max hand size cannot be less than the initial hand size")]
    MaxHandBelowInitial,
    #[error("Bleeding damage cannot be less than 0")]
    NegativeBleedingDamage,
}

type Validation = Result<(), InvalidConfig>;

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use tcg::cards::Card;
/// use tcg::core::{GameConfig, InvalidConfig};
///
/// let mut config = GameConfig::default();
/// assert_eq!(config.initial_health(), 30);
///
/// config.set_initial_health(20).unwrap();
/// assert_eq!(
///     config.set_initial_health(0),
///     Err(InvalidConfig::InitialHealthBelowOne)
/// );
/// assert_eq!(config.initial_health(), 20);
///
/// config.set_deck(vec![Card::new(1); 10]).unwrap();
/// assert_eq!(config.deck().len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    players: Vec<String>,
    deck: Vec<Card>,
    initial_health: i32,
    initial_mana_capacity: i32,
    initial_hand_size: i32,
    max_mana_capacity: i32,
    max_hand_size: i32,
    bleeding_damage: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec!["Player1".to_owned(), "Player2".to_owned()],
            deck: default_deck(),
            initial_health: 30,
            initial_mana_capacity: 0,
            initial_hand_size: 3,
            max_mana_capacity: 10,
            max_hand_size: 5,
            bleeding_damage: 1,
        }
    }
}

fn default_deck() -> Vec<Card> {
    [0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 8]
        .into_iter()
        .map(Card::new)
        .collect()
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // === Getters ===

    /// Names of the configured player set, in entry order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// The starting deck every player receives a shuffled copy of.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn initial_health(&self) -> i32 {
        self.initial_health
    }

    #[must_use]
    pub fn initial_mana_capacity(&self) -> i32 {
        self.initial_mana_capacity
    }

    #[must_use]
    pub fn initial_hand_size(&self) -> usize {
        usize::try_from(self.initial_hand_size).unwrap_or(0)
    }

    #[must_use]
    pub fn max_mana_capacity(&self) -> i32 {
        self.max_mana_capacity
    }

    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        usize::try_from(self.max_hand_size).unwrap_or(0)
    }

    /// Damage taken when drawing from an empty deck.
    #[must_use]
    pub fn bleeding_damage(&self) -> i32 {
        self.bleeding_damage
    }

    // === Validated setters ===

    /// Replace the player set.
    ///
    /// Names are trimmed and duplicates collapse to their first occurrence.
    pub fn set_players<I, S>(&mut self, names: I) -> Validation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut players = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(InvalidConfig::BlankPlayerName);
            }
            if seen.insert(name.to_owned()) {
                players.push(name.to_owned());
            }
        }
        if players.len() < 2 {
            return Err(InvalidConfig::TooFewPlayers);
        }
        self.players = players;
        Ok(())
    }

    pub fn set_deck(&mut self, deck: Vec<Card>) -> Validation {
        check_deck(&deck, self.initial_hand_size)?;
        self.deck = deck;
        Ok(())
    }

    pub fn set_initial_health(&mut self, value: i32) -> Validation {
        check_initial_health(value)?;
        self.initial_health = value;
        Ok(())
    }

    pub fn set_initial_mana_capacity(&mut self, value: i32) -> Validation {
        check_initial_mana_capacity(value, self.max_mana_capacity)?;
        self.initial_mana_capacity = value;
        Ok(())
    }

    pub fn set_initial_hand_size(&mut self, value: i32) -> Validation {
        check_initial_hand_size(value, self.deck.len(), self.max_hand_size)?;
        self.initial_hand_size = value;
        Ok(())
    }

    pub fn set_max_mana_capacity(&mut self, value: i32) -> Validation {
        check_max_mana_capacity(value, self.initial_mana_capacity)?;
        self.max_mana_capacity = value;
        Ok(())
    }

    pub fn set_max_hand_size(&mut self, value: i32) -> Validation {
        check_max_hand_size(value, self.initial_hand_size)?;
        self.max_hand_size = value;
        Ok(())
    }

    pub fn set_bleeding_damage(&mut self, value: i32) -> Validation {
        check_bleeding_damage(value)?;
        self.bleeding_damage = value;
        Ok(())
    }

    /// Check every rule against the current field values.
    ///
    /// Needed for instances built by deserialization, which bypasses the
    /// setters.
    pub fn validate(&self) -> Validation {
        if self.players.iter().any(|p| p.trim().is_empty()) {
            return Err(InvalidConfig::BlankPlayerName);
        }
        let unique: FxHashSet<&str> = self.players.iter().map(|p| p.trim()).collect();
        if unique.len() < 2 || unique.len() != self.players.len() {
            return Err(InvalidConfig::TooFewPlayers);
        }
        check_deck(&self.deck, self.initial_hand_size)?;
        check_initial_health(self.initial_health)?;
        check_initial_mana_capacity(self.initial_mana_capacity, self.max_mana_capacity)?;
        check_initial_hand_size(self.initial_hand_size, self.deck.len(), self.max_hand_size)?;
        check_max_mana_capacity(self.max_mana_capacity, self.initial_mana_capacity)?;
        check_max_hand_size(self.max_hand_size, self.initial_hand_size)?;
        check_bleeding_damage(self.bleeding_damage)
    }
}

fn check_deck(deck: &[Card], initial_hand_size: i32) -> Validation {
    if deck.is_empty() {
        return Err(InvalidConfig::EmptyDeck);
    }
    if deck.iter().any(|c| c.cost() < 0) {
        return Err(InvalidConfig::NegativeCardCost);
    }
    if usize::try_from(initial_hand_size).is_ok_and(|size| size > deck.len()) {
        return Err(InvalidConfig::DeckSmallerThanHand);
    }
    Ok(())
}

fn check_initial_health(value: i32) -> Validation {
    if value < 1 {
        return Err(InvalidConfig::InitialHealthBelowOne);
    }
    Ok(())
}

fn check_initial_mana_capacity(value: i32, max: i32) -> Validation {
    if value < 0 {
        return Err(InvalidConfig::NegativeInitialManaCapacity);
    }
    if value > max {
        return Err(InvalidConfig::InitialManaAboveMax);
    }
    Ok(())
}

fn check_initial_hand_size(value: i32, deck_size: usize, max_hand_size: i32) -> Validation {
    let Ok(size) = usize::try_from(value) else {
        return Err(InvalidConfig::NegativeInitialHandSize);
    };
    if size > deck_size {
        return Err(InvalidConfig::InitialHandExceedsDeck);
    }
    if value > max_hand_size {
        return Err(InvalidConfig::InitialHandExceedsMaxHand);
    }
    Ok(())
}

fn check_max_mana_capacity(value: i32, initial: i32) -> Validation {
    if value < 1 {
        return Err(InvalidConfig::MaxManaBelowOne);
    }
    if value < initial {
        return Err(InvalidConfig::MaxManaBelowInitial);
    }
    Ok(())
}

fn check_max_hand_size(value: i32, initial: i32) -> Validation {
    if value < 1 {
        return Err(InvalidConfig::MaxHandBelowOne);
    }
    if value < initial {
        return Err(InvalidConfig::MaxHandBelowInitial);
    }
    Ok(())
}

fn check_bleeding_damage(value: i32) -> Validation {
    if value < 0 {
        return Err(InvalidConfig::NegativeBleedingDamage);
    }
    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Players: {}", join(&self.players))?;
        writeln!(f, "Deck: {}", join(&self.deck))?;
        writeln!(f, "Initial health: {}", self.initial_health)?;
        writeln!(f, "Initial mana capacity: {}", self.initial_mana_capacity)?;
        writeln!(f, "Initial hand size: {}", self.initial_hand_size)?;
        writeln!(f, "Max mana capacity: {}", self.max_mana_capacity)?;
        writeln!(f, "Max hand size: {}", self.max_hand_size)?;
        writeln!(f, "Bleeding damage amount: {}", self.bleeding_damage)
    }
}
