//! Cards and the piles that hold them.
//!
//! ## Key Types
//!
//! - `Card`: Value type defined entirely by its cost
//! - `Deck`: Ordered draw pile, shuffled once at match start
//! - `Hand`: Unordered held cards with remove-first-match semantics

pub mod card;
pub mod deck;
pub mod hand;

pub use card::Card;
pub use deck::Deck;
pub use hand::Hand;
