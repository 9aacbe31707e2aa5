//! Events recorded by the turn engine.
//!
//! Commands on [`crate::game::Game`] append events in the order things
//! happen, including everything a cascade of automatic turn passes
//! produces. Front ends drain them with [`crate::game::Game::take_events`]
//! and render them.

mod event;

pub use event::GameEvent;
