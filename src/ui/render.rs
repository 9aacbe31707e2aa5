//! Text rendering of engine events and match state.

use std::io::{self, Write};

use crate::game::Game;
use crate::events::GameEvent;

const RULE: &str = "===============================================================";

/// The line shown for an event, if it is shown at all.
///
/// Draws and turn starts are silent: the state printout that follows a
/// resolved turn already shows their effect.
#[must_use]
pub fn event_line(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::TurnStarted { .. } | GameEvent::CardDrawn { .. } => return None,
        GameEvent::BleedOut { player, .. } => format!("{player} is bleeding out!"),
        GameEvent::Overload { player, .. } => format!("{player} is overloaded!"),
        GameEvent::AutoSkip { player } => {
            format!("No playable cards exist. Auto skipping {player}'s turn.")
        }
        GameEvent::CardPlayed { player, card } => {
            format!("{player} played a card with {} cost", card.cost())
        }
        GameEvent::DamageDealt { target, amount, .. } => format!("{target} took {amount} damage!"),
        GameEvent::Eliminated { player } => format!("{player} has lost!"),
        GameEvent::Victory { player } => format!("{player} has won!"),
        GameEvent::FastForward { turns } => {
            format!("No one can ever play a card again. Bleeding through the remaining {turns} turns.")
        }
        GameEvent::Stalemate => "No one can ever play a card again. The game is a draw!".to_owned(),
        GameEvent::TurnEnded { player } => format!("{player}'s turn ended"),
    };
    Some(line)
}

pub fn write_events(out: &mut impl Write, events: &[GameEvent]) -> io::Result<()> {
    for line in events.iter().filter_map(event_line) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print every player's counters, then the active player's hand and the
/// input prompt.
pub fn write_state(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Players: ")?;
    for player in game.players() {
        writeln!(
            out,
            "Name: {}, Health: {}, Mana: {}, Mana capacity: {}, Cards in hand: {}",
            player.name(),
            player.health(),
            player.mana(),
            player.mana_capacity(),
            player.hand().len()
        )?;
    }
    writeln!(out, "{RULE}")?;

    if let Some(active) = game.active_player() {
        let hand: Vec<String> = active.hand().iter().map(|c| c.to_string()).collect();
        writeln!(out, "Active player: {}", active.name())?;
        writeln!(out, "Active player's hand: [{}]", hand.join(", "))?;
    }
    writeln!(
        out,
        "Choose a card to play by entering its cost, end your turn by entering 'end' \
         or quit the game by entering 'quit': "
    )
}
