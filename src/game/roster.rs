//! Pre-match roster management.

use super::game::{Game, MatchPhase};
use crate::core::{GameError, Player, Result};

impl Game {
    /// Seat a new player at the end of the roster.
    ///
    /// Names are trimmed; player identity is the trimmed name.
    pub fn add_player(&mut self, name: impl AsRef<str>) -> Result<()> {
        self.ensure_not_started()?;
        let player = Player::new(name)?;
        if self.position_of(player.name()).is_some() {
            return Err(GameError::DuplicatePlayer(player.name().to_owned()));
        }
        tracing::debug!(player = player.name(), "player added");
        self.roster.push_back(player);
        Ok(())
    }

    /// Remove a seated player by name.
    pub fn remove_player(&mut self, name: impl AsRef<str>) -> Result<()> {
        self.ensure_not_started()?;
        let name = name.as_ref().trim();
        let index = self
            .position_of(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_owned()))?;
        self.roster.remove(index);
        tracing::debug!(player = name, "player removed");
        Ok(())
    }

    fn ensure_not_started(&self) -> Result<()> {
        if self.phase == MatchPhase::NotStarted {
            Ok(())
        } else {
            Err(GameError::MatchAlreadyStarted)
        }
    }
}
