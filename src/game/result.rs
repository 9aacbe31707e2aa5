//! Match outcomes.

use serde::{Deserialize, Serialize};

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Last player standing.
    Winner(String),
    /// Nothing could ever change again; no winner.
    Stalemate,
}

impl GameResult {
    /// The winner's name, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameResult::Winner(name) => Some(name),
            GameResult::Stalemate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_winner() {
        let result = GameResult::Winner("Berk".into());
        assert_eq!(result.winner(), Some("Berk"));

        assert_eq!(GameResult::Stalemate.winner(), None);
    }
}
