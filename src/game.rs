use crate::team::TeamId;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    /// The loser has no pieces left in play.
    Won { winner: TeamId, loser: TeamId },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won { .. })
    }

    pub fn winner(&self) -> Option<TeamId> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress => None,
        }
    }
}
