use thiserror::Error;

use crate::models::{GameId, PlayerId};

/// What the user was expected to have selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Game,
    Players,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Selection::Game => "game",
            Selection::Players => "players",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid score {token:?}: expected an integer")]
    Parse { token: String },

    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("no {0} selected")]
    NoSelection(Selection),

    #[error("{players} player(s) selected but {scores} score(s) entered")]
    ScoreCountMismatch { players: usize, scores: usize },

    #[error("player {0} selected more than once")]
    DuplicatePlayer(PlayerId),

    #[error("unknown game {0}")]
    UnknownGame(GameId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}

impl TrackerError {
    /// Short title for the alert line.
    pub fn title(&self) -> &'static str {
        match self {
            TrackerError::Parse { .. } | TrackerError::InvalidField { .. } => "Invalid input",
            TrackerError::NoSelection(Selection::Game) => "No game selected",
            TrackerError::NoSelection(Selection::Players) => "No players selected",
            TrackerError::ScoreCountMismatch { .. } => "Score count mismatch",
            TrackerError::DuplicatePlayer(_) => "Duplicate player",
            TrackerError::UnknownGame(_) | TrackerError::UnknownPlayer(_) => "Stale selection",
        }
    }
}
