//! Recorded play sessions and score parsing.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    error::TrackerError,
    models::{GameSnapshot, PlayerId},
};

/// One player's result within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub score: i64,
}

/// One completed play of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    game: GameSnapshot,
    scores: Vec<PlayerScore>,
    played_on: NaiveDate,
}

impl Session {
    /// Pair players with scores. Player ids must be unique and the two
    /// lists must have the same length.
    pub fn new(
        game: GameSnapshot,
        players: &[PlayerId],
        scores: &[i64],
        played_on: NaiveDate,
    ) -> Result<Self, TrackerError> {
        if players.len() != scores.len() {
            return Err(TrackerError::ScoreCountMismatch {
                players: players.len(),
                scores: scores.len(),
            });
        }

        let mut entries: Vec<PlayerScore> = Vec::with_capacity(players.len());
        for (&player, &score) in players.iter().zip(scores) {
            if entries.iter().any(|e| e.player == player) {
                return Err(TrackerError::DuplicatePlayer(player));
            }
            entries.push(PlayerScore { player, score });
        }

        Ok(Self {
            game,
            scores: entries,
            played_on,
        })
    }

    pub fn game(&self) -> &GameSnapshot {
        &self.game
    }

    pub fn scores(&self) -> &[PlayerScore] {
        &self.scores
    }

    pub fn played_on(&self) -> NaiveDate {
        self.played_on
    }

    /// The score `player` got in this session, if they took part.
    pub fn score_for(&self, player: PlayerId) -> Option<i64> {
        self.scores
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.score)
    }
}

/// Ordered history of sessions, oldest first.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Append a session and return its 1-based global index.
    pub fn push(&mut self, session: Session) -> usize {
        self.sessions.push(session);
        self.sessions.len()
    }
}

/// Parse comma-separated integer scores, e.g. `"10, 20,30"`.
pub fn parse_scores(text: &str) -> Result<Vec<i64>, TrackerError> {
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| TrackerError::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}
