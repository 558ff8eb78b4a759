use serde::Serialize;

use crate::error::TrackerError;

/// Stable identity of a game in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GameId(pub u32);

/// Stable identity of a player in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A board game known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub category: String,
    pub player_count: u32,
    pub duration_minutes: u32,
    pub description: String,
}

impl Game {
    pub(crate) fn from_draft(id: GameId, draft: GameDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            player_count: draft.player_count,
            duration_minutes: draft.duration_minutes,
            description: draft.description,
        }
    }

    pub(crate) fn apply_draft(&mut self, draft: GameDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.player_count = draft.player_count;
        self.duration_minutes = draft.duration_minutes;
        self.description = draft.description;
    }

    /// Copy the fields a session keeps once the game may be gone.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Game fields as entered in the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub category: String,
    pub player_count: u32,
    pub duration_minutes: u32,
    pub description: String,
}

impl GameDraft {
    /// Build a draft from raw form text, parsing the numeric fields.
    pub fn parse(
        name: &str,
        category: &str,
        player_count: &str,
        duration_minutes: &str,
        description: &str,
    ) -> Result<Self, TrackerError> {
        let player_count = parse_field("player count", player_count)?;
        if player_count == 0 {
            return Err(TrackerError::InvalidField {
                field: "player count",
                value: "0".to_string(),
            });
        }
        let duration_minutes = parse_field("duration", duration_minutes)?;

        Ok(Self {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            player_count,
            duration_minutes,
            description: description.to_string(),
        })
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<u32, TrackerError> {
    raw.trim().parse().map_err(|_| TrackerError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

/// A person who takes part in sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The part of a game a session remembers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub name: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_bare_numbers() {
        assert_eq!(serde_json::to_string(&GameId(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&PlayerId(7)).unwrap(), "7");
    }

    #[test]
    fn test_draft_parses_trimmed_numbers() {
        let draft = GameDraft::parse("Catan ", "strategy", " 4", "90 ", "Trade sheep").unwrap();

        assert_eq!(draft.name, "Catan");
        assert_eq!(draft.player_count, 4);
        assert_eq!(draft.duration_minutes, 90);
        assert_eq!(draft.description, "Trade sheep");
    }

    #[test]
    fn test_draft_rejects_non_numeric_player_count() {
        let err = GameDraft::parse("Catan", "strategy", "four", "90", "").unwrap_err();

        assert_eq!(
            err,
            TrackerError::InvalidField {
                field: "player count",
                value: "four".to_string()
            }
        );
    }

    #[test]
    fn test_draft_rejects_zero_players() {
        assert!(GameDraft::parse("Solo", "puzzle", "0", "10", "").is_err());
    }

    #[test]
    fn test_draft_accepts_zero_duration() {
        let draft = GameDraft::parse("Blitz", "party", "2", "0", "").unwrap();
        assert_eq!(draft.duration_minutes, 0);
    }

    #[test]
    fn test_draft_rejects_negative_duration() {
        assert!(GameDraft::parse("Chess", "abstract", "2", "-5", "").is_err());
    }

    #[test]
    fn test_game_display() {
        let game = Game::from_draft(
            GameId(1),
            GameDraft::parse("Chess", "abstract", "2", "60", "").unwrap(),
        );
        assert_eq!(game.to_string(), "Chess (abstract)");
    }
}
