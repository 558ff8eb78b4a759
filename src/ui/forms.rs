//! Editable state behind the add/edit dialogs.

use crate::{
    error::TrackerError,
    models::{Game, GameDraft, GameId, PlayerId},
    session::parse_scores,
};

use super::types::InputStatus;

pub const GAME_FIELD_LABELS: [&str; 5] = [
    "Name",
    "Category",
    "Players",
    "Duration (min)",
    "Description",
];

/// Fields of the add/edit game dialog.
#[derive(Debug, Clone, Default)]
pub struct GameForm {
    pub fields: [String; 5],
    pub active: usize,
    /// `Some` when editing an existing game.
    pub editing: Option<GameId>,
}

impl GameForm {
    pub fn for_game(game: &Game) -> Self {
        Self {
            fields: [
                game.name.clone(),
                game.category.clone(),
                game.player_count.to_string(),
                game.duration_minutes.to_string(),
                game.description.clone(),
            ],
            active: 0,
            editing: Some(game.id),
        }
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push(&mut self, c: char) {
        self.fields[self.active].push(c);
    }

    pub fn pop(&mut self) {
        self.fields[self.active].pop();
    }

    pub fn to_draft(&self) -> Result<GameDraft, TrackerError> {
        let [name, category, players, duration, description] = &self.fields;
        GameDraft::parse(name, category, players, duration, description)
    }
}

/// Focused part of the session dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionField {
    #[default]
    Game,
    Players,
    Scores,
}

#[derive(Debug, Clone, Default)]
pub struct SessionForm {
    pub field: SessionField,
    /// Index into the catalog's games.
    pub game_index: usize,
    pub player_cursor: usize,
    /// Chosen players in the order they were picked.
    pub selected: Vec<PlayerId>,
    pub scores: String,
}

impl SessionForm {
    pub fn next_field(&mut self) {
        self.field = match self.field {
            SessionField::Game => SessionField::Players,
            SessionField::Players => SessionField::Scores,
            SessionField::Scores => SessionField::Game,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            SessionField::Game => SessionField::Scores,
            SessionField::Players => SessionField::Game,
            SessionField::Scores => SessionField::Players,
        };
    }

    /// Select `player`, or deselect it if already chosen.
    pub fn toggle_player(&mut self, player: PlayerId) {
        match self.selected.iter().position(|&p| p == player) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(player),
        }
    }

    /// 1-based pick order of `player`, if selected.
    pub fn pick_order(&self, player: PlayerId) -> Option<usize> {
        self.selected.iter().position(|&p| p == player).map(|i| i + 1)
    }

    pub fn score_status(&self) -> InputStatus {
        if self.scores.trim().is_empty() {
            return InputStatus::Incomplete;
        }

        let scores = match parse_scores(&self.scores) {
            Ok(s) => s,
            Err(_) => return InputStatus::Invalid("scores must be integers"),
        };

        if scores.len() != self.selected.len() {
            return InputStatus::Invalid("one score per selected player");
        }

        InputStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_form_cycles_fields() {
        let mut form = GameForm::default();
        form.prev_field();
        assert_eq!(form.active, 4);
        form.next_field();
        form.next_field();
        assert_eq!(form.active, 1);
    }

    #[test]
    fn test_game_form_to_draft() {
        let mut form = GameForm::default();
        for c in "Catan".chars() {
            form.push(c);
        }
        form.fields[2] = "4".to_string();
        form.fields[3] = "90".to_string();

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, "Catan");
        assert_eq!(draft.player_count, 4);
    }

    #[test]
    fn test_toggle_player_keeps_pick_order() {
        let mut form = SessionForm::default();
        form.toggle_player(PlayerId(3));
        form.toggle_player(PlayerId(1));
        form.toggle_player(PlayerId(2));
        form.toggle_player(PlayerId(1));

        assert_eq!(form.selected, vec![PlayerId(3), PlayerId(2)]);
        assert_eq!(form.pick_order(PlayerId(2)), Some(2));
        assert_eq!(form.pick_order(PlayerId(1)), None);
    }

    #[test]
    fn test_score_status() {
        let mut form = SessionForm::default();
        form.toggle_player(PlayerId(1));
        form.toggle_player(PlayerId(2));
        assert_eq!(form.score_status(), InputStatus::Incomplete);

        form.scores = "10, x".to_string();
        assert!(matches!(form.score_status(), InputStatus::Invalid(_)));

        form.scores = "10".to_string();
        assert!(matches!(form.score_status(), InputStatus::Invalid(_)));

        form.scores = "10, 12".to_string();
        assert_eq!(form.score_status(), InputStatus::Valid);
    }
}
