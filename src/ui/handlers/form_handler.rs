//! Dialog submission: games, players and sessions.

use crate::tracker::{Command, Outcome};

use super::super::{
    app::App,
    forms::SessionField,
    types::Screen,
};
use super::CatalogHandler;

/// Helper struct for editing and submitting the open dialog.
pub struct FormHandler<'a> {
    app: &'a mut App,
}

impl<'a> FormHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn cancel(&mut self) {
        self.app.log("Dialog cancelled");
        self.app.screen = Screen::Catalog;
    }

    pub fn push_char(&mut self, c: char) {
        match self.app.screen {
            Screen::GameForm => self.app.game_form.push(c),
            Screen::PlayerForm => self.app.player_name.push(c),
            Screen::SessionForm => match self.app.session_form.field {
                SessionField::Scores => self.app.session_form.scores.push(c),
                SessionField::Players if c == ' ' => self.toggle_player(),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.app.screen {
            Screen::GameForm => self.app.game_form.pop(),
            Screen::PlayerForm => {
                self.app.player_name.pop();
            }
            Screen::SessionForm if self.app.session_form.field == SessionField::Scores => {
                self.app.session_form.scores.pop();
            }
            _ => {}
        }
    }

    pub fn next_field(&mut self) {
        match self.app.screen {
            Screen::GameForm => self.app.game_form.next_field(),
            Screen::SessionForm => self.app.session_form.next_field(),
            _ => {}
        }
    }

    pub fn prev_field(&mut self) {
        match self.app.screen {
            Screen::GameForm => self.app.game_form.prev_field(),
            Screen::SessionForm => self.app.session_form.prev_field(),
            _ => {}
        }
    }

    /// Up/Down inside the session dialog's player list.
    pub fn move_player_cursor(&mut self, down: bool) {
        let count = self.app.tracker.catalog().players().len();
        let form = &mut self.app.session_form;
        if down {
            if form.player_cursor + 1 < count {
                form.player_cursor += 1;
            }
        } else {
            form.player_cursor = form.player_cursor.saturating_sub(1);
        }
    }

    /// Left/Right over the catalog's games in the session dialog.
    pub fn cycle_game(&mut self, forward: bool) {
        let count = self.app.tracker.catalog().games().len();
        if count == 0 {
            return;
        }
        let form = &mut self.app.session_form;
        form.game_index = if forward {
            (form.game_index + 1) % count
        } else {
            (form.game_index + count - 1) % count
        };
    }

    pub fn toggle_player(&mut self) {
        let player = self
            .app
            .tracker
            .catalog()
            .players()
            .get(self.app.session_form.player_cursor)
            .map(|p| p.id);
        if let Some(player) = player {
            self.app.session_form.toggle_player(player);
        }
    }

    pub fn submit(&mut self) {
        match self.app.screen {
            Screen::GameForm => self.submit_game(),
            Screen::PlayerForm => self.submit_player(),
            Screen::SessionForm => self.submit_session(),
            _ => {}
        }
    }

    fn submit_game(&mut self) {
        let draft = match self.app.game_form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.app.report_error(&e);
                return;
            }
        };

        let command = match self.app.game_form.editing {
            Some(id) => Command::EditGame {
                game: Some(id),
                draft,
            },
            None => Command::AddGame(draft),
        };

        match self.app.tracker.apply(command) {
            Ok(Outcome::GameAdded(_)) => {
                let name = self.app.game_form.fields[0].trim().to_string();
                self.app.notify("Game added", name);
                self.close();
            }
            Ok(Outcome::GameUpdated(_)) => {
                let name = self.app.game_form.fields[0].trim().to_string();
                self.app.notify("Game updated", name);
                self.close();
            }
            Ok(_) => self.close(),
            Err(e) => self.app.report_error(&e),
        }
    }

    fn submit_player(&mut self) {
        let name = self.app.player_name.trim().to_string();
        match self.app.tracker.apply(Command::AddPlayer { name: name.clone() }) {
            Ok(_) => {
                self.app.notify("Player added", name);
                self.close();
            }
            Err(e) => self.app.report_error(&e),
        }
    }

    fn submit_session(&mut self) {
        let form = &self.app.session_form;
        let game = self
            .app
            .tracker
            .catalog()
            .games()
            .get(form.game_index)
            .map(|g| g.id);
        let command = Command::RecordSession {
            game,
            players: form.selected.clone(),
            scores: form.scores.clone(),
        };

        match self.app.tracker.apply(command) {
            Ok(Outcome::SessionRecorded { index }) => {
                self.app
                    .notify("Session recorded", format!("session #{} saved", index));
                self.close();
            }
            Ok(_) => self.close(),
            // Form stays open so the user can fix the input and retry.
            Err(e) => self.app.report_error(&e),
        }
    }

    fn close(&mut self) {
        self.app.screen = Screen::Catalog;
        CatalogHandler::new(self.app).clamp_cursors();
    }
}
