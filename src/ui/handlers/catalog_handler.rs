//! Catalog screen state: search, cursors and dialog entry points.

use crate::{
    error::{Selection, TrackerError},
    tracker::{Command, Outcome},
};

use super::super::{
    app::App,
    forms::{GameForm, SessionForm},
    types::{Pane, Screen},
};

/// Helper struct for browsing and editing the catalog.
pub struct CatalogHandler<'a> {
    app: &'a mut App,
}

impl<'a> CatalogHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn push_search(&mut self, c: char) {
        self.app.search.push(c);
        self.clamp_cursors();
    }

    pub fn pop_search(&mut self) {
        self.app.search.pop();
        self.clamp_cursors();
    }

    pub fn switch_pane(&mut self) {
        self.app.pane = match self.app.pane {
            Pane::Games => Pane::Players,
            Pane::Players => Pane::Games,
        };
    }

    pub fn move_up(&mut self) {
        match self.app.pane {
            Pane::Games => self.app.game_cursor = self.app.game_cursor.saturating_sub(1),
            Pane::Players => self.app.player_cursor = self.app.player_cursor.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self) {
        match self.app.pane {
            Pane::Games => {
                if self.app.game_cursor + 1 < self.app.visible_games().len() {
                    self.app.game_cursor += 1;
                }
            }
            Pane::Players => {
                if self.app.player_cursor + 1 < self.app.tracker.catalog().players().len() {
                    self.app.player_cursor += 1;
                }
            }
        }
    }

    /// Keep cursors inside their (possibly shrunken) lists.
    pub fn clamp_cursors(&mut self) {
        let games = self.app.visible_games().len();
        self.app.game_cursor = self.app.game_cursor.min(games.saturating_sub(1));

        let players = self.app.tracker.catalog().players().len();
        self.app.player_cursor = self.app.player_cursor.min(players.saturating_sub(1));
    }

    pub fn open_add_game(&mut self) {
        self.app.game_form = GameForm::default();
        self.app.screen = Screen::GameForm;
    }

    pub fn open_edit_game(&mut self) {
        let form = self
            .app
            .selected_game()
            .and_then(|id| self.app.tracker.catalog().game(id))
            .map(GameForm::for_game);

        match form {
            Some(form) => {
                self.app.game_form = form;
                self.app.screen = Screen::GameForm;
            }
            None => self
                .app
                .report_error(&TrackerError::NoSelection(Selection::Game)),
        }
    }

    pub fn delete_selected_game(&mut self) {
        let game = self.app.selected_game();
        match self.app.tracker.apply(Command::RemoveGame { game }) {
            Ok(Outcome::GameRemoved(removed)) => {
                self.app.notify("Game deleted", removed.to_string());
                self.clamp_cursors();
            }
            Ok(_) => {}
            Err(e) => self.app.report_error(&e),
        }
    }

    pub fn open_add_player(&mut self) {
        self.app.player_name.clear();
        self.app.screen = Screen::PlayerForm;
    }

    pub fn open_record_session(&mut self) {
        let mut form = SessionForm::default();
        // Preselect whatever game is highlighted in the catalog.
        if let Some(id) = self.app.selected_game() {
            form.game_index = self
                .app
                .tracker
                .catalog()
                .games()
                .iter()
                .position(|g| g.id == id)
                .unwrap_or(0);
        }
        self.app.session_form = form;
        self.app.screen = Screen::SessionForm;
    }
}
