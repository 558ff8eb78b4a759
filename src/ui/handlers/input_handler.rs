//! Keyboard dispatch per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{
    app::App,
    forms::SessionField,
    types::{HistoryViewMode, Screen},
};
use super::{CatalogHandler, FormHandler, HistoryHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handle one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Char('q' | 'Q'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.screen {
            Screen::Catalog => self.handle_catalog_key(key),
            Screen::GameForm | Screen::PlayerForm | Screen::SessionForm => {
                self.handle_form_key(key)
            }
            Screen::History => self.handle_history_key(key),
        }
        false
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        if key.code != KeyCode::Esc {
            self.app.alert = None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                CatalogHandler::new(self.app).open_add_game();
            }

            (KeyCode::Char('e' | 'E'), KeyModifiers::CONTROL) => {
                CatalogHandler::new(self.app).open_edit_game();
            }

            (KeyCode::Char('d' | 'D'), KeyModifiers::CONTROL) => {
                CatalogHandler::new(self.app).delete_selected_game();
            }

            (KeyCode::Char('p' | 'P'), KeyModifiers::CONTROL) => {
                CatalogHandler::new(self.app).open_add_player();
            }

            (KeyCode::Char('s' | 'S'), KeyModifiers::CONTROL) => {
                CatalogHandler::new(self.app).open_record_session();
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                self.app.log("Switching to history mode");
                HistoryHandler::new(self.app).enter_history_mode();
            }

            (KeyCode::Esc, _) => self.app.alert = None,
            (KeyCode::Tab, _) => CatalogHandler::new(self.app).switch_pane(),
            (KeyCode::Up, _) => CatalogHandler::new(self.app).move_up(),
            (KeyCode::Down, _) => CatalogHandler::new(self.app).move_down(),
            (KeyCode::Backspace, _) => CatalogHandler::new(self.app).pop_search(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                CatalogHandler::new(self.app).push_search(c);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let in_player_list = self.app.screen == Screen::SessionForm
            && self.app.session_form.field == SessionField::Players;
        let in_game_choice = self.app.screen == Screen::SessionForm
            && self.app.session_form.field == SessionField::Game;

        let mut form = FormHandler::new(self.app);
        match key.code {
            KeyCode::Esc => form.cancel(),
            KeyCode::Enter => form.submit(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Up if in_player_list => form.move_player_cursor(false),
            KeyCode::Down if in_player_list => form.move_player_cursor(true),
            KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Left if in_game_choice => form.cycle_game(false),
            KeyCode::Right if in_game_choice => form.cycle_game(true),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app.log("Returning to catalog");
                HistoryHandler::new(self.app).exit_history_mode();
            }

            KeyCode::Esc => HistoryHandler::new(self.app).exit_history_mode(),

            KeyCode::Tab => HistoryHandler::new(self.app).cycle_view_mode(),

            KeyCode::PageDown => {
                if self.app.history_view_mode == HistoryViewMode::Sessions {
                    HistoryHandler::new(self.app).next_page();
                }
            }

            KeyCode::PageUp => {
                if self.app.history_view_mode == HistoryViewMode::Sessions {
                    HistoryHandler::new(self.app).prev_page();
                }
            }

            _ => {}
        }
    }
}
