mod catalog;
mod forms;
mod history;
mod logs;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Screen content
                Constraint::Length(3), // Alert / help line
                Constraint::Length(6), // Small log panel
            ])
            .split(f.area());

        match self.screen {
            Screen::Catalog => self.draw_catalog(f, layout[0]),
            Screen::GameForm => self.draw_game_form(f, layout[0]),
            Screen::PlayerForm => self.draw_player_form(f, layout[0]),
            Screen::SessionForm => self.draw_session_form(f, layout[0]),
            Screen::History => self.draw_history_mode(f, layout[0]),
        }

        self.draw_status(f, layout[1]);
        self.draw_logs(f, layout[2]);
    }
}
