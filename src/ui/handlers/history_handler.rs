//! History mode state management.

use super::super::{
    app::App,
    types::{HistoryViewMode, Screen},
};

pub const SESSIONS_PER_PAGE: usize = 10;

/// Helper struct for managing history mode state and operations.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Enter history mode on the session list.
    pub fn enter_history_mode(&mut self) {
        self.app.screen = Screen::History;
        self.app.history_view_mode = HistoryViewMode::Sessions;
        self.app.history_page = 0;
        self.app.log(format!(
            "Showing {} session(s) of history",
            self.app.tracker.sessions().len()
        ));
    }

    pub fn exit_history_mode(&mut self) {
        self.app.screen = Screen::Catalog;
    }

    /// Switch to the next view mode (Sessions -> Stats -> Chart -> Sessions).
    pub fn cycle_view_mode(&mut self) {
        self.app.history_view_mode = match self.app.history_view_mode {
            HistoryViewMode::Sessions => HistoryViewMode::Stats,
            HistoryViewMode::Stats => HistoryViewMode::Chart,
            HistoryViewMode::Chart => HistoryViewMode::Sessions,
        };
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.app.tracker.sessions().len())
    }

    pub fn next_page(&mut self) {
        let total_pages = self.total_pages();
        if self.app.history_page + 1 < total_pages {
            self.app.history_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.app.history_page > 0 {
            self.app.history_page -= 1;
        }
    }
}

/// Pages needed for `sessions`; an empty history still has one page.
pub fn total_pages(sessions: usize) -> usize {
    sessions.div_ceil(SESSIONS_PER_PAGE).max(1)
}
