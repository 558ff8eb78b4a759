//! History mode rendering coordinator.

mod chart_view;
mod sessions_view;
mod stats_view;

use ratatui::{Frame, layout::Rect};

use crate::ui::{App, HistoryViewMode};

impl App {
    pub(in crate::ui) fn draw_history_mode(&self, f: &mut Frame, area: Rect) {
        match self.history_view_mode {
            HistoryViewMode::Sessions => self.draw_sessions_view(f, area),
            HistoryViewMode::Stats => self.draw_stats_view(f, area),
            HistoryViewMode::Chart => self.draw_chart_view(f, area),
        }
    }
}
