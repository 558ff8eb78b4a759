//! Paginated session list for history mode.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::ui::{
    App,
    handlers::{SESSIONS_PER_PAGE, total_pages},
};

impl App {
    pub(in crate::ui) fn draw_sessions_view(&self, f: &mut Frame, area: Rect) {
        let sessions = self.tracker.sessions();

        if sessions.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No sessions recorded",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Record one from the catalog with Ctrl+S."),
            ];

            let paragraph = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title("Session History"));

            f.render_widget(paragraph, area);
            return;
        }

        let start_index = self.history_page * SESSIONS_PER_PAGE;
        let end_index = (start_index + SESSIONS_PER_PAGE).min(sessions.len());
        let page = sessions.get(start_index..end_index).unwrap_or(&[]);
        let catalog = self.tracker.catalog();

        let rows: Vec<Row> = page
            .iter()
            .enumerate()
            .map(|(page_idx, session)| {
                let results = session
                    .scores()
                    .iter()
                    .map(|entry| {
                        let name = catalog
                            .player(entry.player)
                            .map(|p| p.name.as_str())
                            .unwrap_or("?");
                        format!("{} {}", name, entry.score)
                    })
                    .collect::<Vec<_>>()
                    .join(", ");

                Row::new(vec![
                    format!("{}.", start_index + page_idx + 1),
                    session.played_on().format("%Y-%m-%d").to_string(),
                    session.game().name.clone(),
                    results,
                ])
            })
            .collect();

        let title = format!(
            "Session History - Page {}/{} (Showing {}-{} of {}) | PgUp/PgDn: Navigate | Tab: Views | Esc: Back",
            self.history_page + 1,
            total_pages(sessions.len()),
            start_index + 1,
            end_index,
            sessions.len()
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),  // Global index
                Constraint::Length(11), // Date
                Constraint::Length(20), // Game
                Constraint::Min(20),    // Scores
            ],
        )
        .header(
            Row::new(vec!["#", "Date", "Game", "Scores"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, area);
    }
}
