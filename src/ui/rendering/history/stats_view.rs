//! Statistics dashboard rendering for history mode.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{stats::PlayerAverage, ui::App};

impl App {
    pub(in crate::ui) fn draw_stats_view(&self, f: &mut Frame, area: Rect) {
        let averages = self.tracker.averages();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Totals
                Constraint::Min(5),    // Per-player averages
                Constraint::Length(
                    (averages.len() as u16).saturating_add(3).min(12), // Participation bars
                ),
            ])
            .split(area);

        self.draw_totals(f, chunks[0]);
        draw_average_table(f, chunks[1], &averages);
        draw_participation(f, chunks[2], &averages);
    }

    fn draw_totals(&self, f: &mut Frame, area: Rect) {
        let catalog = self.tracker.catalog();
        let value = |n: usize| {
            Span::styled(
                n.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Games: "),
                value(catalog.games().len()),
                Span::raw("  |  Players: "),
                value(catalog.players().len()),
                Span::raw("  |  Sessions: "),
                value(self.tracker.sessions().len()),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Statistics | Tab: Chart | Esc: Back | Ctrl+Q: Quit"),
        );

        f.render_widget(paragraph, area);
    }
}

fn draw_average_table(f: &mut Frame, area: Rect, averages: &[PlayerAverage]) {
    let rows: Vec<Row> = averages
        .iter()
        .map(|entry| match entry.average.formatted() {
            Some(mean) => Row::new(vec![
                entry.name.clone(),
                mean,
                entry.average.sessions().to_string(),
            ])
            .style(Style::default().fg(Color::Green)),
            None => Row::new(vec![
                entry.name.clone(),
                "No scores recorded".to_string(),
                "0".to_string(),
            ])
            .style(Style::default().fg(Color::Gray)),
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Player", "Average score", "Sessions"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Player Averages"),
    );

    f.render_widget(table, area);
}

/// Widest player name, in characters, for padding the bar labels.
fn name_column_width(averages: &[PlayerAverage]) -> usize {
    averages
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(0)
}

fn draw_participation(f: &mut Frame, area: Rect, averages: &[PlayerAverage]) {
    let max_count = averages
        .iter()
        .map(|a| a.average.sessions())
        .max()
        .unwrap_or(0);
    let name_width = name_column_width(averages);

    let mut lines = vec![Line::from("")];

    for entry in averages {
        let count = entry.average.sessions();
        let bar_width = if max_count > 0 {
            ((count as f64 / max_count as f64) * 40.0) as usize
        } else {
            0
        };

        lines.push(Line::from(vec![
            Span::raw(format!("  {:<width$} ", entry.name, width = name_width)),
            Span::styled("█".repeat(bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {}", count)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Sessions Played"),
    );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::PlayerId, stats::Average};

    fn entry(name: &str) -> PlayerAverage {
        PlayerAverage {
            player: PlayerId(1),
            name: name.to_string(),
            average: Average::NoData,
        }
    }

    #[test]
    fn test_name_width_counts_characters_not_bytes() {
        assert_eq!(name_column_width(&[entry("Zoë"), entry("Bo")]), 3);
        assert_eq!(name_column_width(&[entry("Zoë"), entry("Bob")]), 3);
    }

    #[test]
    fn test_name_width_of_no_players_is_zero() {
        assert_eq!(name_column_width(&[]), 0);
    }
}
