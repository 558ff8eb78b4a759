//! Catalog screen: search box, game and player lists, game details.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::ui::{app::App, types::Pane};

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

fn cursor_style(selected: bool, focused: bool) -> Style {
    match (selected, focused) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}

impl App {
    pub(in crate::ui) fn draw_catalog(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        self.draw_search(f, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
            ])
            .split(rows[1]);

        self.draw_game_list(f, columns[0]);
        self.draw_player_list(f, columns[1]);
        self.draw_game_details(f, columns[2]);
    }

    fn draw_search(&self, f: &mut Frame, area: Rect) {
        let text = format!("{}▌", self.search);
        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search games | type to filter | Backspace = erase"),
            ),
            area,
        );
    }

    fn draw_game_list(&self, f: &mut Frame, area: Rect) {
        let focused = self.pane == Pane::Games;
        let games = self.visible_games();

        let items: Vec<ListItem> = games
            .iter()
            .enumerate()
            .map(|(i, game)| {
                ListItem::new(game.to_string()).style(cursor_style(i == self.game_cursor, focused))
            })
            .collect();

        let title = format!(
            "Games ({}/{})",
            games.len(),
            self.tracker.catalog().games().len()
        );
        f.render_widget(List::new(items).block(pane_block(title, focused)), area);
    }

    fn draw_player_list(&self, f: &mut Frame, area: Rect) {
        let focused = self.pane == Pane::Players;
        let players = self.tracker.catalog().players();

        let items: Vec<ListItem> = players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                ListItem::new(player.name.clone())
                    .style(cursor_style(i == self.player_cursor, focused))
            })
            .collect();

        let title = format!("Players ({})", players.len());
        f.render_widget(List::new(items).block(pane_block(title, focused)), area);
    }

    fn draw_game_details(&self, f: &mut Frame, area: Rect) {
        let game = self
            .selected_game()
            .and_then(|id| self.tracker.catalog().game(id));

        let lines = match game {
            Some(game) => vec![
                Line::from(Span::styled(
                    game.name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Category: {}", game.category)),
                Line::from(format!("Players: {}", game.player_count)),
                Line::from(format!("Duration: {} min", game.duration_minutes)),
                Line::from(""),
                Line::from(game.description.clone()),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No game selected",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from("Ctrl+N - Add a game"),
            ],
        };

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Details")),
            area,
        );
    }
}
