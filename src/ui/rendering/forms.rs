//! Dialog rendering for the game, player and session forms.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::ui::{
    app::App,
    forms::{GAME_FIELD_LABELS, SessionField},
    types::InputStatus,
};

fn field_block(title: String, active: bool) -> Block<'static> {
    let color = if active { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

impl App {
    pub(in crate::ui) fn draw_game_form(&self, f: &mut Frame, area: Rect) {
        let form = &self.game_form;
        let title = match form.editing.and_then(|id| self.tracker.catalog().game(id)) {
            Some(game) => format!("Edit game: {}", game.name),
            None => "Add a game".to_string(),
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} | Tab/↑↓ = field | Enter = save | Esc = cancel", title));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(inner);

        for (i, (label, value)) in GAME_FIELD_LABELS.iter().zip(&form.fields).enumerate() {
            let active = i == form.active;
            let text = if active {
                format!("{}▌", value)
            } else {
                value.clone()
            };
            f.render_widget(
                Paragraph::new(text).block(field_block(label.to_string(), active)),
                rows[i],
            );
        }
    }

    pub(in crate::ui) fn draw_player_form(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        f.render_widget(
            Paragraph::new(format!("{}▌", self.player_name)).block(field_block(
                "Add a player | Name | Enter = save | Esc = cancel".to_string(),
                true,
            )),
            rows[0],
        );
    }

    pub(in crate::ui) fn draw_session_form(&self, f: &mut Frame, area: Rect) {
        let form = &self.session_form;
        let catalog = self.tracker.catalog();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let game_text = match catalog.games().get(form.game_index) {
            Some(game) => format!("◀ {} ▶", game),
            None => "No games in the catalog".to_string(),
        };
        f.render_widget(
            Paragraph::new(game_text).block(field_block(
                "Game | ←/→ = choose | Tab = next field | Enter = save | Esc = cancel"
                    .to_string(),
                form.field == SessionField::Game,
            )),
            rows[0],
        );

        let players_active = form.field == SessionField::Players;
        let items: Vec<ListItem> = catalog
            .players()
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let mark = match form.pick_order(player.id) {
                    Some(n) => format!("[{}]", n),
                    None => "[ ]".to_string(),
                };
                let style = if players_active && i == form.player_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if form.pick_order(player.id).is_some() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", mark)),
                    Span::raw(player.name.clone()),
                ]))
                .style(style)
            })
            .collect();
        f.render_widget(
            List::new(items).block(field_block(
                format!(
                    "Players ({} selected) | ↑/↓ = move | Space = toggle",
                    form.selected.len()
                ),
                players_active,
            )),
            rows[1],
        );

        let (border_color, subtitle) = match form.score_status() {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };
        let scores_active = form.field == SessionField::Scores;
        let text = if scores_active {
            format!("{}▌", form.scores)
        } else {
            form.scores.clone()
        };
        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if scores_active {
                        border_color
                    } else {
                        Color::Gray
                    }))
                    .title(format!(
                        "Scores, comma separated, in pick order {}",
                        subtitle
                    )),
            ),
            rows[2],
        );
    }
}
