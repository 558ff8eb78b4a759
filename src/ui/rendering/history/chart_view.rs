//! Line chart of each player's scores against global session index.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::{stats::PlayerSeries, ui::App};

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

/// Axis bounds as `([x_min, x_max], [y_min, y_max])`, padded so single
/// points and flat lines stay visible.
pub(super) fn chart_bounds(series: &[PlayerSeries]) -> ([f64; 2], [f64; 2]) {
    let points = || series.iter().flat_map(|s| s.points.iter());

    let x_max = points().map(|p| p.session).max().unwrap_or(1).max(2) as f64;
    let y_min = points().map(|p| p.score).min().unwrap_or(0) as f64;
    let y_max = points().map(|p| p.score).max().unwrap_or(0) as f64;
    let pad = ((y_max - y_min) * 0.1).max(1.0);

    ([1.0, x_max], [y_min - pad, y_max + pad])
}

impl App {
    pub(in crate::ui) fn draw_chart_view(&self, f: &mut Frame, area: Rect) {
        let series: Vec<PlayerSeries> = self
            .tracker
            .series()
            .into_iter()
            .filter(|s| !s.points.is_empty())
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Player Performance | Tab: Sessions | Esc: Back");

        if series.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No scores to plot",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            f.render_widget(Paragraph::new(text).block(block), area);
            return;
        }

        let data: Vec<Vec<(f64, f64)>> = series
            .iter()
            .map(|s| {
                s.points
                    .iter()
                    .map(|p| (p.session as f64, p.score as f64))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = series
            .iter()
            .zip(&data)
            .enumerate()
            .map(|(i, (s, points))| {
                Dataset::default()
                    .name(s.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                    .data(points)
            })
            .collect();

        let ([x_min, x_max], [y_min, y_max]) = chart_bounds(&series);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Session")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x_min, x_max])
                    .labels(vec![
                        format!("{}", x_min),
                        format!("{}", ((x_min + x_max) / 2.0).round()),
                        format!("{}", x_max),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("Score")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(vec![
                        format!("{:.0}", y_min),
                        format!("{:.0}", (y_min + y_max) / 2.0),
                        format!("{:.0}", y_max),
                    ]),
            );

        f.render_widget(chart, area);
    }
}
