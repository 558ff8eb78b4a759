use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (title, text, color) = match &self.alert {
            Some(alert) => (
                alert.title.clone(),
                alert.message.clone(),
                if alert.is_error {
                    Color::Red
                } else {
                    Color::Green
                },
            ),
            None => ("Keys".to_string(), self.help_text().to_string(), Color::White),
        };

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }

    fn help_text(&self) -> &'static str {
        match self.screen {
            Screen::Catalog => {
                "Ctrl+N add game | Ctrl+E edit | Ctrl+D delete | Ctrl+P add player | Ctrl+S record session | Ctrl+R history | Tab pane | Ctrl+Q quit"
            }
            Screen::GameForm | Screen::PlayerForm | Screen::SessionForm => {
                "Enter = save | Esc = cancel | Ctrl+Q = quit"
            }
            Screen::History => "Tab = next view | PgUp/PgDn = page | Esc/Ctrl+R = back | Ctrl+Q = quit",
        }
    }
}
