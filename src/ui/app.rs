use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    error::TrackerError,
    models::{Game, GameId},
    tracker::Tracker,
};

use super::{
    forms::{GameForm, SessionForm},
    types::{Alert, HistoryViewMode, LogBuffer, Pane, Screen},
};

/// Main application state container.
pub struct App {
    pub(in crate::ui) tracker: Tracker,
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) pane: Pane,
    pub(in crate::ui) search: String,
    pub(in crate::ui) game_cursor: usize,
    pub(in crate::ui) player_cursor: usize,
    pub(in crate::ui) game_form: GameForm,
    pub(in crate::ui) player_name: String,
    pub(in crate::ui) session_form: SessionForm,
    pub(in crate::ui) history_view_mode: HistoryViewMode,
    pub(in crate::ui) history_page: usize,
    pub(in crate::ui) alert: Option<Alert>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(tracker: Tracker, logs: LogBuffer) -> Self {
        Self {
            tracker,
            screen: Screen::Catalog,
            pane: Pane::Games,
            search: String::new(),
            game_cursor: 0,
            player_cursor: 0,
            game_form: GameForm::default(),
            player_name: String::new(),
            session_form: SessionForm::default(),
            history_view_mode: HistoryViewMode::Sessions,
            history_page: 0,
            alert: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Games on the catalog screen after applying the search text.
    pub(in crate::ui) fn visible_games(&self) -> Vec<&Game> {
        self.tracker.filter_games(&self.search)
    }

    pub(in crate::ui) fn selected_game(&self) -> Option<GameId> {
        self.visible_games().get(self.game_cursor).map(|g| g.id)
    }

    pub(in crate::ui) fn notify(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let alert = Alert {
            title: title.into(),
            message: message.into(),
            is_error: false,
        };
        self.log(format!("{}: {}", alert.title, alert.message));
        self.alert = Some(alert);
    }

    pub(in crate::ui) fn report_error(&mut self, err: &TrackerError) {
        let alert = Alert {
            title: err.title().to_string(),
            message: err.to_string(),
            is_error: true,
        };
        self.log(format!("{}: {}", alert.title, alert.message));
        self.alert = Some(alert);
    }
}
