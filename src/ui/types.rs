use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES + 1))),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.buffer();
        buf.push_back(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer().iter().cloned().collect()
    }

    // A panic mid-push cannot leave the deque inconsistent, so poisoning is ignored.
    fn buffer(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Which screen has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    GameForm,
    PlayerForm,
    SessionForm,
    History,
}

/// Focused list on the catalog screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Games,
    Players,
}

/// Display mode for the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryViewMode {
    Sessions, // Paginated session list
    Stats,    // Per-player averages
    Chart,    // Score over global session index
}

/// Message shown in the status line until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}
