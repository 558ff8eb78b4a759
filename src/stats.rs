//! Derived per-player views over the session history.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    catalog::Catalog,
    models::{Player, PlayerId},
    session::Session,
};

/// A player's average score, or the absence of any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Average {
    NoData,
    Scored { total: i128, sessions: usize },
}

impl Average {
    pub fn mean(&self) -> Option<f64> {
        match *self {
            Average::NoData => None,
            Average::Scored { total, sessions } => Some(total as f64 / sessions as f64),
        }
    }

    pub fn sessions(&self) -> usize {
        match *self {
            Average::NoData => 0,
            Average::Scored { sessions, .. } => sessions,
        }
    }

    /// Mean with exactly two decimals, rounded half away from zero.
    pub fn formatted(&self) -> Option<String> {
        match *self {
            Average::NoData => None,
            Average::Scored { total, sessions } => Some(format_hundredths(total, sessions)),
        }
    }
}

// Integer arithmetic so that e.g. 12.125 renders as 12.13 rather than
// whatever the nearest f64 happens to round to.
fn format_hundredths(total: i128, count: usize) -> String {
    let scaled = total * 100;
    let count = count as i128;
    let mut hundredths = scaled / count;
    let remainder = scaled % count;
    if remainder.abs() * 2 >= count {
        hundredths += scaled.signum();
    }

    let sign = if hundredths < 0 { "-" } else { "" };
    let abs = hundredths.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAverage {
    pub player: PlayerId,
    pub name: String,
    pub average: Average,
}

/// One point on a player's score chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    /// 1-based position of the session in the whole history.
    pub session: usize,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeries {
    pub player: PlayerId,
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// Everything the statistics and chart views need, in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub averages: Vec<PlayerAverage>,
    pub series: Vec<PlayerSeries>,
}

/// Average score per player, in player order.
pub fn compute_averages(players: &[Player], sessions: &[Session]) -> Vec<PlayerAverage> {
    players
        .iter()
        .map(|player| {
            // Widened so that summing many i64 scores cannot overflow.
            let mut total = 0i128;
            let mut count = 0usize;

            for session in sessions {
                if let Some(score) = session.score_for(player.id) {
                    total += i128::from(score);
                    count += 1;
                }
            }

            let average = if count > 0 {
                Average::Scored {
                    total,
                    sessions: count,
                }
            } else {
                Average::NoData
            };

            PlayerAverage {
                player: player.id,
                name: player.name.clone(),
                average,
            }
        })
        .collect()
}

/// Score history per player, indexed by global session position.
pub fn compute_series(players: &[Player], sessions: &[Session]) -> Vec<PlayerSeries> {
    players
        .iter()
        .map(|player| {
            let points = sessions
                .iter()
                .enumerate()
                .filter_map(|(i, session)| {
                    session.score_for(player.id).map(|score| SeriesPoint {
                        session: i + 1,
                        score,
                    })
                })
                .collect();

            PlayerSeries {
                player: player.id,
                name: player.name.clone(),
                points,
            }
        })
        .collect()
}

/// Find one player's series in a computed set.
pub fn series_for(series: &[PlayerSeries], player: PlayerId) -> Option<&PlayerSeries> {
    series.iter().find(|s| s.player == player)
}

/// Render every session as text, oldest first.
pub fn history_report(sessions: &[Session], catalog: &Catalog) -> String {
    let mut out = String::new();
    for session in sessions {
        let _ = writeln!(
            out,
            "Session: {} on {}",
            session.game().name,
            session.played_on()
        );
        for entry in session.scores() {
            let name = catalog
                .player(entry.player)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            let _ = writeln!(out, "{} - Score: {}", name, entry.score);
        }
        out.push('\n');
    }
    out
}

/// One line per player with their average or a no-data note.
pub fn statistics_report(averages: &[PlayerAverage]) -> String {
    let mut out = String::new();
    for entry in averages {
        let _ = match entry.average.formatted() {
            Some(mean) => writeln!(
                out,
                "{} - Average score: {} ({} sessions)",
                entry.name,
                mean,
                entry.average.sessions()
            ),
            None => writeln!(out, "{} - No scores recorded", entry.name),
        };
    }
    out
}
