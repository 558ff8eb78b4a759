//! Command-driven owner of the catalog and the session history.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::{
    catalog::Catalog,
    error::{Selection, TrackerError},
    models::{Game, GameDraft, GameId, PlayerId},
    session::{Session, SessionStore, parse_scores},
    stats::{
        PlayerAverage, PlayerSeries, StatsSnapshot, compute_averages, compute_series,
        history_report, statistics_report,
    },
};

/// A user-initiated change to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddGame(GameDraft),
    EditGame {
        game: Option<GameId>,
        draft: GameDraft,
    },
    RemoveGame {
        game: Option<GameId>,
    },
    AddPlayer {
        name: String,
    },
    RecordSession {
        game: Option<GameId>,
        players: Vec<PlayerId>,
        scores: String,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::AddGame(_) => "add_game",
            Command::EditGame { .. } => "edit_game",
            Command::RemoveGame { .. } => "remove_game",
            Command::AddPlayer { .. } => "add_player",
            Command::RecordSession { .. } => "record_session",
        }
    }
}

/// What an applied command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    GameAdded(GameId),
    GameUpdated(GameId),
    GameRemoved(Game),
    PlayerAdded(PlayerId),
    /// `index` is the session's 1-based position in the history.
    SessionRecorded { index: usize },
}

#[derive(Debug, Default)]
pub struct Tracker {
    catalog: Catalog,
    sessions: SessionStore,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sessions(&self) -> &[Session] {
        self.sessions.sessions()
    }

    /// Apply a command. On error nothing has changed.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, TrackerError> {
        self.apply_on(command, Local::now().date_naive())
    }

    /// Like [`Tracker::apply`] with an explicit date for recorded sessions.
    pub fn apply_on(&mut self, command: Command, today: NaiveDate) -> Result<Outcome, TrackerError> {
        let name = command.name();
        let result = self.dispatch(command, today);
        match &result {
            Ok(outcome) => info!(command = name, ?outcome, "command applied"),
            Err(e) => warn!(command = name, error = %e, "command rejected"),
        }
        result
    }

    fn dispatch(&mut self, command: Command, today: NaiveDate) -> Result<Outcome, TrackerError> {
        match command {
            Command::AddGame(draft) => Ok(Outcome::GameAdded(self.catalog.add_game(draft))),

            Command::EditGame { game, draft } => {
                let id = game.ok_or(TrackerError::NoSelection(Selection::Game))?;
                if self.catalog.edit_game(id, draft) {
                    Ok(Outcome::GameUpdated(id))
                } else {
                    Err(TrackerError::UnknownGame(id))
                }
            }

            Command::RemoveGame { game } => {
                let id = game.ok_or(TrackerError::NoSelection(Selection::Game))?;
                self.catalog
                    .remove_game(id)
                    .map(Outcome::GameRemoved)
                    .ok_or(TrackerError::UnknownGame(id))
            }

            Command::AddPlayer { name } => Ok(Outcome::PlayerAdded(self.catalog.add_player(name))),

            Command::RecordSession {
                game,
                players,
                scores,
            } => {
                let session = self.build_session(game, &players, &scores, today)?;
                let index = self.sessions.push(session);
                Ok(Outcome::SessionRecorded { index })
            }
        }
    }

    fn build_session(
        &self,
        game: Option<GameId>,
        players: &[PlayerId],
        scores: &str,
        today: NaiveDate,
    ) -> Result<Session, TrackerError> {
        let id = game.ok_or(TrackerError::NoSelection(Selection::Game))?;
        if players.is_empty() {
            return Err(TrackerError::NoSelection(Selection::Players));
        }

        let game = self.catalog.game(id).ok_or(TrackerError::UnknownGame(id))?;
        if let Some(&missing) = players.iter().find(|&&p| self.catalog.player(p).is_none()) {
            return Err(TrackerError::UnknownPlayer(missing));
        }

        let scores = parse_scores(scores)?;
        Session::new(game.snapshot(), players, &scores, today)
    }

    pub fn filter_games(&self, needle: &str) -> Vec<&Game> {
        self.catalog.filter_games(needle)
    }

    pub fn averages(&self) -> Vec<PlayerAverage> {
        debug!(sessions = self.sessions.len(), "computing averages");
        compute_averages(self.catalog.players(), self.sessions.sessions())
    }

    pub fn series(&self) -> Vec<PlayerSeries> {
        debug!(sessions = self.sessions.len(), "computing series");
        compute_series(self.catalog.players(), self.sessions.sessions())
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            averages: self.averages(),
            series: self.series(),
        }
    }

    pub fn history_report(&self) -> String {
        history_report(self.sessions.sessions(), &self.catalog)
    }

    pub fn statistics_report(&self) -> String {
        statistics_report(&self.averages())
    }

    /// A tracker pre-filled with a small sample collection.
    pub fn demo() -> Result<Self, TrackerError> {
        let mut tracker = Self::new();

        let catan = tracker.add_game("Catan", "strategy", "4", "90", "Trade, build, settle.")?;
        let azul = tracker.add_game("Azul", "abstract", "4", "45", "Tile drafting.")?;
        tracker.add_game("Codenames", "party", "8", "15", "Word association in teams.")?;

        let alice = tracker.add_player("Alice");
        let bob = tracker.add_player("Bob");
        let carol = tracker.add_player("Carol");
        tracker.add_player("Dan");

        let sessions = [
            (catan, vec![alice, bob, carol], "10, 8, 6"),
            (azul, vec![bob, carol], "52, 61"),
            (catan, vec![alice, bob], "7, 10"),
            (azul, vec![alice, carol], "48, 70"),
        ];
        for (game, players, scores) in sessions {
            tracker.apply(Command::RecordSession {
                game: Some(game),
                players,
                scores: scores.to_string(),
            })?;
        }

        Ok(tracker)
    }

    // Seeding helpers that skip the command log.
    fn add_game(
        &mut self,
        name: &str,
        category: &str,
        players: &str,
        duration: &str,
        description: &str,
    ) -> Result<GameId, TrackerError> {
        let draft = GameDraft::parse(name, category, players, duration, description)?;
        let id = self.catalog.add_game(draft);
        debug!(game = %id, name, "seeded game");
        Ok(id)
    }

    fn add_player(&mut self, name: &str) -> PlayerId {
        let id = self.catalog.add_player(name);
        debug!(player = %id, name, "seeded player");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Average, series_for};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn tracker_with_game() -> (Tracker, GameId, PlayerId, PlayerId) {
        let mut tracker = Tracker::new();
        let game = tracker.add_game("Catan", "strategy", "4", "90", "").unwrap();
        let alice = tracker.add_player("Alice");
        let bob = tracker.add_player("Bob");
        (tracker, game, alice, bob)
    }

    fn record(game: Option<GameId>, players: Vec<PlayerId>, scores: &str) -> Command {
        Command::RecordSession {
            game,
            players,
            scores: scores.to_string(),
        }
    }

    #[test]
    fn test_record_session_parses_scores() {
        let (mut tracker, game, alice, bob) = tracker_with_game();
        let carol = tracker.add_player("Carol");

        let outcome = tracker
            .apply_on(record(Some(game), vec![alice, bob, carol], "10, 20,30"), date())
            .unwrap();

        assert_eq!(outcome, Outcome::SessionRecorded { index: 1 });
        let session = &tracker.sessions()[0];
        let scores: Vec<i64> = session.scores().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![10, 20, 30]);
        assert_eq!(session.played_on(), date());
    }

    #[test]
    fn test_parse_error_leaves_store_unchanged() {
        let (mut tracker, game, alice, bob) = tracker_with_game();
        let carol = tracker.add_player("Carol");
        let before = tracker.sessions().len();

        let err = tracker
            .apply_on(record(Some(game), vec![alice, bob, carol], "10,x,30"), date())
            .unwrap_err();

        assert!(matches!(err, TrackerError::Parse { .. }));
        assert_eq!(tracker.sessions().len(), before);
    }

    #[test]
    fn test_mismatched_score_count_is_rejected() {
        let (mut tracker, game, alice, bob) = tracker_with_game();

        let err = tracker
            .apply_on(record(Some(game), vec![alice, bob], "10"), date())
            .unwrap_err();

        assert_eq!(
            err,
            TrackerError::ScoreCountMismatch {
                players: 2,
                scores: 1
            }
        );
        assert!(tracker.sessions().is_empty());
    }

    #[test]
    fn test_missing_selections_are_reported() {
        let (mut tracker, game, alice, _) = tracker_with_game();

        assert_eq!(
            tracker.apply_on(record(None, vec![alice], "1"), date()),
            Err(TrackerError::NoSelection(Selection::Game))
        );
        assert_eq!(
            tracker.apply_on(record(Some(game), vec![], "1"), date()),
            Err(TrackerError::NoSelection(Selection::Players))
        );
        assert_eq!(
            tracker.apply(Command::RemoveGame { game: None }),
            Err(TrackerError::NoSelection(Selection::Game))
        );
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let (mut tracker, game, alice, _) = tracker_with_game();

        assert_eq!(
            tracker.apply_on(record(Some(GameId(42)), vec![alice], "1"), date()),
            Err(TrackerError::UnknownGame(GameId(42)))
        );
        assert_eq!(
            tracker.apply_on(record(Some(game), vec![PlayerId(42)], "1"), date()),
            Err(TrackerError::UnknownPlayer(PlayerId(42)))
        );
    }

    #[test]
    fn test_removed_game_stays_in_history() {
        let (mut tracker, game, alice, _) = tracker_with_game();
        tracker
            .apply_on(record(Some(game), vec![alice], "9"), date())
            .unwrap();

        let outcome = tracker.apply(Command::RemoveGame { game: Some(game) }).unwrap();

        assert!(matches!(outcome, Outcome::GameRemoved(ref g) if g.name == "Catan"));
        assert!(tracker.catalog().games().is_empty());
        assert_eq!(tracker.sessions()[0].game().name, "Catan");
        assert!(tracker.history_report().starts_with("Session: Catan on 2024-01-20"));
    }

    #[test]
    fn test_edit_game_does_not_rewrite_history() {
        let (mut tracker, game, alice, _) = tracker_with_game();
        tracker
            .apply_on(record(Some(game), vec![alice], "9"), date())
            .unwrap();

        let draft = GameDraft::parse("Catan Junior", "family", "4", "30", "").unwrap();
        tracker
            .apply(Command::EditGame {
                game: Some(game),
                draft,
            })
            .unwrap();

        assert_eq!(tracker.catalog().games()[0].name, "Catan Junior");
        assert_eq!(tracker.sessions()[0].game().name, "Catan");
    }

    #[test]
    fn test_views_follow_recorded_sessions() {
        let (mut tracker, game, alice, bob) = tracker_with_game();
        tracker
            .apply_on(record(Some(game), vec![alice, bob], "10,20"), date())
            .unwrap();
        tracker
            .apply_on(record(Some(game), vec![bob], "5"), date())
            .unwrap();

        let snapshot = tracker.snapshot();

        assert_eq!(
            snapshot.averages[1].average,
            Average::Scored {
                total: 25,
                sessions: 2
            }
        );
        assert_eq!(series_for(&snapshot.series, alice).unwrap().points.len(), 1);
        assert_eq!(
            tracker.statistics_report(),
            "Alice - Average score: 10.00 (1 sessions)\nBob - Average score: 12.50 (2 sessions)\n"
        );
    }

    #[test]
    fn test_extreme_scores_report_without_overflow() {
        let (mut tracker, game, alice, _) = tracker_with_game();
        for _ in 0..2 {
            tracker
                .apply_on(record(Some(game), vec![alice], "9223372036854775807"), date())
                .unwrap();
        }

        assert_eq!(
            tracker.statistics_report(),
            "Alice - Average score: 9223372036854775807.00 (2 sessions)\nBob - No scores recorded\n"
        );
    }

    #[test]
    fn test_demo_tracker_is_populated() {
        let tracker = Tracker::demo().unwrap();

        assert_eq!(tracker.catalog().games().len(), 3);
        assert_eq!(tracker.catalog().players().len(), 4);
        assert_eq!(tracker.sessions().len(), 4);
        assert_eq!(tracker.averages()[3].average, Average::NoData);
    }
}
