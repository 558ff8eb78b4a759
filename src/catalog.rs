//! Registry of known games and players.

use crate::models::{Game, GameDraft, GameId, Player, PlayerId};

#[derive(Debug, Default)]
pub struct Catalog {
    games: Vec<Game>,
    players: Vec<Player>,
    next_game_id: u32,
    next_player_id: u32,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn add_game(&mut self, draft: GameDraft) -> GameId {
        self.next_game_id += 1;
        let id = GameId(self.next_game_id);
        self.games.push(Game::from_draft(id, draft));
        id
    }

    /// Replace a game's fields in place. Returns false if the id is unknown.
    pub fn edit_game(&mut self, id: GameId, draft: GameDraft) -> bool {
        match self.games.iter_mut().find(|g| g.id == id) {
            Some(game) => {
                game.apply_draft(draft);
                true
            }
            None => false,
        }
    }

    pub fn remove_game(&mut self, id: GameId) -> Option<Game> {
        let index = self.games.iter().position(|g| g.id == id)?;
        Some(self.games.remove(index))
    }

    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        self.next_player_id += 1;
        let id = PlayerId(self.next_player_id);
        self.players.push(Player {
            id,
            name: name.into(),
        });
        id
    }

    /// Games whose name contains `needle`, ignoring case, in catalog order.
    pub fn filter_games(&self, needle: &str) -> Vec<&Game> {
        let needle = needle.to_lowercase();
        self.games
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> GameDraft {
        GameDraft::parse(name, "board", "4", "60", "").unwrap()
    }

    #[test]
    fn test_filter_games_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add_game(draft("Catan"));
        catalog.add_game(draft("Chess"));

        let found: Vec<&str> = catalog
            .filter_games("cat")
            .iter()
            .map(|g| g.name.as_str())
            .collect();

        assert_eq!(found, vec!["Catan"]);
    }

    #[test]
    fn test_filter_games_empty_needle_returns_all_in_order() {
        let mut catalog = Catalog::new();
        catalog.add_game(draft("Root"));
        catalog.add_game(draft("Azul"));

        let found: Vec<&str> = catalog
            .filter_games("")
            .iter()
            .map(|g| g.name.as_str())
            .collect();

        assert_eq!(found, vec!["Root", "Azul"]);
    }

    #[test]
    fn test_ids_are_stable_after_removal() {
        let mut catalog = Catalog::new();
        let first = catalog.add_game(draft("Catan"));
        catalog.remove_game(first);
        let second = catalog.add_game(draft("Chess"));

        assert_ne!(first, second);
        assert!(catalog.game(first).is_none());
        assert_eq!(catalog.game(second).map(|g| g.name.as_str()), Some("Chess"));
    }

    #[test]
    fn test_edit_game_in_place() {
        let mut catalog = Catalog::new();
        let id = catalog.add_game(draft("Catan"));

        assert!(catalog.edit_game(id, draft("Catan: Seafarers")));
        assert_eq!(catalog.games()[0].name, "Catan: Seafarers");
        assert!(!catalog.edit_game(GameId(99), draft("Nope")));
    }

    #[test]
    fn test_players_with_same_name_are_distinct() {
        let mut catalog = Catalog::new();
        let a = catalog.add_player("Sam");
        let b = catalog.add_player("Sam");

        assert_ne!(a, b);
        assert_eq!(catalog.players().len(), 2);
    }
}
