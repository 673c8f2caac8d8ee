//! Game CRUD operations.

use std::sync::Arc;

use gamevault_domain::{Game, GameId};

use crate::infrastructure::ports::GameRepo;

use super::CatalogError;

/// Game catalog operations.
///
/// Entities arrive already validated by their constructors; this layer only
/// orchestrates the repository. Absence is a value (`None` / `false`), never
/// an error; storage failures propagate unchanged.
pub struct GameCrud {
    games: Arc<dyn GameRepo>,
}

impl GameCrud {
    pub fn new(games: Arc<dyn GameRepo>) -> Self {
        Self { games }
    }

    /// Every stored game, in repository-defined order.
    pub async fn list(&self) -> Result<Vec<Game>, CatalogError> {
        Ok(self.games.list_all().await?)
    }

    /// A single game, or `None` when the id is unknown. No side effects.
    pub async fn get(&self, id: GameId) -> Result<Option<Game>, CatalogError> {
        Ok(self.games.get(id).await?)
    }

    /// Persist a new game and hand back the stored entity.
    pub async fn add(&self, game: Game) -> Result<Game, CatalogError> {
        self.games.insert(&game).await?;
        tracing::info!(game_id = %game.id, "Added game: {}", game.title);
        Ok(game)
    }

    /// Persist changes to an existing game. The caller supplies the
    /// fully-formed entity; the repository is authoritative for existence.
    pub async fn update(&self, game: Game) -> Result<(), CatalogError> {
        self.games.update(&game).await?;
        Ok(())
    }

    /// Delete a game by id.
    ///
    /// Returns `false` without touching storage when the id is unknown;
    /// otherwise deletes exactly once and returns `true`.
    pub async fn remove(&self, id: GameId) -> Result<bool, CatalogError> {
        let game = match self.games.get(id).await? {
            Some(game) => game,
            None => return Ok(false),
        };

        self.games.delete(game.id).await?;
        tracing::info!(game_id = %id, "Removed game: {}", game.title);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockGameRepo;
    use gamevault_domain::Genre;
    use rust_decimal_macros::dec;

    fn sample_game(title: &str) -> Game {
        Game::new(title, "A test game", Genre::Action, dec!(100)).unwrap()
    }

    #[tokio::test]
    async fn list_returns_every_stored_game() {
        let games = vec![sample_game("Game 1"), sample_game("Game 2")];

        let mut repo = MockGameRepo::new();
        repo.expect_list_all()
            .times(1)
            .returning(move || Ok(games.clone()));

        let crud = GameCrud::new(Arc::new(repo));
        let result = crud.list().await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn list_on_empty_repository_returns_empty_vec() {
        let mut repo = MockGameRepo::new();
        repo.expect_list_all().returning(|| Ok(vec![]));

        let crud = GameCrud::new(Arc::new(repo));
        let result = crud.list().await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn get_returns_game_when_it_exists() {
        let game = sample_game("Game 1");
        let game_id = game.id;
        let title = game.title.clone();

        let mut repo = MockGameRepo::new();
        repo.expect_get()
            .withf(move |id| *id == game_id)
            .returning(move |_| Ok(Some(game.clone())));

        let crud = GameCrud::new(Arc::new(repo));
        let result = crud.get(game_id).await.unwrap();

        assert_eq!(result.unwrap().title, title);
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let mut repo = MockGameRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let crud = GameCrud::new(Arc::new(repo));
        let result = crud.get(GameId::new()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn add_persists_and_returns_the_entity() {
        let game = sample_game("Game 1");
        let game_id = game.id;

        let mut repo = MockGameRepo::new();
        repo.expect_insert()
            .withf(move |g| g.id == game_id)
            .times(1)
            .returning(|_| Ok(()));

        let crud = GameCrud::new(Arc::new(repo));
        let stored = crud.add(game).await.unwrap();

        assert_eq!(stored.id, game_id);
    }

    #[tokio::test]
    async fn update_delegates_to_repository() {
        let game = sample_game("Game 1");
        let game_id = game.id;

        let mut repo = MockGameRepo::new();
        repo.expect_update()
            .withf(move |g| g.id == game_id)
            .times(1)
            .returning(|_| Ok(()));

        let crud = GameCrud::new(Arc::new(repo));
        crud.update(game).await.unwrap();
    }

    #[tokio::test]
    async fn remove_deletes_once_when_game_exists() {
        let game = sample_game("Game 1");
        let game_id = game.id;

        let mut repo = MockGameRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(game.clone())));
        repo.expect_delete()
            .withf(move |id| *id == game_id)
            .times(1)
            .returning(|_| Ok(()));

        let crud = GameCrud::new(Arc::new(repo));
        let removed = crud.remove(game_id).await.unwrap();

        assert!(removed);
    }

    #[tokio::test]
    async fn remove_returns_false_and_skips_delete_when_absent() {
        let mut repo = MockGameRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_delete().never();

        let crud = GameCrud::new(Arc::new(repo));
        let removed = crud.remove(GameId::new()).await.unwrap();

        assert!(!removed);
    }
}
