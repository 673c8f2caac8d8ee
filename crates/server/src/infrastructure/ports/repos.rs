//! Repository port traits for database access.

use async_trait::async_trait;
use gamevault_domain::{Game, GameId, Promotion, PromotionId};

use super::error::RepoError;

/// Storage for Game aggregates.
///
/// Reads hydrate the game's promotion set through the join table. The store
/// decides list ordering; an empty catalog is an empty vec, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Game>, RepoError>;
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError>;
    async fn insert(&self, game: &Game) -> Result<(), RepoError>;
    async fn update(&self, game: &Game) -> Result<(), RepoError>;
    async fn delete(&self, id: GameId) -> Result<(), RepoError>;
}

/// Storage for Promotions and their attachment to games.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromotionRepo: Send + Sync {
    async fn insert(&self, promotion: &Promotion) -> Result<(), RepoError>;
    async fn get(&self, id: PromotionId) -> Result<Option<Promotion>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Promotion>, RepoError>;
    async fn attach_to_game(
        &self,
        game_id: GameId,
        promotion_id: PromotionId,
    ) -> Result<(), RepoError>;
}
