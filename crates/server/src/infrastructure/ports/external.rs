//! Search mirror port and document projection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gamevault_domain::Game;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SearchError;

/// The document shape mirrored into the search index.
///
/// `views` starts at zero when a game is indexed and is maintained by the
/// search side from then on; `created_at` is stamped at indexing time rather
/// than carried on the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDocument {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub price: Decimal,
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

impl GameDocument {
    /// Project a game into its index document.
    pub fn project(game: &Game, created_at: DateTime<Utc>) -> Self {
        Self {
            id: game.id.to_uuid(),
            title: game.title.clone(),
            description: game.description.clone(),
            genre: game.genre.to_string(),
            price: game.price,
            views: 0,
            created_at,
        }
    }
}

/// The search mirror consumed by the catalog.
///
/// Queries return ranked documents; zero hits is an empty vec, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchPort: Send + Sync {
    /// Index (or reindex) a game document under its id.
    async fn index_game(&self, document: &GameDocument) -> Result<(), SearchError>;

    /// Free-text search over title (boosted) and description, fuzzy-matched.
    async fn search(&self, term: &str) -> Result<Vec<GameDocument>, SearchError>;

    /// Exact-genre suggestions, capped at a small fixed size.
    async fn suggest_by_genre(&self, genre: &str) -> Result<Vec<GameDocument>, SearchError>;

    /// Top documents by view count, descending.
    async fn most_viewed(&self) -> Result<Vec<GameDocument>, SearchError>;
}
