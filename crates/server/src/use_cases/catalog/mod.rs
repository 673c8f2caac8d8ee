//! Catalog use cases - the single entry point any transport consumes.

pub mod discounts;
pub mod games;
pub mod promotions;

pub use discounts::ListDiscounted;
pub use games::GameCrud;
pub use promotions::PromotionOps;

use crate::infrastructure::ports::RepoError;

/// Shared error type for catalog use cases.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub games: GameCrud,
    pub discounts: ListDiscounted,
    pub promotions: PromotionOps,
}

impl CatalogUseCases {
    pub fn new(games: GameCrud, discounts: ListDiscounted, promotions: PromotionOps) -> Self {
        Self {
            games,
            discounts,
            promotions,
        }
    }
}
