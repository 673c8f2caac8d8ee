//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, GameRepo, PromotionRepo, SearchPort},
    postgres::PostgresRepositories,
};
use crate::use_cases::{
    catalog::{GameCrud, ListDiscounted, PromotionOps},
    search::{IndexGame, MostViewed, SearchGames, SuggestByGenre},
    CatalogUseCases, SearchUseCases,
};

/// Main application state.
///
/// Holds the use-case containers. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: CatalogUseCases,
    pub search: SearchUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// The search client is constructed by the caller and injected here.
    pub fn new(repos: PostgresRepositories, search: Arc<dyn SearchPort>) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        let game_repo: Arc<dyn GameRepo> = repos.game.clone();
        let promotion_repo: Arc<dyn PromotionRepo> = repos.promotion.clone();

        let catalog = CatalogUseCases::new(
            GameCrud::new(game_repo.clone()),
            ListDiscounted::new(game_repo.clone(), clock.clone()),
            PromotionOps::new(promotion_repo, game_repo),
        );

        let search = SearchUseCases::new(
            Arc::new(IndexGame::new(search.clone(), clock)),
            Arc::new(SearchGames::new(search.clone())),
            Arc::new(SuggestByGenre::new(search.clone())),
            Arc::new(MostViewed::new(search)),
        );

        Self {
            use_cases: UseCases { catalog, search },
        }
    }
}
