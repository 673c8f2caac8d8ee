//! Game indexing into the search mirror.

use std::sync::Arc;

use gamevault_domain::Game;

use crate::infrastructure::ports::{ClockPort, GameDocument, SearchError, SearchPort};

/// Projects a game into its search document and indexes it.
///
/// Indexing is a side-channel of game creation: it is not transactionally
/// linked to the repository insert, so a failure here can leave a stored game
/// unindexed. The failure propagates to the caller instead of being masked.
pub struct IndexGame {
    search: Arc<dyn SearchPort>,
    clock: Arc<dyn ClockPort>,
}

impl IndexGame {
    pub fn new(search: Arc<dyn SearchPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { search, clock }
    }

    pub async fn execute(&self, game: &Game) -> Result<(), SearchError> {
        let document = GameDocument::project(game, self.clock.now());
        self.search.index_game(&document).await?;
        tracing::debug!(game_id = %game.id, "Indexed game: {}", game.title);
        Ok(())
    }
}
