//! Search use cases - indexing and querying the search mirror.

pub mod index;
pub mod query;

pub use index::IndexGame;
pub use query::{MostViewed, SearchGames, SuggestByGenre};

use std::sync::Arc;

/// Container for search use cases.
pub struct SearchUseCases {
    pub index: Arc<IndexGame>,
    pub search: Arc<SearchGames>,
    pub suggest: Arc<SuggestByGenre>,
    pub most_viewed: Arc<MostViewed>,
}

impl SearchUseCases {
    pub fn new(
        index: Arc<IndexGame>,
        search: Arc<SearchGames>,
        suggest: Arc<SuggestByGenre>,
        most_viewed: Arc<MostViewed>,
    ) -> Self {
        Self {
            index,
            search,
            suggest,
            most_viewed,
        }
    }
}
