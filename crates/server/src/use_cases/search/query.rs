//! Search mirror queries.

use std::sync::Arc;

use gamevault_domain::Genre;

use crate::infrastructure::ports::{GameDocument, SearchError, SearchPort};

/// Free-text search over indexed games.
pub struct SearchGames {
    search: Arc<dyn SearchPort>,
}

impl SearchGames {
    pub fn new(search: Arc<dyn SearchPort>) -> Self {
        Self { search }
    }

    pub async fn execute(&self, term: &str) -> Result<Vec<GameDocument>, SearchError> {
        self.search.search(term).await
    }
}

/// Genre-based suggestions.
pub struct SuggestByGenre {
    search: Arc<dyn SearchPort>,
}

impl SuggestByGenre {
    pub fn new(search: Arc<dyn SearchPort>) -> Self {
        Self { search }
    }

    pub async fn execute(&self, genre: Genre) -> Result<Vec<GameDocument>, SearchError> {
        self.search.suggest_by_genre(genre.as_str()).await
    }
}

/// Most-viewed games, by the view counts the search side maintains.
pub struct MostViewed {
    search: Arc<dyn SearchPort>,
}

impl MostViewed {
    pub fn new(search: Arc<dyn SearchPort>) -> Self {
        Self { search }
    }

    pub async fn execute(&self) -> Result<Vec<GameDocument>, SearchError> {
        self.search.most_viewed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockSearchPort;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_document(title: &str) -> GameDocument {
        GameDocument {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            genre: "Action".to_string(),
            price: dec!(10),
            views: 42,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn search_passes_term_through() {
        let mut search = MockSearchPort::new();
        search
            .expect_search()
            .withf(|term| term == "star")
            .returning(|_| Ok(vec![sample_document("Starfall")]));

        let use_case = SearchGames::new(Arc::new(search));
        let documents = use_case.execute("star").await.unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].title, "Starfall");
    }

    #[tokio::test]
    async fn suggestions_query_with_the_genre_display_string() {
        let mut search = MockSearchPort::new();
        search
            .expect_suggest_by_genre()
            .withf(|genre| genre == "RPG")
            .returning(|_| Ok(vec![]));

        let use_case = SuggestByGenre::new(Arc::new(search));
        let documents = use_case.execute(Genre::Rpg).await.unwrap();

        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn most_viewed_with_no_hits_is_empty_not_an_error() {
        let mut search = MockSearchPort::new();
        search.expect_most_viewed().returning(|| Ok(vec![]));

        let use_case = MostViewed::new(Arc::new(search));
        let documents = use_case.execute().await.unwrap();

        assert!(documents.is_empty());
    }
}
