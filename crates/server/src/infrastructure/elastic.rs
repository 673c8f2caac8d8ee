//! Elasticsearch search-mirror client (REST API over JSON).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::infrastructure::ports::{GameDocument, SearchError, SearchPort};

/// Default Elasticsearch base URL.
pub const DEFAULT_ELASTICSEARCH_BASE_URL: &str = "http://localhost:9200";

/// Index that holds game documents.
const GAMES_INDEX: &str = "games";

/// Number of documents returned by suggestion and popularity queries.
const SUGGESTION_SIZE: usize = 5;

/// Client for the Elasticsearch REST API.
#[derive(Clone)]
pub struct ElasticClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ElasticClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses `ELASTICSEARCH_URL` and `ELASTICSEARCH_API_KEY`, falling back to
    /// the local default when unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var("ELASTICSEARCH_URL")
            .unwrap_or_else(|_| DEFAULT_ELASTICSEARCH_BASE_URL.to_string());
        let api_key = std::env::var("ELASTICSEARCH_API_KEY").ok();
        Self::new(&base_url, api_key)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("ApiKey {}", key));
        }
        builder
    }

    async fn run_search(&self, body: serde_json::Value) -> Result<SearchResponse, SearchError> {
        let response = self
            .request(reqwest::Method::POST, &format!("/{}/_search", GAMES_INDEX))
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| SearchError::RequestFailed(e.to_string()))?;
            return Err(SearchError::RequestFailed(error_text));
        }

        response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }
}

impl Default for ElasticClient {
    fn default() -> Self {
        Self::new(DEFAULT_ELASTICSEARCH_BASE_URL, None)
    }
}

#[async_trait]
impl SearchPort for ElasticClient {
    async fn index_game(&self, document: &GameDocument) -> Result<(), SearchError> {
        let response = self
            .request(
                reqwest::Method::PUT,
                &format!("/{}/_doc/{}", GAMES_INDEX, document.id),
            )
            .json(document)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| SearchError::RequestFailed(e.to_string()))?;
            return Err(SearchError::RequestFailed(error_text));
        }

        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<GameDocument>, SearchError> {
        let body = json!({
            "query": {
                "multi_match": {
                    "query": term,
                    "fields": ["title^2", "description"],
                    "fuzziness": "AUTO"
                }
            }
        });

        let response = self.run_search(body).await?;
        Ok(response.documents())
    }

    async fn suggest_by_genre(&self, genre: &str) -> Result<Vec<GameDocument>, SearchError> {
        let body = json!({
            "size": SUGGESTION_SIZE,
            "query": {
                "term": {
                    "genre.keyword": { "value": genre }
                }
            }
        });

        let response = self.run_search(body).await?;
        Ok(response.documents())
    }

    async fn most_viewed(&self) -> Result<Vec<GameDocument>, SearchError> {
        let body = json!({
            "size": 0,
            "aggs": {
                "top_games": {
                    "top_hits": {
                        "size": SUGGESTION_SIZE,
                        "sort": [{ "views": { "order": "desc" } }]
                    }
                }
            }
        });

        let response = self.run_search(body).await?;

        // An index with no documents returns no aggregation buckets.
        Ok(response
            .aggregations
            .map(|aggs| aggs.top_games.hits.documents())
            .unwrap_or_default())
    }
}

// =============================================================================
// Elasticsearch API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
    aggregations: Option<Aggregations>,
}

impl SearchResponse {
    fn documents(self) -> Vec<GameDocument> {
        self.hits.documents()
    }
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<Hit>,
}

impl HitsEnvelope {
    fn documents(self) -> Vec<GameDocument> {
        self.hits.into_iter().filter_map(|h| h.source).collect()
    }
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Option<GameDocument>,
}

#[derive(Debug, Deserialize)]
struct Aggregations {
    top_games: TopHitsAggregate,
}

#[derive(Debug, Deserialize)]
struct TopHitsAggregate {
    hits: HitsEnvelope,
}
