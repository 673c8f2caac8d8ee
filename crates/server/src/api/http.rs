//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use gamevault_domain::{DomainError, Game, GameId, Genre, PricedGame, Promotion, PromotionId};

use crate::api::dto::{CreateGameRequest, CreatePromotionRequest, UpdateGameRequest};
use crate::app::App;
use crate::infrastructure::ports::GameDocument;
use crate::use_cases::CatalogError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/games/discounted", get(list_discounted))
        .route("/api/games/search", get(search_games))
        .route("/api/games/suggestions", get(suggest_games))
        .route("/api/games/most-popular", get(most_popular))
        .route(
            "/api/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route(
            "/api/games/{id}/promotions/{promotion_id}",
            post(attach_promotion),
        )
        .route("/api/promotions", get(list_promotions).post(create_promotion))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Games
// =============================================================================

async fn create_game(
    State(app): State<Arc<App>>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = request.into_game()?;
    let game = app.use_cases.catalog.games.add(game).await?;

    // The game is already stored when indexing runs; an indexing failure
    // surfaces to the caller with the game left unindexed.
    app.use_cases.search.index.execute(&game).await?;

    Ok((StatusCode::CREATED, Json(game)))
}

async fn list_games(State(app): State<Arc<App>>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = app.use_cases.catalog.games.list().await?;
    Ok(Json(games))
}

async fn get_game(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Game>, ApiError> {
    let game = app
        .use_cases
        .catalog
        .games
        .get(GameId::from_uuid(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(game))
}

async fn update_game(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateGameRequest>,
) -> Result<Json<Game>, ApiError> {
    let existing = app
        .use_cases
        .catalog
        .games
        .get(GameId::from_uuid(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    let updated = request.apply_to(existing)?;
    app.use_cases.catalog.games.update(updated.clone()).await?;
    Ok(Json(updated))
}

async fn delete_game(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = app
        .use_cases
        .catalog
        .games
        .remove(GameId::from_uuid(id))
        .await?;

    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct DiscountParams {
    /// Reference time for promotion windows; defaults to now.
    at: Option<DateTime<Utc>>,
}

async fn list_discounted(
    State(app): State<Arc<App>>,
    Query(params): Query<DiscountParams>,
) -> Result<Json<Vec<PricedGame>>, ApiError> {
    let priced = app.use_cases.catalog.discounts.execute(params.at).await?;
    Ok(Json(priced))
}

// =============================================================================
// Search
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchParams {
    term: String,
}

async fn search_games(
    State(app): State<Arc<App>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<GameDocument>>, ApiError> {
    let documents = app.use_cases.search.search.execute(&params.term).await?;
    Ok(Json(documents))
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    genre: String,
}

async fn suggest_games(
    State(app): State<Arc<App>>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Vec<GameDocument>>, ApiError> {
    let genre: Genre = params
        .genre
        .parse()
        .map_err(|e: DomainError| ApiError::BadRequest(e.to_string()))?;

    let documents = app.use_cases.search.suggest.execute(genre).await?;
    Ok(Json(documents))
}

async fn most_popular(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<GameDocument>>, ApiError> {
    let documents = app.use_cases.search.most_viewed.execute().await?;
    Ok(Json(documents))
}

// =============================================================================
// Promotions
// =============================================================================

async fn create_promotion(
    State(app): State<Arc<App>>,
    Json(request): Json<CreatePromotionRequest>,
) -> Result<(StatusCode, Json<Promotion>), ApiError> {
    let promotion = request.into_promotion()?;
    let promotion = app.use_cases.catalog.promotions.create(promotion).await?;
    Ok((StatusCode::CREATED, Json(promotion)))
}

async fn list_promotions(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<Promotion>>, ApiError> {
    let promotions = app.use_cases.catalog.promotions.list().await?;
    Ok(Json(promotions))
}

async fn attach_promotion(
    State(app): State<Arc<App>>,
    Path((id, promotion_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .catalog
        .promotions
        .attach(GameId::from_uuid(id), PromotionId::from_uuid(promotion_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound { .. } => ApiError::NotFound,
            CatalogError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<crate::infrastructure::ports::SearchError> for ApiError {
    fn from(e: crate::infrastructure::ports::SearchError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
