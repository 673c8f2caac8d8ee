//! PostgreSQL-backed repositories.

mod game_repo;
mod promotion_repo;

pub use game_repo::PostgresGameRepo;
pub use promotion_repo::PostgresPromotionRepo;

use std::sync::Arc;

use sqlx::PgPool;

use super::ports::RepoError;

/// Container for all Postgres repository implementations.
pub struct PostgresRepositories {
    pub game: Arc<PostgresGameRepo>,
    pub promotion: Arc<PostgresPromotionRepo>,
}

impl PostgresRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            game: Arc::new(PostgresGameRepo::new(pool.clone())),
            promotion: Arc::new(PostgresPromotionRepo::new(pool)),
        }
    }
}

/// Ensure database schema (tables) exists.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            genre TEXT NOT NULL,
            price NUMERIC NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepoError::database("schema", e))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS promotions (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            discount_percent NUMERIC NOT NULL,
            starts_at TIMESTAMPTZ NOT NULL,
            ends_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepoError::database("schema", e))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS game_promotions (
            game_id UUID NOT NULL REFERENCES games(id),
            promotion_id UUID NOT NULL REFERENCES promotions(id),
            PRIMARY KEY (game_id, promotion_id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepoError::database("schema", e))?;

    tracing::debug!("Database schema ensured");
    Ok(())
}
