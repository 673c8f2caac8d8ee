//! Promotion repository implementation for PostgreSQL.

use async_trait::async_trait;
use gamevault_domain::{GameId, Promotion, PromotionId};
use sqlx::PgPool;

use super::game_repo::row_to_promotion;
use crate::infrastructure::ports::{PromotionRepo, RepoError};

/// Repository for Promotion operations and game attachment.
pub struct PostgresPromotionRepo {
    pool: PgPool,
}

impl PostgresPromotionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionRepo for PostgresPromotionRepo {
    async fn insert(&self, promotion: &Promotion) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO promotions (id, name, discount_percent, starts_at, ends_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(promotion.id.to_uuid())
        .bind(&promotion.name)
        .bind(promotion.discount_percent)
        .bind(promotion.starts_at)
        .bind(promotion.ends_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("promotions", e))?;

        tracing::debug!("Inserted promotion: {}", promotion.name);
        Ok(())
    }

    async fn get(&self, id: PromotionId) -> Result<Option<Promotion>, RepoError> {
        let row = sqlx::query(
            "SELECT id, name, discount_percent, starts_at, ends_at FROM promotions WHERE id = $1",
        )
        .bind(id.to_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("promotions", e))?;

        row.map(|row| row_to_promotion(&row)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Promotion>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, name, discount_percent, starts_at, ends_at FROM promotions ORDER BY starts_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("promotions", e))?;

        rows.into_iter().map(|row| row_to_promotion(&row)).collect()
    }

    async fn attach_to_game(
        &self,
        game_id: GameId,
        promotion_id: PromotionId,
    ) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO game_promotions (game_id, promotion_id)
            VALUES ($1, $2)
            ON CONFLICT (game_id, promotion_id) DO NOTHING
            "#,
        )
        .bind(game_id.to_uuid())
        .bind(promotion_id.to_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("promotions", e))?;

        tracing::debug!("Attached promotion {} to game {}", promotion_id, game_id);
        Ok(())
    }
}
