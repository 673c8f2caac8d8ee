//! Game repository implementation for PostgreSQL.

use std::collections::HashMap;

use async_trait::async_trait;
use gamevault_domain::{Game, GameId, Promotion};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::infrastructure::ports::{GameRepo, RepoError};

/// Repository for Game aggregate operations.
pub struct PostgresGameRepo {
    pool: PgPool,
}

impl PostgresGameRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the promotions attached to a single game.
    async fn promotions_for(&self, game_id: Uuid) -> Result<Vec<Promotion>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.discount_percent, p.starts_at, p.ends_at
            FROM promotions p
            JOIN game_promotions gp ON gp.promotion_id = p.id
            WHERE gp.game_id = $1
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("games", e))?;

        rows.into_iter().map(|row| row_to_promotion(&row)).collect()
    }

    /// Fetch promotions for every game at once, keyed by game id.
    async fn promotions_by_game(&self) -> Result<HashMap<Uuid, Vec<Promotion>>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT gp.game_id, p.id, p.name, p.discount_percent, p.starts_at, p.ends_at
            FROM promotions p
            JOIN game_promotions gp ON gp.promotion_id = p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("games", e))?;

        let mut by_game: HashMap<Uuid, Vec<Promotion>> = HashMap::new();
        for row in rows {
            let game_id: Uuid = row
                .try_get("game_id")
                .map_err(|e| RepoError::database("games", e))?;
            by_game.entry(game_id).or_default().push(row_to_promotion(&row)?);
        }
        Ok(by_game)
    }
}

#[async_trait]
impl GameRepo for PostgresGameRepo {
    async fn list_all(&self) -> Result<Vec<Game>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, title, description, genre, price FROM games ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("games", e))?;

        let mut promotions = self.promotions_by_game().await?;

        let mut games = Vec::with_capacity(rows.len());
        for row in rows {
            let mut game = row_to_game(&row)?;
            if let Some(attached) = promotions.remove(game.id.as_uuid()) {
                game.promotions = attached;
            }
            games.push(game);
        }
        Ok(games)
    }

    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError> {
        let row = sqlx::query(
            "SELECT id, title, description, genre, price FROM games WHERE id = $1",
        )
        .bind(id.to_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("games", e))?;

        match row {
            Some(row) => {
                let mut game = row_to_game(&row)?;
                game.promotions = self.promotions_for(id.to_uuid()).await?;
                Ok(Some(game))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, game: &Game) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO games (id, title, description, genre, price)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(game.id.to_uuid())
        .bind(&game.title)
        .bind(&game.description)
        .bind(game.genre.as_str())
        .bind(game.price)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("games", e))?;

        tracing::debug!("Inserted game: {}", game.title);
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            UPDATE games
            SET title = $2, description = $3, genre = $4, price = $5
            WHERE id = $1
            "#,
        )
        .bind(game.id.to_uuid())
        .bind(&game.title)
        .bind(&game.description)
        .bind(game.genre.as_str())
        .bind(game.price)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("games", e))?;

        tracing::debug!("Updated game: {}", game.title);
        Ok(())
    }

    async fn delete(&self, id: GameId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM game_promotions WHERE game_id = $1")
            .bind(id.to_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("games", e))?;

        sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id.to_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("games", e))?;

        tracing::debug!("Deleted game: {}", id);
        Ok(())
    }
}

fn row_to_game(row: &PgRow) -> Result<Game, RepoError> {
    let id: Uuid = row.try_get("id").map_err(|e| RepoError::database("games", e))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| RepoError::database("games", e))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| RepoError::database("games", e))?;
    let genre: String = row
        .try_get("genre")
        .map_err(|e| RepoError::database("games", e))?;
    let price: Decimal = row
        .try_get("price")
        .map_err(|e| RepoError::database("games", e))?;

    Ok(Game {
        id: GameId::from_uuid(id),
        title,
        description,
        genre: genre
            .parse()
            .map_err(|e| RepoError::serialization(format!("games.genre: {}", e)))?,
        price,
        promotions: Vec::new(),
    })
}

pub(super) fn row_to_promotion(row: &PgRow) -> Result<Promotion, RepoError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| RepoError::database("promotions", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| RepoError::database("promotions", e))?;
    let discount_percent: Decimal = row
        .try_get("discount_percent")
        .map_err(|e| RepoError::database("promotions", e))?;
    let starts_at = row
        .try_get("starts_at")
        .map_err(|e| RepoError::database("promotions", e))?;
    let ends_at = row
        .try_get("ends_at")
        .map_err(|e| RepoError::database("promotions", e))?;

    Ok(Promotion {
        id: id.into(),
        name,
        discount_percent,
        starts_at,
        ends_at,
    })
}
