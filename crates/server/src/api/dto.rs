//! Request DTOs and their conversion into domain entities.
//!
//! Conversion is where input validation happens: the domain constructors
//! reject malformed fields before any use case runs.

use chrono::{DateTime, Utc};
use gamevault_domain::{DomainError, Game, Promotion};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Body for `POST /api/games`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub price: Decimal,
}

impl CreateGameRequest {
    pub fn into_game(self) -> Result<Game, DomainError> {
        let genre = self.genre.parse()?;
        Game::new(self.title, self.description, genre, self.price)
    }
}

/// Body for `PUT /api/games/{id}`.
///
/// The caller supplies the full set of fields; identity and promotion
/// attachments carry over from the stored entity.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGameRequest {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub price: Decimal,
}

impl UpdateGameRequest {
    pub fn apply_to(self, existing: Game) -> Result<Game, DomainError> {
        let genre = self.genre.parse()?;
        let mut updated = Game::new(self.title, self.description, genre, self.price)?;
        updated.id = existing.id;
        updated.promotions = existing.promotions;
        Ok(updated)
    }
}

/// Body for `POST /api/promotions`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromotionRequest {
    pub name: String,
    pub discount_percent: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl CreatePromotionRequest {
    pub fn into_promotion(self) -> Result<Promotion, DomainError> {
        Promotion::new(self.name, self.discount_percent, self.starts_at, self.ends_at)
    }
}
