//! Game entity - the catalog aggregate root.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::Promotion;
use crate::error::DomainError;
use crate::ids::GameId;
use crate::value_objects::Genre;

/// Maximum length of a game title, in characters.
pub const MAX_TITLE_LEN: usize = 50;
/// Maximum length of a game description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 150;

/// A game in the catalog.
///
/// `price` is the base price; promotional pricing is computed as a view over
/// the entity (see `pricing::PricedGame`) and is never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub price: Decimal,
    /// Promotions that may discount this game. Many-to-many in storage.
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

impl Game {
    /// Create a game, enforcing the catalog's field constraints.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        genre: Genre,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("Game title cannot be empty"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::validation(format!(
                "Game title cannot exceed {} characters",
                MAX_TITLE_LEN
            )));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation("Game description cannot be empty"));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::validation(format!(
                "Game description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        if price <= Decimal::ZERO {
            return Err(DomainError::validation("Game price must be greater than zero"));
        }

        Ok(Self {
            id: GameId::new(),
            title,
            description,
            genre,
            price,
            promotions: Vec::new(),
        })
    }

    pub fn with_promotions(mut self, promotions: Vec<Promotion>) -> Self {
        self.promotions = promotions;
        self
    }

    pub fn attach_promotion(&mut self, promotion: Promotion) {
        self.promotions.push(promotion);
    }
}
