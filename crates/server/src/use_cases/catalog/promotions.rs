//! Promotion management and game attachment.

use std::sync::Arc;

use gamevault_domain::{GameId, Promotion, PromotionId};

use crate::infrastructure::ports::{GameRepo, PromotionRepo};

use super::CatalogError;

/// Promotion operations.
///
/// Promotions are created on their own and then attached to games; attachment
/// requires both sides to exist.
pub struct PromotionOps {
    promotions: Arc<dyn PromotionRepo>,
    games: Arc<dyn GameRepo>,
}

impl PromotionOps {
    pub fn new(promotions: Arc<dyn PromotionRepo>, games: Arc<dyn GameRepo>) -> Self {
        Self { promotions, games }
    }

    pub async fn create(&self, promotion: Promotion) -> Result<Promotion, CatalogError> {
        self.promotions.insert(&promotion).await?;
        tracing::info!(promotion_id = %promotion.id, "Created promotion: {}", promotion.name);
        Ok(promotion)
    }

    pub async fn list(&self) -> Result<Vec<Promotion>, CatalogError> {
        Ok(self.promotions.list_all().await?)
    }

    pub async fn attach(
        &self,
        game_id: GameId,
        promotion_id: PromotionId,
    ) -> Result<(), CatalogError> {
        if self.games.get(game_id).await?.is_none() {
            return Err(CatalogError::NotFound {
                entity_type: "Game",
                id: game_id.to_string(),
            });
        }
        if self.promotions.get(promotion_id).await?.is_none() {
            return Err(CatalogError::NotFound {
                entity_type: "Promotion",
                id: promotion_id.to_string(),
            });
        }

        self.promotions.attach_to_game(game_id, promotion_id).await?;
        tracing::info!(game_id = %game_id, promotion_id = %promotion_id, "Attached promotion to game");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockGameRepo, MockPromotionRepo};
    use chrono::{Duration, Utc};
    use gamevault_domain::{Game, Genre};
    use rust_decimal_macros::dec;

    fn sample_promotion() -> Promotion {
        let now = Utc::now();
        Promotion::new("Promo", dec!(25), now - Duration::days(1), now + Duration::days(1))
            .unwrap()
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_promotion() {
        let promotion = sample_promotion();
        let promotion_id = promotion.id;

        let mut promotions = MockPromotionRepo::new();
        promotions
            .expect_insert()
            .withf(move |p| p.id == promotion_id)
            .times(1)
            .returning(|_| Ok(()));
        let games = MockGameRepo::new();

        let ops = PromotionOps::new(Arc::new(promotions), Arc::new(games));
        let stored = ops.create(promotion).await.unwrap();

        assert_eq!(stored.id, promotion_id);
    }

    #[tokio::test]
    async fn attach_fails_when_game_is_missing() {
        let promotions = MockPromotionRepo::new();
        let mut games = MockGameRepo::new();
        games.expect_get().returning(|_| Ok(None));

        let ops = PromotionOps::new(Arc::new(promotions), Arc::new(games));
        let result = ops.attach(GameId::new(), PromotionId::new()).await;

        assert!(matches!(
            result,
            Err(CatalogError::NotFound { entity_type: "Game", .. })
        ));
    }

    #[tokio::test]
    async fn attach_fails_when_promotion_is_missing() {
        let game = Game::new("Game 1", "Desc 1", Genre::Action, dec!(10)).unwrap();

        let mut promotions = MockPromotionRepo::new();
        promotions.expect_get().returning(|_| Ok(None));
        let mut games = MockGameRepo::new();
        games.expect_get().returning(move |_| Ok(Some(game.clone())));

        let ops = PromotionOps::new(Arc::new(promotions), Arc::new(games));
        let result = ops.attach(GameId::new(), PromotionId::new()).await;

        assert!(matches!(
            result,
            Err(CatalogError::NotFound { entity_type: "Promotion", .. })
        ));
    }

    #[tokio::test]
    async fn attach_links_both_sides_when_present() {
        let game = Game::new("Game 1", "Desc 1", Genre::Action, dec!(10)).unwrap();
        let game_id = game.id;
        let promotion = sample_promotion();
        let promotion_id = promotion.id;

        let mut promotions = MockPromotionRepo::new();
        promotions
            .expect_get()
            .returning(move |_| Ok(Some(promotion.clone())));
        promotions
            .expect_attach_to_game()
            .withf(move |g, p| *g == game_id && *p == promotion_id)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut games = MockGameRepo::new();
        games.expect_get().returning(move |_| Ok(Some(game.clone())));

        let ops = PromotionOps::new(Arc::new(promotions), Arc::new(games));
        ops.attach(game_id, promotion_id).await.unwrap();
    }
}
