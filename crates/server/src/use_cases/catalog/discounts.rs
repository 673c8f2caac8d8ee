//! Discounted catalog listing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gamevault_domain::PricedGame;

use crate::infrastructure::ports::{ClockPort, GameRepo};

use super::CatalogError;

/// Lists the catalog with promotional prices applied at a reference time.
///
/// Read-only from storage's perspective: the discounted figures live in the
/// returned views, never in the game rows.
pub struct ListDiscounted {
    games: Arc<dyn GameRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ListDiscounted {
    pub fn new(games: Arc<dyn GameRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { games, clock }
    }

    /// Evaluate every game's price at `reference_time` (now when unset).
    pub async fn execute(
        &self,
        reference_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<PricedGame>, CatalogError> {
        let at = reference_time.unwrap_or_else(|| self.clock.now());
        let games = self.games.list_all().await?;

        Ok(games
            .into_iter()
            .map(|game| PricedGame::evaluate(game, at))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockClockPort, MockGameRepo};
    use chrono::Duration;
    use gamevault_domain::{Game, Genre, Promotion};
    use rust_decimal_macros::dec;

    fn fixed_clock(at: DateTime<Utc>) -> Arc<MockClockPort> {
        let mut clock = MockClockPort::new();
        clock.expect_now().return_const(at);
        Arc::new(clock)
    }

    #[tokio::test]
    async fn applies_active_promotion() {
        let now = Utc::now();
        let promo =
            Promotion::new("Half", dec!(50), now - Duration::days(1), now + Duration::days(1))
                .unwrap();
        let game = Game::new("Game 1", "Desc 1", Genre::Action, dec!(100))
            .unwrap()
            .with_promotions(vec![promo]);

        let mut repo = MockGameRepo::new();
        repo.expect_list_all()
            .returning(move || Ok(vec![game.clone()]));

        let use_case = ListDiscounted::new(Arc::new(repo), fixed_clock(now));
        let priced = use_case.execute(Some(now)).await.unwrap();

        assert_eq!(priced.len(), 1);
        assert_eq!(priced[0].effective_price, dec!(50));
        assert_eq!(priced[0].game.price, dec!(100));
    }

    #[tokio::test]
    async fn keeps_price_without_promotions() {
        let now = Utc::now();
        let game = Game::new("Game 1", "Desc 1", Genre::Action, dec!(100)).unwrap();

        let mut repo = MockGameRepo::new();
        repo.expect_list_all()
            .returning(move || Ok(vec![game.clone()]));

        let use_case = ListDiscounted::new(Arc::new(repo), fixed_clock(now));
        let priced = use_case.execute(Some(now)).await.unwrap();

        assert_eq!(priced[0].effective_price, dec!(100));
        assert!(priced[0].applied_promotion.is_none());
    }

    #[tokio::test]
    async fn falls_back_to_clock_when_no_reference_time_given() {
        let now = Utc::now();
        let promo =
            Promotion::new("Half", dec!(50), now - Duration::days(1), now + Duration::days(1))
                .unwrap();
        let game = Game::new("Game 1", "Desc 1", Genre::Action, dec!(100))
            .unwrap()
            .with_promotions(vec![promo]);

        let mut repo = MockGameRepo::new();
        repo.expect_list_all()
            .returning(move || Ok(vec![game.clone()]));

        let use_case = ListDiscounted::new(Arc::new(repo), fixed_clock(now));
        let priced = use_case.execute(None).await.unwrap();

        assert_eq!(priced[0].effective_price, dec!(50));
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_listing() {
        let mut repo = MockGameRepo::new();
        repo.expect_list_all().returning(|| Ok(vec![]));

        let use_case = ListDiscounted::new(Arc::new(repo), fixed_clock(Utc::now()));
        let priced = use_case.execute(None).await.unwrap();

        assert!(priced.is_empty());
    }
}
