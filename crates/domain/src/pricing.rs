//! Promotional pricing.
//!
//! Pure functions that decide which promotion applies to a game at a
//! reference time and what the resulting price is. Nothing here touches
//! storage; callers evaluate fresh views per request.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::{Game, Promotion};
use crate::ids::PromotionId;

/// Pick the promotion that applies at `at`.
///
/// Active promotions compete on `discount_percent`; the highest wins. Ties on
/// percentage resolve to the lowest promotion id, so the outcome does not
/// depend on the order promotions were loaded in.
pub fn best_promotion(promotions: &[Promotion], at: DateTime<Utc>) -> Option<&Promotion> {
    promotions
        .iter()
        .filter(|p| p.is_active(at))
        .min_by_key(|p| (Reverse(p.discount_percent), p.id))
}

/// Price of a game under a promotion.
///
/// The percentage is the fraction of the base price the buyer pays: a game at
/// 100 with a 30% promotion sells for 30, not 70. Downstream consumers depend
/// on this numeric behavior; see DESIGN.md before changing the formula.
pub fn promotional_price(base: Decimal, promotion: &Promotion) -> Decimal {
    base * (promotion.discount_percent / Decimal::ONE_HUNDRED)
}

/// A game together with its effective price at some reference time.
///
/// The underlying entity keeps its stored base price; the discounted figure
/// lives only in this view and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedGame {
    pub game: Game,
    pub effective_price: Decimal,
    pub applied_promotion: Option<PromotionId>,
}

impl PricedGame {
    /// Evaluate a game's price at `at`.
    ///
    /// Without an active promotion the effective price is the base price.
    pub fn evaluate(game: Game, at: DateTime<Utc>) -> Self {
        match best_promotion(&game.promotions, at) {
            Some(promotion) => {
                let effective_price = promotional_price(game.price, promotion);
                let applied_promotion = Some(promotion.id);
                Self {
                    game,
                    effective_price,
                    applied_promotion,
                }
            }
            None => Self {
                effective_price: game.price,
                applied_promotion: None,
                game,
            },
        }
    }
}
