//! Promotion entity - a time-windowed percentage attached to games.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PromotionId;

/// A promotion that discounts game prices while its window is open.
///
/// Promotions are created independently and attached to any number of games;
/// they do not own the games they discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    /// Percentage in [0, 100]. See `pricing` for how it is applied.
    pub discount_percent: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Promotion {
    /// Create a promotion, enforcing the percentage range and window ordering.
    pub fn new(
        name: impl Into<String>,
        discount_percent: Decimal,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(format!(
                "Discount percentage must be within 0 and 100, got {}",
                discount_percent
            )));
        }
        if starts_at > ends_at {
            return Err(DomainError::validation(
                "Promotion start must not be after its end",
            ));
        }

        Ok(Self {
            id: PromotionId::new(),
            name: name.into(),
            discount_percent,
            starts_at,
            ends_at,
        })
    }

    /// Whether the promotion applies at `at`. Both window bounds are inclusive.
    pub fn is_active(&self, at: DateTime<Utc>) -> bool {
        self.starts_at <= at && at <= self.ends_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn window(days_back: i64, days_ahead: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        (now - Duration::days(days_back), now + Duration::days(days_ahead))
    }

    #[test]
    fn creates_valid_promotion() {
        let (start, end) = window(1, 1);
        let promo = Promotion::new("Summer Sale", dec!(50), start, end).unwrap();
        assert_eq!(promo.name, "Summer Sale");
        assert_eq!(promo.discount_percent, dec!(50));
    }

    #[test]
    fn rejects_percentage_above_hundred() {
        let (start, end) = window(1, 1);
        let result = Promotion::new("Too Generous", dec!(100.01), start, end);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_negative_percentage() {
        let (start, end) = window(1, 1);
        let result = Promotion::new("Negative", dec!(-1), start, end);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn accepts_boundary_percentages() {
        let (start, end) = window(1, 1);
        assert!(Promotion::new("Free-ish", dec!(0), start, end).is_ok());
        assert!(Promotion::new("Everything", dec!(100), start, end).is_ok());
    }

    #[test]
    fn rejects_inverted_window() {
        let now = Utc::now();
        let result = Promotion::new("Backwards", dec!(10), now, now - Duration::hours(1));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn active_within_window() {
        let (start, end) = window(1, 1);
        let promo = Promotion::new("Now", dec!(10), start, end).unwrap();
        assert!(promo.is_active(Utc::now()));
    }

    #[test]
    fn active_exactly_at_bounds() {
        let (start, end) = window(1, 1);
        let promo = Promotion::new("Bounds", dec!(10), start, end).unwrap();
        assert!(promo.is_active(start));
        assert!(promo.is_active(end));
    }

    #[test]
    fn inactive_outside_window() {
        let (start, end) = window(1, 1);
        let promo = Promotion::new("Window", dec!(10), start, end).unwrap();
        assert!(!promo.is_active(start - Duration::seconds(1)));
        assert!(!promo.is_active(end + Duration::seconds(1)));
    }
}
