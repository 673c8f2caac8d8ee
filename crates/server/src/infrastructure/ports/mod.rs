//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the server. Everything else is concrete
//! types. Ports exist for:
//! - Database access (could swap Postgres -> another store)
//! - The search mirror (could swap Elasticsearch -> another engine)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

pub use error::{RepoError, SearchError};
pub use external::{GameDocument, SearchPort};
pub use repos::{GameRepo, PromotionRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockSearchPort;
#[cfg(test)]
pub use repos::{MockGameRepo, MockPromotionRepo};
#[cfg(test)]
pub use testing::MockClockPort;
