//! Use cases - catalog orchestration.
//!
//! Each module contains use cases for a specific area. Use cases orchestrate
//! ports; transports stay thin.

pub mod catalog;
pub mod search;

pub use catalog::{CatalogError, CatalogUseCases};
pub use search::SearchUseCases;
