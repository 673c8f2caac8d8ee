//! Catalog entities.

pub mod game;
pub mod promotion;

pub use game::Game;
pub use promotion::Promotion;
