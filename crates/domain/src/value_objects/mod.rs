//! Value objects - immutable types identified by their value.

pub mod genre;

pub use genre::Genre;
