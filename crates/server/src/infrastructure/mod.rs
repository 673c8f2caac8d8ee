//! Infrastructure - adapters for storage, search, and time.

pub mod clock;
pub mod elastic;
pub mod ports;
pub mod postgres;
