//! Synthetic test data generation.

pub mod instance;

pub use instance::*;
