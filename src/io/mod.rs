//! Result exports.
//!
//! - ranked results as CSV (`export`)
//! - the full ranked report as JSON (`export`)

pub mod export;

pub use export::*;
