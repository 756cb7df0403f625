//! `tsp-sweep` library crate.
//!
//! The binary (`tsweep`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning the real solver
//! - the sweep pipeline is reusable from scripts or other front-ends
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod grid;
pub mod io;
pub mod report;
pub mod search;
