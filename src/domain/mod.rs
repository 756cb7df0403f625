//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sweep configuration (`SweepConfig`, `ParamAxis`)
//! - the unit of parallel work (`Job`) and its output (`JobResult`)
//! - one point in the parameter grid (`Combination`)

pub mod types;

pub use types::*;
