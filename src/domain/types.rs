//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during the sweep
//! - exported to JSON/CSV
//! - reproduced later by re-running the failing invocation by hand

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

/// One tunable solver parameter: an evenly spaced sweep dimension.
///
/// `count == 1` pins the parameter to `low` (a fixed value rather than a
/// swept range).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamAxis {
    pub name: String,
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

impl ParamAxis {
    pub fn new(name: impl Into<String>, low: f64, high: f64, count: usize) -> Self {
        Self {
            name: name.into(),
            low,
            high,
            count,
        }
    }
}

/// One concrete assignment of values to all axes, in axis declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    pub values: Vec<f64>,
}

impl Combination {
    /// Human-readable `name=value` listing, paired with the axis definitions.
    ///
    /// Used for progress lines, the console report, and error messages, so a
    /// failing invocation can be reproduced manually.
    pub fn describe(&self, axes: &[ParamAxis]) -> String {
        self.values
            .iter()
            .zip(axes)
            .map(|(v, axis)| format!("{}={}", axis.name, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The unit of parallel work: one combination evaluated over the entire
/// instance corpus.
///
/// Jobs are independent; the corpus is shared read-only via `Arc`.
#[derive(Debug, Clone)]
pub struct Job {
    pub combination: Combination,
    pub instances: Arc<Vec<PathBuf>>,
}

/// Totals for one completed job, accumulated over every instance.
///
/// `total_time` is the summed wall-clock duration of the solver invocations
/// inside this job. Jobs run in parallel, so this is a per-job serial cost,
/// not an end-to-end measurement of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobResult {
    pub combination: Combination,
    pub total_length: i64,
    pub total_time: f64,
}

/// Everything one sweep run needs, resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub exe_path: PathBuf,
    pub input_folder: PathBuf,
    pub output_file: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
    pub axes: Vec<ParamAxis>,
    /// Worker pool size; `None` means use all available hardware threads.
    pub workers: Option<usize>,
    /// Assumed per-invocation solver budget (seconds), used only for the ETA
    /// estimate printed before the sweep starts.
    pub time_limit: f64,
}

/// The axis set the solver was originally tuned with.
///
/// Used when no `--axis` flags are given. Four of the six axes are pinned to
/// a single value; the sweep covers the `noise_ratio` x `noise_iters_ratio`
/// plane.
pub fn default_axes() -> Vec<ParamAxis> {
    vec![
        ParamAxis::new("noise_ratio", 1.5, 2.5, 14),
        ParamAxis::new("noise_period", 1.0, 1.0, 1),
        ParamAxis::new("threeopt_threshold", 10.0, 10.0, 1),
        ParamAxis::new("backtrack_period", 1.0, 1.0, 1),
        ParamAxis::new("double_bridge_period", 10.0, 10.0, 1),
        ParamAxis::new("noise_iters_ratio", 0.8, 1.0, 10),
    ]
}
