//! Parameter grid generation.
//!
//! The sweep uses a deterministic full-factorial grid over the declared axes.
//!
//! Why grid search?
//! - It is deterministic given the same axis definitions.
//! - Every combination is evaluated; nothing is skipped or deduplicated.
//! - The solver is an opaque external program, so there is no gradient to
//!   exploit anyway.

use crate::domain::{Combination, ParamAxis};
use crate::error::AppError;

/// Generate `count` evenly spaced points between `low` and `high`, inclusive
/// of both endpoints. `count == 1` yields exactly `[low]`.
pub fn lin_space(low: f64, high: f64, count: usize) -> Result<Vec<f64>, AppError> {
    if !(low.is_finite() && high.is_finite()) || low > high {
        return Err(AppError::config(format!(
            "Invalid axis range: low={low}, high={high} (must be finite and low <= high)."
        )));
    }
    if count < 1 {
        return Err(AppError::config("Axis count must be >= 1."));
    }
    if count == 1 {
        return Ok(vec![low]);
    }

    let step = (high - low) / (count as f64 - 1.0);

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(low + step * i as f64);
    }
    Ok(out)
}

/// Expand the declared axes into the full Cartesian product.
///
/// Combinations come out in axis declaration order: the first axis is the
/// outermost loop (varies slowest), the last axis the innermost.
pub fn expand(axes: &[ParamAxis]) -> Result<Vec<Combination>, AppError> {
    if axes.is_empty() {
        return Err(AppError::config("At least one parameter axis is required."));
    }

    let mut sampled = Vec::with_capacity(axes.len());
    for axis in axes {
        let values = lin_space(axis.low, axis.high, axis.count)
            .map_err(|e| AppError::config(format!("Axis '{}': {e}", axis.name)))?;
        sampled.push(values);
    }

    let mut combos: Vec<Vec<f64>> = vec![Vec::new()];
    for values in &sampled {
        let mut next = Vec::with_capacity(combos.len() * values.len());
        for prefix in &combos {
            for v in values {
                let mut combo = Vec::with_capacity(axes.len());
                combo.extend_from_slice(prefix);
                combo.push(*v);
                next.push(combo);
            }
        }
        combos = next;
    }

    Ok(combos
        .into_iter()
        .map(|values| Combination { values })
        .collect())
}
