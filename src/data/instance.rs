//! Synthetic Euclidean TSP instance generation.
//!
//! The format matches what the solver expects on stdin: the point count on
//! the first line, then one `x y` pair per line. Coordinates are uniform over
//! `[min, max]`, rounded to two decimals.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::AppError;

/// Generate one instance with `count` points, deterministically for a given
/// seed.
pub fn generate_instance(count: usize, min: f64, max: f64, seed: u64) -> Result<String, AppError> {
    if count == 0 {
        return Err(AppError::config("Point count must be > 0."));
    }
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Err(AppError::config(format!(
            "Invalid coordinate range: min={min}, max={max} (must be finite and min <= max)."
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = String::with_capacity(count * 16 + 8);
    out.push_str(&format!("{count}\n"));
    for _ in 0..count {
        let x = rng.gen_range(min..=max);
        let y = rng.gen_range(min..=max);
        out.push_str(&format!("{x:.2} {y:.2}\n"));
    }
    Ok(out)
}
