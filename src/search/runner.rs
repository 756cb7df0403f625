//! Per-job execution of the external solver.
//!
//! The solver is an opaque black box with a narrow command-line contract:
//!
//! ```text
//! <exe> <param_1> <param_2> ... <param_k>   # instance content on stdin
//! ```
//!
//! It must print a single integer (the tour length) to stdout and exit.
//! Anything else fails the job, and a failed job fails the whole run:
//! silently dropping a combination would corrupt the full-factorial result
//! set the ranking and tie statistics rely on.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::domain::{Job, JobResult, ParamAxis};
use crate::error::AppError;

/// Run one job: invoke the solver once per instance, sequentially, and
/// accumulate tour length and wall-clock time across the whole corpus.
///
/// Emits exactly one `JobResult` on success. There is no partial credit: the
/// first failing instance aborts the job with no result.
pub fn run_job(exe: &Path, job: &Job, axes: &[ParamAxis]) -> Result<JobResult, AppError> {
    let mut total_length: i64 = 0;
    let mut total_time = 0.0_f64;

    for instance in job.instances.iter() {
        let (length, elapsed) = run_instance(exe, job, axes, instance)?;
        total_length += length;
        total_time += elapsed;
    }

    Ok(JobResult {
        combination: job.combination.clone(),
        total_length,
        total_time,
    })
}

/// One solver invocation: feed the instance on stdin, parse stdout as an
/// integer tour length, and measure the wall-clock duration.
fn run_instance(
    exe: &Path,
    job: &Job,
    axes: &[ParamAxis],
    instance: &Path,
) -> Result<(i64, f64), AppError> {
    let input = std::fs::read(instance).map_err(|e| {
        AppError::process(format!(
            "Failed to read instance '{}': {e}",
            instance.display()
        ))
    })?;

    let tick = Instant::now();

    let mut child = Command::new(exe)
        .args(job.combination.values.iter().map(|v| v.to_string()))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            AppError::process(format!(
                "Failed to start solver '{}' ({}): {e}",
                exe.display(),
                job.combination.describe(axes)
            ))
        })?;

    // Dropping the handle closes the pipe so the child sees EOF.
    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::process("Solver stdin pipe was not captured."))?;
        stdin.write_all(&input).map_err(|e| {
            AppError::process(format!(
                "Failed to feed instance '{}' to solver: {e}",
                instance.display()
            ))
        })?;
    }

    let output = child.wait_with_output().map_err(|e| {
        AppError::process(format!("Failed to wait for solver '{}': {e}", exe.display()))
    })?;

    let elapsed = tick.elapsed().as_secs_f64();

    if !output.status.success() {
        return Err(AppError::process(format!(
            "Solver '{}' failed ({}) with {} on instance '{}'.",
            exe.display(),
            job.combination.describe(axes),
            output.status,
            instance.display()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let length: i64 = stdout.trim().parse().map_err(|_| {
        AppError::process(format!(
            "Solver '{}' printed {:?} instead of an integer tour length ({}) on instance '{}'.",
            exe.display(),
            stdout.trim(),
            job.combination.describe(axes),
            instance.display()
        ))
    })?;

    Ok((length, elapsed))
}
