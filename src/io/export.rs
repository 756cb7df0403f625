//! Export ranked sweep results to CSV and JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per evaluated combination, best first. The JSON carries
//! the full ranked report (both orderings plus tie statistics) for tooling
//! that wants more than the flat table.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{JobResult, ParamAxis};
use crate::error::AppError;
use crate::report::RankedReport;

/// Write the length-ranked results to a CSV file.
///
/// Columns are the parameter values in axis declaration order, then
/// `total_length` and `total_time`. A `.csv` extension is appended when the
/// path lacks one. Returns the path actually written.
pub fn write_results_csv(
    path: &Path,
    ranked: &[JobResult],
    axes: &[ParamAxis],
) -> Result<PathBuf, AppError> {
    let path = ensure_extension(path, "csv");

    let mut file = File::create(&path).map_err(|e| {
        AppError::export(format!(
            "Failed to create results CSV '{}': {e}",
            path.display()
        ))
    })?;

    let mut header: Vec<String> = axes.iter().map(|a| csv_field(&a.name)).collect();
    header.push("total_length".to_string());
    header.push("total_time".to_string());
    writeln!(file, "{}", header.join(","))
        .map_err(|e| AppError::export(format!("Failed to write CSV header: {e}")))?;

    for result in ranked {
        let mut row: Vec<String> = result.combination.values.iter().map(f64::to_string).collect();
        row.push(result.total_length.to_string());
        row.push(result.total_time.to_string());
        writeln!(file, "{}", row.join(","))
            .map_err(|e| AppError::export(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(path)
}

/// JSON schema for an exported report.
#[derive(Serialize)]
struct ReportFile<'a> {
    tool: &'static str,
    axes: &'a [ParamAxis],
    jobs: usize,
    tie_count_at_best: usize,
    tie_share_percent: Option<f64>,
    best_by_length: &'a JobResult,
    best_by_time: &'a JobResult,
    report: &'a RankedReport,
}

/// Write the full ranked report to a JSON file (`.json` appended if missing).
pub fn write_report_json(
    path: &Path,
    report: &RankedReport,
    axes: &[ParamAxis],
) -> Result<PathBuf, AppError> {
    let path = ensure_extension(path, "json");

    let file = File::create(&path).map_err(|e| {
        AppError::export(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;

    let contents = ReportFile {
        tool: "tsweep",
        axes,
        jobs: report.jobs_count(),
        tie_count_at_best: report.tie_count_at_best,
        tie_share_percent: report.tie_share_percent(),
        best_by_length: report.best_by_length(),
        best_by_time: report.best_by_time(),
        report,
    };

    serde_json::to_writer_pretty(file, &contents)
        .map_err(|e| AppError::export(format!("Failed to write report JSON: {e}")))?;

    Ok(path)
}

fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().and_then(OsStr::to_str) == Some(ext) {
        return path.to_path_buf();
    }
    let mut with_ext = path.as_os_str().to_os_string();
    with_ext.push(".");
    with_ext.push(ext);
    PathBuf::from(with_ext)
}

/// Minimal CSV quoting: only quote fields that contain a delimiter, a quote,
/// or a line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
