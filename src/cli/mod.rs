//! Command-line parsing for the TSP parameter sweeper.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the sweep/ranking code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ParamAxis;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tsweep", version, about = "Parameter sweep for an external TSP solver")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sweep the parameter grid over the instance corpus and report the best
    /// combination.
    Sweep(SweepArgs),
    /// Generate a synthetic instance on stdout.
    Gen(GenArgs),
}

/// Options for a sweep run.
#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    /// Path to the solver executable.
    #[arg(short = 'e', long, default_value = "./TSP")]
    pub exepath: PathBuf,

    /// Folder with the input instances.
    #[arg(short = 'i', long, default_value = "./in")]
    pub inputfolder: PathBuf,

    /// Write ranked results to this CSV file (`.csv` appended if missing).
    #[arg(short = 'o', long)]
    pub outputfile: Option<PathBuf>,

    /// Write the full ranked report to this JSON file.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Parameter axis as NAME=LOW:HIGH:COUNT; repeatable, swept in the order
    /// given. Defaults to the solver's original six-axis set.
    #[arg(long = "axis", value_parser = parse_axis)]
    pub axes: Vec<ParamAxis>,

    /// Worker pool size (defaults to all hardware threads).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Assumed per-instance solver time budget in seconds, for the ETA line.
    #[arg(long = "time-limit", default_value_t = 2.08)]
    pub time_limit: f64,
}

/// Options for instance generation.
#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Amount of points to generate.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub num: usize,

    /// Min value of a coordinate.
    #[arg(long, default_value_t = 10.0)]
    pub min: f64,

    /// Max value of a coordinate.
    #[arg(long, default_value_t = 200.0)]
    pub max: f64,

    /// Random seed for reproducible instances.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Parse `NAME=LOW:HIGH:COUNT` into a `ParamAxis`.
///
/// Errors are plain strings per clap's `value_parser` contract; structural
/// validation (count >= 1, low <= high) happens later with the rest of the
/// configuration so that all axis problems are reported the same way.
pub fn parse_axis(s: &str) -> Result<ParamAxis, String> {
    let (name, triple) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=LOW:HIGH:COUNT, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("axis name is empty in '{s}'"));
    }

    let parts: Vec<&str> = triple.split(':').collect();
    let [low, high, count] = parts.as_slice() else {
        return Err(format!("expected LOW:HIGH:COUNT after '=', got '{triple}'"));
    };

    let low: f64 = low
        .parse()
        .map_err(|_| format!("invalid low bound '{low}' for axis '{name}'"))?;
    let high: f64 = high
        .parse()
        .map_err(|_| format!("invalid high bound '{high}' for axis '{name}'"))?;
    let count: usize = count
        .parse()
        .map_err(|_| format!("invalid count '{count}' for axis '{name}'"))?;

    Ok(ParamAxis::new(name, low, high, count))
}
