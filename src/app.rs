//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds and executes the sweep
//! - ranks the results and prints the console report
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, GenArgs, SweepArgs};
use crate::domain::{SweepConfig, default_axes};
use crate::error::AppError;
use crate::search::SearchRun;

/// Entry point for the `tsweep` binary.
pub fn run() -> Result<(), AppError> {
    // We want `tsweep` and `tsweep -e ./TSP` to behave like `tsweep sweep ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the original tool's flag-only invocation style working.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Sweep(args) => handle_sweep(args),
        Command::Gen(args) => handle_gen(args),
    }
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = sweep_config_from_args(&args);
    let run = SearchRun::new(config)?;

    println!("Found {} input files", run.corpus_len());
    println!("Total jobs: {}", run.job_count());
    println!("ETA: {:.2} minute(s)", run.eta_minutes());

    let results = run.execute()?;
    let report = crate::report::rank(results)?;

    // The console summary always comes before exports, so an export failure
    // never costs the run's findings.
    println!();
    println!("{}", crate::report::format_summary(&report, &run.config().axes));

    if let Some(path) = &run.config().output_file {
        let written = crate::io::export::write_results_csv(path, &report.by_length, &run.config().axes)?;
        println!("Wrote results to {}", written.display());
    }
    if let Some(path) = &run.config().export_json {
        let written = crate::io::export::write_report_json(path, &report, &run.config().axes)?;
        println!("Wrote report to {}", written.display());
    }

    Ok(())
}

fn handle_gen(args: GenArgs) -> Result<(), AppError> {
    let instance = crate::data::generate_instance(args.num, args.min, args.max, args.seed)?;
    print!("{instance}");
    Ok(())
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    let axes = if args.axes.is_empty() {
        default_axes()
    } else {
        args.axes.clone()
    };

    SweepConfig {
        exe_path: args.exepath.clone(),
        input_folder: args.inputfolder.clone(),
        output_file: args.outputfile.clone(),
        export_json: args.export_json.clone(),
        axes,
        workers: args.workers,
        time_limit: args.time_limit,
    }
}

/// Rewrite argv so `tsweep` defaults to `tsweep sweep`.
///
/// Rules:
/// - `tsweep`                     -> `tsweep sweep`
/// - `tsweep -e ./TSP ...`        -> `tsweep sweep -e ./TSP ...`
/// - `tsweep --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("sweep".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "sweep" | "gen");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "sweep flags".
    if arg1.starts_with('-') {
        argv.insert(1, "sweep".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
