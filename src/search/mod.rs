//! Sweep orchestration: corpus enumeration, job building, and the worker pool.
//!
//! A `SearchRun` makes one run's lifecycle explicit:
//! create (validate config, expand grid, enumerate corpus) -> execute
//! (parallel jobs behind a completion barrier) -> hand the results to the
//! ranker. All configuration problems surface at creation time, before any
//! worker starts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::{Combination, Job, JobResult, SweepConfig};
use crate::error::AppError;
use crate::grid;
use crate::search::store::ResultStore;

pub mod runner;
pub mod store;

/// Context for one sweep run.
#[derive(Debug)]
pub struct SearchRun {
    config: SweepConfig,
    combinations: Vec<Combination>,
    corpus: Arc<Vec<PathBuf>>,
}

impl SearchRun {
    /// Validate the configuration, expand the parameter grid, and enumerate
    /// the instance corpus.
    pub fn new(config: SweepConfig) -> Result<Self, AppError> {
        if config.workers == Some(0) {
            return Err(AppError::config("Worker count must be >= 1."));
        }

        let combinations = grid::expand(&config.axes)?;
        let corpus = enumerate_corpus(&config.input_folder)?;

        Ok(Self {
            config,
            combinations,
            corpus: Arc::new(corpus),
        })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    pub fn job_count(&self) -> usize {
        self.combinations.len()
    }

    /// Estimated run duration in minutes, assuming every invocation uses the
    /// full per-instance time budget and the pool stays saturated.
    pub fn eta_minutes(&self) -> f64 {
        let workers = self.config.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
        let job_duration = self.corpus.len() as f64 * self.config.time_limit;
        job_duration * self.combinations.len() as f64 / workers as f64 / 60.0
    }

    /// Run every job across the worker pool and return the collected results.
    ///
    /// Blocks until all jobs have completed. The first job failure aborts the
    /// whole run; no partial result set is returned. On success the result
    /// count equals the job count.
    pub fn execute(&self) -> Result<Vec<JobResult>, AppError> {
        let jobs = build_jobs(&self.combinations, &self.corpus);
        let total = jobs.len();
        let store = ResultStore::new();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers.unwrap_or(0))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build worker pool: {e}")))?;

        pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let result = runner::run_job(&self.config.exe_path, job, &self.config.axes)?;
                    let summary = format!(
                        "{} -> total_length={}, total_time={:.3}s",
                        job.combination.describe(&self.config.axes),
                        result.total_length,
                        result.total_time
                    );
                    let done = store.append(result);
                    println!("job {done}/{total}: {summary}");
                    Ok(())
                })
                .collect::<Result<(), AppError>>()
        })?;

        Ok(store.snapshot())
    }
}

/// One job per combination; every job references the entire corpus.
fn build_jobs(combinations: &[Combination], corpus: &Arc<Vec<PathBuf>>) -> Vec<Job> {
    combinations
        .iter()
        .map(|combination| Job {
            combination: combination.clone(),
            instances: Arc::clone(corpus),
        })
        .collect()
}

/// Enumerate the instance corpus: every regular file in the folder, sorted by
/// path for a stable job definition. No schema validation beyond readability.
fn enumerate_corpus(folder: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = std::fs::read_dir(folder).map_err(|e| {
        AppError::config(format!(
            "Failed to read input folder '{}': {e}",
            folder.display()
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AppError::config(format!(
                "Failed to read input folder '{}': {e}",
                folder.display()
            ))
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(AppError::config(format!(
            "No input files found in '{}'.",
            folder.display()
        )));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParamAxis, default_axes};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tsweep-search-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn config(input_folder: PathBuf, axes: Vec<ParamAxis>) -> SweepConfig {
        SweepConfig {
            exe_path: PathBuf::from("./TSP"),
            input_folder,
            output_file: None,
            export_json: None,
            axes,
            workers: None,
            time_limit: 2.08,
        }
    }

    #[test]
    fn empty_corpus_is_rejected_before_any_worker() {
        let dir = scratch_dir("empty");
        let err = SearchRun::new(config(dir, default_axes())).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn missing_corpus_folder_is_rejected() {
        let err = SearchRun::new(config(
            PathBuf::from("/nonexistent/tsweep-corpus"),
            default_axes(),
        ))
        .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let dir = scratch_dir("workers");
        std::fs::write(dir.join("a.txt"), "1\n0 0\n").unwrap();
        let mut cfg = config(dir, default_axes());
        cfg.workers = Some(0);
        let err = SearchRun::new(cfg).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn one_job_per_combination_with_the_full_corpus() {
        let dir = scratch_dir("jobs");
        std::fs::write(dir.join("a.txt"), "1\n0 0\n").unwrap();
        std::fs::write(dir.join("b.txt"), "1\n1 1\n").unwrap();

        let run = SearchRun::new(config(dir, default_axes())).unwrap();
        assert_eq!(run.job_count(), 14 * 10);
        assert_eq!(run.corpus_len(), 2);

        let jobs = build_jobs(&run.combinations, &run.corpus);
        assert_eq!(jobs.len(), run.job_count());
        for job in &jobs {
            assert_eq!(job.instances.as_slice(), run.corpus.as_slice());
        }
    }

    #[test]
    fn corpus_enumeration_is_sorted_and_files_only() {
        let dir = scratch_dir("sorted");
        std::fs::write(dir.join("b.txt"), "x").unwrap();
        std::fs::write(dir.join("a.txt"), "x").unwrap();
        std::fs::create_dir_all(dir.join("nested")).unwrap();

        let corpus = enumerate_corpus(&dir).unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus[0].ends_with("a.txt"));
        assert!(corpus[1].ends_with("b.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn sweep_collects_one_result_per_job() {
        use std::os::unix::fs::PermissionsExt;

        let dir = scratch_dir("sweep");
        std::fs::write(dir.join("inst.txt"), "1\n0 0\n").unwrap();

        // Scale the reported length with the noise_ratio argument so the two
        // combinations are distinguishable: 1.5 -> 10, 2.5 -> 20. The stub
        // lives outside the corpus folder so it is not picked up as an
        // instance.
        let exe_dir = scratch_dir("sweep-exe");
        let exe = exe_dir.join("stub.sh");
        std::fs::write(
            &exe,
            "#!/bin/sh\ncat > /dev/null\ncase \"$1\" in\n1.5) echo 10;;\n2.5) echo 20;;\n*) echo 99;;\nesac\n",
        )
        .unwrap();
        let mut perms = std::fs::metadata(&exe).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&exe, perms).unwrap();

        let mut cfg = config(dir, vec![ParamAxis::new("noise_ratio", 1.5, 2.5, 2)]);
        cfg.exe_path = exe;
        cfg.workers = Some(2);

        let run = SearchRun::new(cfg).unwrap();
        let results = run.execute().unwrap();
        assert_eq!(results.len(), 2);

        let mut lengths: Vec<i64> = results.iter().map(|r| r.total_length).collect();
        lengths.sort();
        assert_eq!(lengths, vec![10, 20]);
    }

    #[cfg(unix)]
    #[test]
    fn failing_job_aborts_the_run() {
        use std::os::unix::fs::PermissionsExt;

        let dir = scratch_dir("abort");
        std::fs::write(dir.join("inst.txt"), "1\n0 0\n").unwrap();

        let exe_dir = scratch_dir("abort-exe");
        let exe = exe_dir.join("stub.sh");
        std::fs::write(&exe, "#!/bin/sh\ncat > /dev/null\necho oops\n").unwrap();
        let mut perms = std::fs::metadata(&exe).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&exe, perms).unwrap();

        let mut cfg = config(dir, vec![ParamAxis::new("noise_ratio", 1.5, 2.5, 2)]);
        cfg.exe_path = exe;
        cfg.workers = Some(2);

        let run = SearchRun::new(cfg).unwrap();
        let err = run.execute().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Process);
    }
}
