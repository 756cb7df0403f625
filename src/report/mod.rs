//! Ranking and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the sweep/ranking code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use serde::Serialize;

use crate::domain::{JobResult, ParamAxis};
use crate::error::AppError;

/// Both total orderings over the collected results, plus tie statistics at
/// the best tour length. Derived once per run, read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RankedReport {
    /// Ascending by `total_length`.
    pub by_length: Vec<JobResult>,
    /// Ascending by `total_time`.
    pub by_time: Vec<JobResult>,
    /// How many *other* combinations matched the best tour length.
    pub tie_count_at_best: usize,
}

/// Rank the collected results.
///
/// Both sorts are stable, so equal keys keep their append order: arbitrary,
/// but deterministic for a single run.
pub fn rank(results: Vec<JobResult>) -> Result<RankedReport, AppError> {
    if results.is_empty() {
        return Err(AppError::config("No job results to rank."));
    }

    let mut by_length = results.clone();
    by_length.sort_by_key(|r| r.total_length);

    let mut by_time = results;
    by_time.sort_by(|a, b| {
        a.total_time
            .partial_cmp(&b.total_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let best_length = by_length[0].total_length;
    let tie_count_at_best = by_length
        .iter()
        .filter(|r| r.total_length == best_length)
        .count()
        - 1;

    Ok(RankedReport {
        by_length,
        by_time,
        tie_count_at_best,
    })
}

impl RankedReport {
    pub fn jobs_count(&self) -> usize {
        self.by_length.len()
    }

    pub fn best_by_length(&self) -> &JobResult {
        &self.by_length[0]
    }

    pub fn best_by_time(&self) -> &JobResult {
        &self.by_time[0]
    }

    /// Share of the *other* combinations that tied the best tour length, in
    /// percent. `None` for a single-job run, where the share is undefined.
    pub fn tie_share_percent(&self) -> Option<f64> {
        let others = self.jobs_count() - 1;
        if others == 0 {
            return None;
        }
        Some(100.0 * self.tie_count_at_best as f64 / others as f64)
    }
}

/// Format the end-of-run console summary.
pub fn format_summary(report: &RankedReport, axes: &[ParamAxis]) -> String {
    let best_len = report.best_by_length();
    let best_time = report.best_by_time();

    let mut out = String::new();
    out.push_str("=== tsweep - TSP parameter sweep ===\n");
    out.push_str(&format!("Jobs: {}\n", report.jobs_count()));

    out.push_str(&format!(
        "\nBest by length: {} -> total_length={} (total_time={:.3}s)\n",
        best_len.combination.describe(axes),
        best_len.total_length,
        best_len.total_time
    ));
    match report.tie_share_percent() {
        Some(pct) => out.push_str(&format!(
            "Score shared with {} other combination(s) ({:.2}%)\n",
            report.tie_count_at_best, pct
        )),
        None => out.push_str(&format!(
            "Score shared with {} other combination(s) (N/A)\n",
            report.tie_count_at_best
        )),
    }

    out.push_str(&format!(
        "\nBest by time: {} -> total_time={:.3}s (total_length={})\n",
        best_time.combination.describe(axes),
        best_time.total_time,
        best_time.total_length
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Combination;

    fn result(value: f64, length: i64, time: f64) -> JobResult {
        JobResult {
            combination: Combination {
                values: vec![value],
            },
            total_length: length,
            total_time: time,
        }
    }

    fn axes() -> Vec<ParamAxis> {
        vec![ParamAxis::new("noise_ratio", 1.0, 3.0, 3)]
    }

    #[test]
    fn by_length_is_a_total_ascending_order() {
        let report = rank(vec![
            result(1.0, 30, 0.3),
            result(2.0, 10, 0.5),
            result(3.0, 20, 0.1),
        ])
        .unwrap();

        for w in report.by_length.windows(2) {
            assert!(w[0].total_length <= w[1].total_length);
        }
        assert_eq!(report.best_by_length().total_length, 10);
    }

    #[test]
    fn best_by_time_may_differ_from_best_by_length() {
        let report = rank(vec![result(1.0, 10, 0.9), result(2.0, 20, 0.1)]).unwrap();
        assert_eq!(report.best_by_length().combination.values, vec![1.0]);
        assert_eq!(report.best_by_time().combination.values, vec![2.0]);
    }

    #[test]
    fn tie_counting_excludes_the_best_itself() {
        // Two of five combinations share the best length of 42.
        let report = rank(vec![
            result(1.0, 42, 0.1),
            result(2.0, 50, 0.2),
            result(3.0, 42, 0.3),
            result(4.0, 60, 0.4),
            result(5.0, 70, 0.5),
        ])
        .unwrap();

        assert_eq!(report.tie_count_at_best, 1);
        assert_eq!(report.tie_share_percent(), Some(25.0));
    }

    #[test]
    fn no_ties_means_zero_count_and_share() {
        let report = rank(vec![result(1.0, 10, 0.1), result(2.0, 20, 0.2)]).unwrap();
        assert_eq!(report.tie_count_at_best, 0);
        assert_eq!(report.tie_share_percent(), Some(0.0));
    }

    #[test]
    fn single_job_share_is_undefined_not_a_division_error() {
        let report = rank(vec![result(1.0, 10, 0.1)]).unwrap();
        assert_eq!(report.tie_count_at_best, 0);
        assert_eq!(report.tie_share_percent(), None);

        let text = format_summary(&report, &axes());
        assert!(text.contains("N/A"));
    }

    #[test]
    fn equal_lengths_keep_append_order() {
        let report = rank(vec![
            result(1.0, 42, 0.2),
            result(2.0, 42, 0.1),
            result(3.0, 42, 0.3),
        ])
        .unwrap();
        let order: Vec<f64> = report
            .by_length
            .iter()
            .map(|r| r.combination.values[0])
            .collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_result_set_is_an_error() {
        assert!(rank(Vec::new()).is_err());
    }

    #[test]
    fn summary_names_both_winners() {
        let report = rank(vec![result(1.5, 10, 0.9), result(2.5, 20, 0.1)]).unwrap();
        let text = format_summary(&report, &axes());
        assert!(text.contains("Best by length: noise_ratio=1.5"));
        assert!(text.contains("Best by time: noise_ratio=2.5"));
        assert!(text.contains("Jobs: 2"));
    }
}
