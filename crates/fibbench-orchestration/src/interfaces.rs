//! Orchestration interfaces and result types.

use std::time::Duration;

use serde::{Serialize, Serializer};

use fibbench_core::BenchParams;

/// Trait for presenting benchmark output to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the run header (worker count and, optionally, host details).
    fn present_header(&self, params: &BenchParams);

    /// Present one finished phase.
    fn present_phase(&self, phase: &PhaseResult);

    /// Present the side-by-side timings and the verdict.
    fn present_summary(&self, report: &BenchReport);

    /// Present an error or warning.
    fn present_error(&self, error: &str);
}

/// Outcome of one timed fan-out phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseResult {
    /// Workload name.
    pub workload: String,
    /// Per-worker sums, in completion order.
    pub results: Vec<i64>,
    /// Wrapping sum of `results`.
    pub total: i64,
    /// Wall-clock time of the fan-out.
    #[serde(rename = "duration_ns", serialize_with = "serialize_nanos")]
    pub duration: Duration,
}

/// Which phase was faster, and by how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Name of the faster workload.
    pub winner: String,
    /// Name of the slower workload.
    pub loser: String,
    /// Absolute difference between the two durations.
    #[serde(rename = "difference_ns", serialize_with = "serialize_nanos")]
    pub difference: Duration,
}

/// Full result of a two-phase comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Parameters the run used.
    pub params: BenchParams,
    /// First timed phase (foreign).
    pub first: PhaseResult,
    /// Second timed phase (native).
    pub second: PhaseResult,
    /// Comparison of the two.
    pub verdict: Verdict,
}

/// Null presenter (prints nothing). Used for JSON output and tests.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_header(&self, _params: &BenchParams) {}
    fn present_phase(&self, _phase: &PhaseResult) {}
    fn present_summary(&self, _report: &BenchReport) {}
    fn present_error(&self, _error: &str) {}
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_nanos<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_nanos())
}
