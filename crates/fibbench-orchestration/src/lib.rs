//! # fibbench-orchestration
//!
//! Parallel fan-out harness, timed benchmark phases, and result comparison.

pub mod harness;
pub mod interfaces;
pub mod orchestrator;

pub use harness::{run_with_workers, run_with_workers_pinned};
pub use interfaces::{BenchReport, NullPresenter, PhaseResult, ResultPresenter, Verdict};
pub use orchestrator::{analyze_totals, compare_phases, execute_phase, run_comparison, sum_results};
