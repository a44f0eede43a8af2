//! Core orchestration: timed phases, the two-phase comparison, and result analysis.

use std::time::Instant;

use fibbench_core::{BenchError, BenchParams, Workload};

use crate::harness::{run_with_workers, run_with_workers_pinned};
use crate::interfaces::{BenchReport, PhaseResult, ResultPresenter, Verdict};

/// Wrapping sum of per-worker results.
#[must_use]
pub fn sum_results(results: &[i64]) -> i64 {
    results.iter().fold(0i64, |acc, &r| acc.wrapping_add(r))
}

/// Run one fan-out of `workload` and time it.
pub fn execute_phase(
    params: &BenchParams,
    workload: &dyn Workload,
) -> Result<PhaseResult, BenchError> {
    tracing::info!(
        workload = workload.name(),
        workers = params.workers,
        iterations = params.iterations,
        n = params.n,
        "starting phase"
    );

    let start = Instant::now();
    let results = if params.pin_cores {
        run_with_workers_pinned(params.workers, params.iterations, params.n, workload)?
    } else {
        run_with_workers(params.workers, params.iterations, params.n, workload)?
    };
    let duration = start.elapsed();

    let total = sum_results(&results);
    tracing::info!(workload = workload.name(), ?duration, total, "phase complete");

    Ok(PhaseResult {
        workload: workload.name().to_string(),
        results,
        total,
        duration,
    })
}

/// Decide which phase was faster.
///
/// The first phase only wins when strictly faster; a tie goes to the second.
#[must_use]
pub fn compare_phases(first: &PhaseResult, second: &PhaseResult) -> Verdict {
    if first.duration < second.duration {
        Verdict {
            winner: first.workload.clone(),
            loser: second.workload.clone(),
            difference: second.duration - first.duration,
        }
    } else {
        Verdict {
            winner: second.workload.clone(),
            loser: first.workload.clone(),
            difference: first.duration - second.duration,
        }
    }
}

/// Cross-check the grand totals of two phases that ran the same workload.
pub fn analyze_totals(first: &PhaseResult, second: &PhaseResult) -> Result<(), BenchError> {
    if first.total == second.total {
        return Ok(());
    }
    Err(BenchError::Mismatch {
        first_name: first.workload.clone(),
        first: first.total,
        second_name: second.workload.clone(),
        second: second.total,
    })
}

/// Run `first` then `second` with identical parameters, separated by the
/// settle pause, and build the report.
///
/// The phases never overlap. Output is streamed to `presenter` as each
/// step finishes.
pub fn run_comparison(
    params: &BenchParams,
    first: &dyn Workload,
    second: &dyn Workload,
    presenter: &dyn ResultPresenter,
) -> Result<BenchReport, BenchError> {
    params.validate()?;
    presenter.present_header(params);

    let first_phase = execute_phase(params, first)?;
    presenter.present_phase(&first_phase);

    if !params.settle_pause.is_zero() {
        tracing::debug!(pause = ?params.settle_pause, "settling between phases");
        std::thread::sleep(params.settle_pause);
    }

    let second_phase = execute_phase(params, second)?;
    presenter.present_phase(&second_phase);

    let verdict = compare_phases(&first_phase, &second_phase);
    let report = BenchReport {
        params: params.clone(),
        first: first_phase,
        second: second_phase,
        verdict,
    };
    presenter.present_summary(&report);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use fibbench_core::{FnWorkload, ForeignWorkload, NativeWorkload};

    use crate::interfaces::NullPresenter;

    fn small_params(workers: usize, iterations: i32, n: i32) -> BenchParams {
        BenchParams {
            workers,
            iterations,
            n,
            settle_pause: Duration::ZERO,
            pin_cores: false,
        }
    }

    fn phase(name: &str, total: i64, millis: u64) -> PhaseResult {
        PhaseResult {
            workload: name.into(),
            results: vec![total],
            total,
            duration: Duration::from_millis(millis),
        }
    }

    #[test]
    fn sum_results_basic() {
        assert_eq!(sum_results(&[]), 0);
        assert_eq!(sum_results(&[55_000; 4]), 220_000);
    }

    #[test]
    fn sum_results_wraps() {
        assert_eq!(sum_results(&[i64::MAX, 1]), i64::MIN);
    }

    #[test]
    fn execute_phase_small_workload() {
        let params = small_params(4, 1000, 10);
        let result = execute_phase(&params, &NativeWorkload::new()).unwrap();
        assert_eq!(result.workload, "rust");
        assert_eq!(result.results.len(), 4);
        assert_eq!(result.total, 220_000);
    }

    #[test]
    fn execute_phase_zero_count() {
        let params = small_params(4, 0, 57);
        let result = execute_phase(&params, &ForeignWorkload::new()).unwrap();
        assert_eq!(result.results, vec![0; 4]);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn execute_phase_pinned() {
        let params = BenchParams {
            pin_cores: true,
            ..small_params(2, 10, 10)
        };
        let result = execute_phase(&params, &NativeWorkload::new()).unwrap();
        assert_eq!(result.total, 1100);
    }

    #[test]
    fn compare_first_faster() {
        let verdict = compare_phases(&phase("ffi", 0, 10), &phase("rust", 0, 25));
        assert_eq!(verdict.winner, "ffi");
        assert_eq!(verdict.loser, "rust");
        assert_eq!(verdict.difference, Duration::from_millis(15));
    }

    #[test]
    fn compare_second_faster() {
        let verdict = compare_phases(&phase("ffi", 0, 40), &phase("rust", 0, 25));
        assert_eq!(verdict.winner, "rust");
        assert_eq!(verdict.difference, Duration::from_millis(15));
    }

    #[test]
    fn compare_tie_goes_to_second() {
        let verdict = compare_phases(&phase("ffi", 0, 10), &phase("rust", 0, 10));
        assert_eq!(verdict.winner, "rust");
        assert_eq!(verdict.difference, Duration::ZERO);
    }

    #[test]
    fn analyze_matching_totals() {
        assert!(analyze_totals(&phase("ffi", 55, 1), &phase("rust", 55, 2)).is_ok());
    }

    #[test]
    fn analyze_mismatching_totals() {
        let err = analyze_totals(&phase("ffi", 55, 1), &phase("rust", 56, 2)).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Mismatch {
                first: 55,
                second: 56,
                ..
            }
        ));
    }

    #[test]
    fn run_comparison_end_to_end() {
        let params = small_params(4, 1000, 10);
        let report = run_comparison(
            &params,
            &ForeignWorkload::new(),
            &NativeWorkload::new(),
            &NullPresenter,
        )
        .unwrap();
        assert_eq!(report.first.workload, "ffi");
        assert_eq!(report.second.workload, "rust");
        assert_eq!(report.first.total, 220_000);
        assert_eq!(report.second.total, 220_000);
        assert!(analyze_totals(&report.first, &report.second).is_ok());
    }

    #[test]
    fn run_comparison_waits_for_settle_pause() {
        let pause = Duration::from_millis(30);
        let params = BenchParams {
            settle_pause: pause,
            ..small_params(2, 0, 10)
        };

        let start = Instant::now();
        let report = run_comparison(
            &params,
            &ForeignWorkload::new(),
            &NativeWorkload::new(),
            &NullPresenter,
        )
        .unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= pause, "elapsed {elapsed:?} < pause {pause:?}");
        // The pause sits between the phases, not inside either timing.
        assert!(report.first.duration + report.second.duration <= elapsed - pause);
    }

    #[test]
    fn run_comparison_rejects_invalid_params() {
        let params = small_params(0, 10, 10);
        let result = run_comparison(
            &params,
            &ForeignWorkload::new(),
            &NativeWorkload::new(),
            &NullPresenter,
        );
        assert!(matches!(result, Err(BenchError::Config(_))));
    }

    #[test]
    fn run_comparison_presents_in_order() {
        struct Recording(Mutex<Vec<String>>);

        impl ResultPresenter for Recording {
            fn present_header(&self, params: &BenchParams) {
                self.0.lock().unwrap().push(format!("header:{}", params.workers));
            }
            fn present_phase(&self, phase: &PhaseResult) {
                self.0.lock().unwrap().push(format!("phase:{}", phase.workload));
            }
            fn present_summary(&self, report: &BenchReport) {
                self.0
                    .lock()
                    .unwrap()
                    .push(format!("summary:{}", report.verdict.winner.is_empty()));
            }
            fn present_error(&self, error: &str) {
                self.0.lock().unwrap().push(format!("error:{error}"));
            }
        }

        let presenter = Recording(Mutex::new(Vec::new()));
        let params = small_params(2, 10, 10);
        let slow = FnWorkload::new("slow", |count, n| fibbench_core::sum_of_fibs(count, n));
        run_comparison(&params, &slow, &NativeWorkload::new(), &presenter).unwrap();

        let events = presenter.0.into_inner().unwrap();
        assert_eq!(
            events,
            vec!["header:2", "phase:slow", "phase:rust", "summary:false"]
        );
    }
}
