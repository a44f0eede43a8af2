//! Parallel fan-out harness.
//!
//! Spawns one scoped thread per worker, each running the workload once and
//! sending its sum over a bounded channel. The caller drains the channel
//! until the last sender is dropped, so results arrive in completion order.

use core_affinity::CoreId;
use fibbench_core::{BenchError, Workload};

/// Run `workload(count, n)` on `workers` concurrent threads and collect
/// one result per worker.
///
/// Blocks until every worker has finished. The order of the returned
/// results follows completion, not spawn order.
pub fn run_with_workers(
    workers: usize,
    count: i32,
    n: i32,
    workload: &dyn Workload,
) -> Result<Vec<i64>, BenchError> {
    fan_out(workers, count, n, workload, None)
}

/// Like [`run_with_workers`], but pins worker `i` to core `i mod cores`.
///
/// Falls back to unpinned threads when the platform reports no cores.
pub fn run_with_workers_pinned(
    workers: usize,
    count: i32,
    n: i32,
    workload: &dyn Workload,
) -> Result<Vec<i64>, BenchError> {
    let cores = core_affinity::get_core_ids().filter(|ids| !ids.is_empty());
    if cores.is_none() {
        tracing::warn!("core affinity unavailable, running workers unpinned");
    }
    fan_out(workers, count, n, workload, cores.as_deref())
}

fn fan_out(
    workers: usize,
    count: i32,
    n: i32,
    workload: &dyn Workload,
    cores: Option<&[CoreId]>,
) -> Result<Vec<i64>, BenchError> {
    let _span = tracing::debug_span!("fan_out", workload = workload.name(), workers).entered();

    let (tx, rx) = crossbeam_channel::bounded::<i64>(workers);

    let outcome = crossbeam::thread::scope(|s| {
        for worker in 0..workers {
            let tx = tx.clone();
            let core = cores.map(|ids| ids[worker % ids.len()]);
            s.spawn(move |_| {
                if let Some(core) = core {
                    if !core_affinity::set_for_current(core) {
                        tracing::debug!(worker, core = core.id, "failed to pin worker");
                    }
                }
                let result = workload.sum_of_fibs(count, n);
                tracing::trace!(worker, result, "worker finished");
                // Capacity equals the worker count, so this never blocks.
                let _ = tx.send(result);
            });
        }

        // The channel closes once every worker has dropped its sender.
        drop(tx);

        let mut results = Vec::with_capacity(workers);
        results.extend(rx.iter());
        results
    });

    match outcome {
        Ok(results) => {
            debug_assert_eq!(results.len(), workers);
            Ok(results)
        }
        Err(_) => Err(BenchError::WorkerPanicked(workload.name().to_string())),
    }
}
