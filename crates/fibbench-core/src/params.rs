//! Benchmark parameters, built once at startup.

use std::time::Duration;

use serde::Serialize;

use crate::constants::{DEFAULT_FIB_N, DEFAULT_ITERATIONS, DEFAULT_SETTLE_PAUSE, MAX_FIB_I64_N};
use crate::error::BenchError;

/// Immutable workload parameters passed to the harness and driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchParams {
    /// Number of concurrent workers per phase.
    pub workers: usize,
    /// `fib(n)` evaluations per worker.
    pub iterations: i32,
    /// Fibonacci index.
    pub n: i32,
    /// Pause between the two timed phases. Best-effort measurement
    /// hygiene only; zero disables it.
    #[serde(serialize_with = "serialize_millis")]
    pub settle_pause: Duration,
    /// Pin worker `i` to core `i mod cores`.
    pub pin_cores: bool,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            workers: host_parallelism(),
            iterations: DEFAULT_ITERATIONS,
            n: DEFAULT_FIB_N,
            settle_pause: DEFAULT_SETTLE_PAUSE,
            pin_cores: false,
        }
    }
}

impl BenchParams {
    /// Check that the parameters describe a runnable benchmark.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.workers == 0 {
            return Err(BenchError::Config("worker count must be at least 1".into()));
        }
        if self.iterations < 0 {
            return Err(BenchError::Config(format!(
                "iterations must be non-negative, got {}",
                self.iterations
            )));
        }
        if self.n > MAX_FIB_I64_N {
            return Err(BenchError::Config(format!(
                "n={} overflows i64 (max {MAX_FIB_I64_N})",
                self.n
            )));
        }
        Ok(())
    }

    /// Validate and return `self`.
    pub fn validated(self) -> Result<Self, BenchError> {
        self.validate()?;
        Ok(self)
    }
}

/// Logical CPU count of the host, 1 if it cannot be determined.
#[must_use]
pub fn host_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_millis())
}
