//! Benchmark constants and exit codes.

use std::time::Duration;

/// Largest Fibonacci index whose value fits in an `i64`.
/// F(92) = 7540113804746346429; F(93) overflows.
pub const MAX_FIB_I64_N: i32 = 92;

/// Default Fibonacci index for the benchmark.
pub const DEFAULT_FIB_N: i32 = MAX_FIB_I64_N;

/// Default number of `fib(n)` evaluations per worker.
pub const DEFAULT_ITERATIONS: i32 = 10_000_000;

/// Default pause between the two timed phases.
pub const DEFAULT_SETTLE_PAUSE: Duration = Duration::from_millis(500);

/// Precomputed Fibonacci values for n = 0..=92.
pub const FIB_I64_TABLE: [i64; 93] = {
    let mut table = [0i64; 93];
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
