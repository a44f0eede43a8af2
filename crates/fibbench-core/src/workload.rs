//! The `Workload` trait and its implementations.
//!
//! A workload is the unit of work each benchmark worker runs once:
//! `count` evaluations of F(n), summed. `NativeWorkload` runs the Rust
//! loop, `ForeignWorkload` crosses into the C library.

use std::fmt;

use crate::native;

/// A summed-Fibonacci workload, consumed by the fan-out harness.
pub trait Workload: Send + Sync {
    /// Sum `count` evaluations of F(n).
    fn sum_of_fibs(&self, count: i32, n: i32) -> i64;

    /// Short label used in logs and the report.
    fn name(&self) -> &str;
}

/// Pure Rust workload.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeWorkload;

impl NativeWorkload {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Workload for NativeWorkload {
    fn sum_of_fibs(&self, count: i32, n: i32) -> i64 {
        native::sum_of_fibs(count, n)
    }

    fn name(&self) -> &str {
        "rust"
    }
}

/// Workload implemented in C and called over FFI.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForeignWorkload;

impl ForeignWorkload {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Workload for ForeignWorkload {
    fn sum_of_fibs(&self, count: i32, n: i32) -> i64 {
        fibbench_ffi::calculate_sum_of_fibs(count, n)
    }

    fn name(&self) -> &str {
        "ffi"
    }
}

/// Adapts a named closure into a `Workload`.
pub struct FnWorkload<F> {
    name: String,
    func: F,
}

impl<F> FnWorkload<F>
where
    F: Fn(i32, i32) -> i64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Workload for FnWorkload<F>
where
    F: Fn(i32, i32) -> i64 + Send + Sync,
{
    fn sum_of_fibs(&self, count: i32, n: i32) -> i64 {
        (self.func)(count, n)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnWorkload<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnWorkload")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
