//! # fibbench-core
//!
//! Core library for the fibbench FFI benchmark.
//! Provides the native Fibonacci workload, the foreign (C) workload wrapper,
//! benchmark parameters, and a small registry of named workloads.

pub mod constants;
pub mod error;
pub mod native;
pub mod params;
pub mod registry;
pub mod workload;

// Re-exports
pub use constants::{exit_codes, FIB_I64_TABLE, MAX_FIB_I64_N};
pub use error::BenchError;
pub use native::{fib, sum_of_fibs};
pub use params::BenchParams;
pub use registry::{DefaultFactory, WorkloadFactory};
pub use workload::{FnWorkload, ForeignWorkload, NativeWorkload, Workload};
