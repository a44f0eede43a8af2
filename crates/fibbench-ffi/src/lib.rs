//! # fibbench-ffi
//!
//! Bindings to the C Fibonacci workload in `csrc/fibcalculator.c`.
//!
//! The C code is compiled by a separate toolchain (`cc`) into its own
//! static library, so every call below crosses a real FFI boundary. The
//! wrappers are safe: both C functions take plain integers, touch no
//! memory owned by the caller and always return.

use std::os::raw::{c_int, c_longlong};

mod sys {
    use super::{c_int, c_longlong};

    extern "C" {
        pub fn fib(n: c_int) -> c_longlong;
        pub fn calculate_sum_of_fibs(count: c_int, n: c_int) -> c_longlong;
    }
}

/// F(n) computed by the C implementation.
///
/// Same edge policy as the native version: `n <= 0` yields 0.
#[inline]
#[allow(unsafe_code)]
pub fn fib(n: i32) -> i64 {
    // SAFETY: pure integer function with no pointer arguments or global state.
    unsafe { sys::fib(n) }
}

/// `count` repeated evaluations of F(n), summed by the C implementation.
///
/// The sum wraps on overflow.
#[inline]
#[allow(unsafe_code)]
pub fn calculate_sum_of_fibs(count: i32, n: i32) -> i64 {
    // SAFETY: pure integer function with no pointer arguments or global state.
    unsafe { sys::calculate_sum_of_fibs(count, n) }
}
