//! Native Fibonacci workload.

use std::hint::black_box;

/// Iterative F(n) with two rolling accumulators.
///
/// `n <= 0` yields 0 and `n == 1` yields 1. Callers keep `n` at or below
/// [`MAX_FIB_I64_N`](crate::MAX_FIB_I64_N); past it the additions wrap
/// instead of panicking.
#[must_use]
pub fn fib(n: i32) -> i64 {
    if n <= 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

/// Sum of `count` separate evaluations of `fib(n)`.
///
/// Equals `count * fib(n)` (wrapping), but is computed by repeated
/// summation so the cost grows linearly with `count`. `count <= 0`
/// yields 0.
#[must_use]
pub fn sum_of_fibs(count: i32, n: i32) -> i64 {
    let mut total = 0i64;
    for _ in 0..count {
        // black_box stops the optimizer hoisting fib(n) out of the loop.
        total = total.wrapping_add(fib(black_box(n)));
    }
    total
}
