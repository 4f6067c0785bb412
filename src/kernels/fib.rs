//! Iterative Fibonacci kernel
//!
//! Two accumulators advanced in lockstep: `t = a + b; a = b; b = t`.
//! Indexing is 0-based with `fib(0) = 0` and `fib(1) = 1`.

use crate::error::{BenchError, Result};

/// Index computed by the `fib` program
pub const FIB_INDEX: u32 = 45;

/// Largest index whose Fibonacci number fits in a `u64`
pub const MAX_FIB_INDEX: u32 = 93;

/// Compute the `n`-th Fibonacci number.
///
/// Additions are checked. The look-ahead accumulator `b` may overflow on the
/// final step without affecting the result; only an overflowing `a` is an
/// error.
///
/// # Example
///
/// ```
/// use microbench::kernels::fib::fib;
///
/// assert_eq!(fib(45).unwrap(), 1134903170);
/// ```
pub fn fib(n: u32) -> Result<u64> {
    let mut a: u64 = 0;
    let mut b: Option<u64> = Some(1);
    for _ in 0..n {
        let next = b.ok_or(BenchError::FibOverflow { n })?;
        b = a.checked_add(next);
        a = next;
    }
    Ok(a)
}
