//! Error types for the benchmark kernels and their configuration

use std::num::ParseIntError;

/// Errors raised while configuring or running a kernel
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The iteration bound taken from the environment is not a non-negative integer
    #[error("invalid value for `{var}`: {value:?} (expected a non-negative decimal integer)")]
    InvalidIterations {
        var: &'static str,
        value: String,
        #[source]
        source: Option<ParseIntError>,
    },

    /// The requested Fibonacci number does not fit in 64 bits
    #[error("fib({n}) overflows a 64-bit integer (largest supported index is {max})", max = crate::kernels::fib::MAX_FIB_INDEX)]
    FibOverflow { n: u32 },

    #[error("unknown kernel `{0}` (expected one of: fib, lcg, branch)")]
    UnknownKernel(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, BenchError>;
