//! microbench
//!
//! Three single-purpose CPU micro-benchmark kernels with exact, reproducible
//! results:
//!
//! - `fib`: the 45th Fibonacci number by iterative accumulation
//! - `lcg`: final state of a wrapping 32-bit linear congruential generator
//! - `branch`: multiples of 3 below `N`, via quotient and remainder
//!
//! # Example
//!
//! ```
//! use microbench::{BenchConfig, Kernel};
//!
//! let config = BenchConfig::default().with_iterations(1000);
//! assert_eq!(Kernel::Branch.run(&config).unwrap(), 334);
//! ```

#![warn(rust_2018_idioms)]

pub mod error;
pub mod kernels;
pub mod runner;

// Utility modules
pub mod util;

// Re-exports
pub use error::{BenchError, Result};
pub use kernels::Kernel;
pub use runner::{measure, measure_all, Measurement};
pub use util::config::BenchConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "microbench";
