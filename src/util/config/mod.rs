//! Benchmark configuration
//!
//! The iteration bound is resolved with override semantics.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments (`microbench lcg -n 1000`)
//! 2. Environment variable `N`
//! 3. Default value (50,000,000)
//! ```
//!
//! A present but malformed `N` is an error, never replaced by the default.
//!
//! # Usage
//!
//! ```rust
//! use microbench::util::config::BenchConfig;
//!
//! let config = BenchConfig::from_lookup(|_| Some("1000".to_string())).unwrap();
//! assert_eq!(config.iterations, 1000);
//! ```

use tracing::debug;

use crate::error::{BenchError, Result};

/// Environment variable holding the iteration bound
pub const ITERATIONS_VAR: &str = "N";

/// Bound used when `N` is not set
pub const DEFAULT_ITERATIONS: u64 = 50_000_000;

/// Runtime configuration shared by the kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Iteration count for `lcg`, exclusive upper bound for `branch`
    pub iterations: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl BenchConfig {
    /// Resolve the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through `lookup` instead of the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ITERATIONS_VAR) {
            Some(value) => {
                let iterations = parse_iterations(&value)?;
                debug!("config: {}={} from environment", ITERATIONS_VAR, iterations);
                Ok(Self { iterations })
            }
            None => {
                debug!("config: {} unset, using default {}", ITERATIONS_VAR, DEFAULT_ITERATIONS);
                Ok(Self::default())
            }
        }
    }

    /// Override the iteration bound (CLI layer)
    pub fn with_iterations(
        mut self,
        iterations: u64,
    ) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Parse a non-negative decimal integer.
///
/// Strict: no sign, no surrounding whitespace, no digit separators, and the
/// empty string is rejected. Python's `int()` accepts `" 10"`, `"+5"` and
/// `"1_000"`; all three are errors here.
pub fn parse_iterations(value: &str) -> Result<u64> {
    if value.starts_with('+') {
        // `u64::from_str` accepts a leading plus
        return Err(invalid(value, None));
    }
    value
        .parse::<u64>()
        .map_err(|source| invalid(value, Some(source)))
}

fn invalid(
    value: &str,
    source: Option<std::num::ParseIntError>,
) -> BenchError {
    BenchError::InvalidIterations {
        var: ITERATIONS_VAR,
        value: value.to_string(),
        source,
    }
}
