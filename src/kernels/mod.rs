//! Benchmark kernels
//!
//! Each kernel is a pure function of a single bound:
//!
//! | kernel   | input                  | result                         |
//! |----------|------------------------|--------------------------------|
//! | `fib`    | fixed index 45         | `fib(45)`                      |
//! | `lcg`    | `N` iterations         | final 32-bit generator state   |
//! | `branch` | `N` exclusive bound    | multiples of 3 below `N`       |

pub mod branch;
pub mod fib;
pub mod lcg;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{BenchError, Result};
use crate::util::config::BenchConfig;

/// The available kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    Fib,
    Lcg,
    Branch,
}

impl Kernel {
    /// Every kernel, in run order
    pub const ALL: [Kernel; 3] = [Kernel::Fib, Kernel::Lcg, Kernel::Branch];

    pub fn name(self) -> &'static str {
        match self {
            Kernel::Fib => "fib",
            Kernel::Lcg => "lcg",
            Kernel::Branch => "branch",
        }
    }

    /// Whether the kernel reads the configured iteration bound
    pub fn uses_iterations(self) -> bool {
        !matches!(self, Kernel::Fib)
    }

    /// Run the kernel once and widen its result to `u64`
    pub fn run(
        self,
        config: &BenchConfig,
    ) -> Result<u64> {
        match self {
            Kernel::Fib => {
                debug!("fib: index {}", fib::FIB_INDEX);
                let r = fib::fib(fib::FIB_INDEX)?;
                debug!("fib: result {}", r);
                Ok(r)
            }
            Kernel::Lcg => {
                debug!("lcg: {} iterations", config.iterations);
                let r = lcg::lcg(config.iterations);
                debug!("lcg: result {}", r);
                Ok(u64::from(r))
            }
            Kernel::Branch => {
                debug!("branch: bound {}", config.iterations);
                let r = branch::count_div3(config.iterations);
                debug!("branch: result {}", r);
                Ok(r)
            }
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kernel {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Kernel::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BenchError::UnknownKernel(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
