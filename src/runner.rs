//! Timed kernel execution

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::info;

use crate::error::Result;
use crate::kernels::Kernel;
use crate::util::config::BenchConfig;

/// Outcome of a single kernel run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub kernel: Kernel,
    /// Bound passed to the kernel, `None` for kernels with a fixed input
    pub iterations: Option<u64>,
    pub result: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

fn serialize_millis<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(millis(*elapsed))
}

/// Run `kernel` once and time it
pub fn measure(
    kernel: Kernel,
    config: &BenchConfig,
) -> Result<Measurement> {
    let start = Instant::now();
    let result = kernel.run(config)?;
    let elapsed = start.elapsed();
    info!("{}: {} in {:.3} ms", kernel, result, millis(elapsed));

    Ok(Measurement {
        kernel,
        iterations: kernel.uses_iterations().then_some(config.iterations),
        result,
        elapsed,
    })
}

/// Run every kernel in [`Kernel::ALL`] order
pub fn measure_all(config: &BenchConfig) -> Result<Vec<Measurement>> {
    Kernel::ALL
        .into_iter()
        .map(|kernel| measure(kernel, config))
        .collect()
}
