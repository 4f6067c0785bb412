//! Prints how many integers in `[0, N)` are multiples of 3 (default N = 50,000,000)

use anyhow::{Context, Result};
use microbench::kernels::branch::count_div3;
use microbench::util::{config::BenchConfig, logger};

fn main() -> Result<()> {
    logger::init();
    let config = BenchConfig::from_env().context("Failed to read benchmark configuration")?;
    println!("{}", count_div3(config.iterations));
    Ok(())
}
