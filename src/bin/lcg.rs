//! Prints the LCG state after `N` steps (default 50,000,000)

use anyhow::{Context, Result};
use microbench::kernels::lcg::lcg;
use microbench::util::{config::BenchConfig, logger};

fn main() -> Result<()> {
    logger::init();
    let config = BenchConfig::from_env().context("Failed to read benchmark configuration")?;
    println!("{}", lcg(config.iterations));
    Ok(())
}
