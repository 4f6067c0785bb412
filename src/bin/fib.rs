//! Prints the 45th Fibonacci number

use anyhow::Result;
use microbench::kernels::fib::{fib, FIB_INDEX};
use microbench::util::logger;

fn main() -> Result<()> {
    logger::init();
    println!("{}", fib(FIB_INDEX)?);
    Ok(())
}
