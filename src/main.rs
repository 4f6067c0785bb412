//! microbench - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use microbench::util::{config::BenchConfig, logger};
use microbench::{measure, measure_all, Kernel, NAME, VERSION};

/// Run the fib, lcg and branch micro-benchmark kernels
#[derive(Parser, Debug)]
#[command(name = "microbench")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the 45th Fibonacci number
    Fib {
        /// Report elapsed time on stderr
        #[arg(short, long)]
        time: bool,
    },

    /// Print the LCG state after N steps
    Lcg {
        /// Iteration count (overrides the `N` environment variable)
        #[arg(short = 'n', long, value_name = "N")]
        iterations: Option<u64>,

        /// Report elapsed time on stderr
        #[arg(short, long)]
        time: bool,
    },

    /// Print how many integers in [0, N) are multiples of 3
    Branch {
        /// Exclusive bound (overrides the `N` environment variable)
        #[arg(short = 'n', long, value_name = "N")]
        iterations: Option<u64>,

        /// Report elapsed time on stderr
        #[arg(short, long)]
        time: bool,
    },

    /// Run one kernel selected by name
    Run {
        /// Kernel name: fib, lcg or branch
        #[arg(value_name = "KERNEL")]
        kernel: Kernel,

        /// Bound for lcg and branch (overrides the `N` environment variable)
        #[arg(short = 'n', long, value_name = "N")]
        iterations: Option<u64>,

        /// Report elapsed time on stderr
        #[arg(short, long)]
        time: bool,
    },

    /// Run every kernel and print a timing table
    All {
        /// Bound for lcg and branch (overrides the `N` environment variable)
        #[arg(short = 'n', long, value_name = "N")]
        iterations: Option<u64>,

        /// Emit measurements as JSON
        #[arg(long)]
        json: bool,
    },

    /// List kernel names
    List,

    /// Print version information
    Version,
}

/// `-n` takes precedence; the environment is only read without it
fn resolve_config(iterations: Option<u64>) -> Result<BenchConfig> {
    match iterations {
        Some(n) => Ok(BenchConfig::default().with_iterations(n)),
        None => BenchConfig::from_env().context("Failed to read benchmark configuration"),
    }
}

fn run_single(
    kernel: Kernel,
    config: &BenchConfig,
    time: bool,
) -> Result<()> {
    let m = measure(kernel, config).with_context(|| format!("Failed to run: {}", kernel))?;
    println!("{}", m.result);
    if time {
        eprintln!("{}: {:.3} ms", kernel, m.elapsed_ms());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_verbose();
        eprintln!("microbench version: {}", VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    } else {
        logger::init();
    }

    match args.command {
        Commands::Fib { time } => {
            // fib has a fixed input; `N` is not consulted
            run_single(Kernel::Fib, &BenchConfig::default(), time)?;
        }
        Commands::Lcg { iterations, time } => {
            run_single(Kernel::Lcg, &resolve_config(iterations)?, time)?;
        }
        Commands::Branch { iterations, time } => {
            run_single(Kernel::Branch, &resolve_config(iterations)?, time)?;
        }
        Commands::Run {
            kernel,
            iterations,
            time,
        } => {
            let config = if kernel.uses_iterations() {
                resolve_config(iterations)?
            } else {
                BenchConfig::default()
            };
            run_single(kernel, &config, time)?;
        }
        Commands::All { iterations, json } => {
            let config = resolve_config(iterations)?;
            let measurements = measure_all(&config).context("Failed to run kernels")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&measurements)?);
            } else {
                for m in &measurements {
                    println!("{}\t{}\t{:.3}", m.kernel, m.result, m.elapsed_ms());
                }
            }
        }
        Commands::List => {
            for kernel in Kernel::ALL {
                println!("{}", kernel);
            }
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
