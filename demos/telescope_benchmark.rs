//! Times all four solvers on random telescope observing requests.
//!
//! ```text
//! cargo run --example telescope_benchmark -- --sizes 10,20 --seed 7
//! RUST_LOG=debug cargo run --example telescope_benchmark
//! ```

use clap::Parser;
use qtty::Second;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use telesched::algorithms::default_solvers;
use telesched::benchmark::run_all;
use telesched::chart::TaskChart;
use telesched::instance::InstanceConfig;
use telesched::Task;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Args {
    /// Instance sizes to solve, one instance per size
    #[arg(long, value_delimiter = ',', default_values_t = [10usize, 20])]
    sizes: Vec<usize>,

    /// Seed for instance generation and random search (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the instance and each schedule for instances up to this size
    #[arg(long, default_value_t = 10)]
    display_up_to: usize,

    #[arg(long, default_value_t = 99)]
    max_benefit: u32,

    #[arg(long, default_value_t = 500)]
    max_start_time: u32,

    #[arg(long, default_value_t = 250)]
    max_duration: u32,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_tracing();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "benchmark seed");
    let mut rng = StdRng::seed_from_u64(seed);

    let config = InstanceConfig {
        max_benefit: args.max_benefit,
        max_start_time: args.max_start_time,
        max_duration: args.max_duration,
    };

    for &n in &args.sizes {
        println!("\n ******** Testing to solve for {n} events ********");
        let tasks: Vec<Task<Second>> = config.generate(n, &mut rng)?;
        let display = n <= args.display_up_to;

        if display {
            println!("Problem instance: ");
            print!("{}", TaskChart::new(&tasks));
            println!();
        }

        let mut solvers = default_solvers::<Second>(rng.gen());
        for (name, outcome) in run_all(&mut solvers, &tasks) {
            match outcome {
                Ok(report) => {
                    println!("{report}");
                    if display {
                        print!("{}", TaskChart::new(report.solution.schedule()));
                        println!();
                    }
                }
                Err(err) => println!("testing {name:<14} ... failed: {err}"),
            }
        }
    }

    Ok(())
}
