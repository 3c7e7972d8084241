use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use indir_sort_rs::harness::{self, HarnessConfig, DEFAULT_WIDTH};
use indir_sort_rs::Algorithm;

/// Sorts a pseudo-random array indirectly and reports the number of comparisons.
///
/// Example: `indir_sort 100 25 11` sorts 100 values in [0, 25) generated from seed 11.
#[derive(Debug, Parser)]
#[command(name = "indir_sort", version)]
struct Cli {
    /// Number of elements to generate.
    size: usize,

    /// Values are drawn from [0, modulus).
    modulus: u32,

    /// Seed of the pseudo-random generator.
    seed: u64,

    /// Sort algorithm: merge, insertion, quicksort, heapsort, std-stable or std-unstable.
    #[arg(long, default_value_t = Algorithm::MergeSort)]
    algorithm: Algorithm,

    /// Check the comparison function for order violations, always on in debug builds.
    #[arg(long)]
    verify: bool,

    /// Column width of the printed arrays.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
}

impl From<Cli> for HarnessConfig {
    fn from(cli: Cli) -> Self {
        HarnessConfig {
            size: cli.size,
            modulus: cli.modulus,
            seed: cli.seed,
            algorithm: cli.algorithm,
            verify: cli.verify,
            width: cli.width,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = HarnessConfig::from(Cli::parse());

    match harness::run(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
