//! Monty Hall Simulation Binary
//!
//! Runs paired stay/switch trials and reports win rates per strategy.
//!
//! ## Usage
//! ```bash
//! cargo run --bin monty --release -- --cases 3 --trials 10000 --quiet
//! ```

use anyhow::Result;
use clap::Parser;

use monty_simulation::session::{self, SessionConfig};

/// Simulate the Monty Hall problem
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cases offered to the contestant
    #[arg(long, default_value_t = 26, value_name = "int")]
    cases: usize,

    /// Number of trial pairs (one stay plus one switch) to perform
    #[arg(long, default_value_t = 100, value_name = "int")]
    trials: usize,

    /// Display the results of each trial (on by default)
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress per-trial narration
    #[arg(long)]
    quiet: bool,

    /// Randomness seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SessionConfig {
        cases: args.cases,
        trials: args.trials,
        verbose: args.verbose || !args.quiet,
        seed: args.seed,
    };
    config.validate()?;

    log::info!(
        "running {} trial pairs over {} cases (seed: {:?})",
        config.trials,
        config.cases,
        config.seed
    );

    let result = session::run(&config)?;
    result.print_summary();

    Ok(())
}
