//! Myrmex CLI - Command-line interface for ant foraging simulations.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "myrmex")]
#[command(author, version, about = "Myrmex - Pheromone trail foraging simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default myrmex.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run a headless simulation
    Run {
        /// Number of ticks to run (default: from myrmex.toml)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Master random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Place a food source at x,y (repeatable)
        #[arg(long, value_name = "X,Y")]
        food: Vec<String>,

        /// Place an obstacle with its corner at x,y (repeatable)
        #[arg(long, value_name = "X,Y")]
        obstacle: Vec<String>,

        /// Write a JSON snapshot of the final state
        #[arg(long, value_name = "FILE")]
        snapshot: Option<String>,

        /// Include the trail grids in the snapshot
        #[arg(long)]
        trails: bool,

        /// Step foragers in parallel
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run {
            ticks,
            seed,
            food,
            obstacle,
            snapshot,
            trails,
            parallel,
        } => commands::run::run(commands::run::RunArgs {
            ticks,
            seed,
            food,
            obstacles: obstacle,
            snapshot,
            trails,
            parallel,
            verbose: cli.verbose,
        }),
    }
}
