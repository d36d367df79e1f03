//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI commands.
///
/// `Human` emits plain text to stdout. `Json` emits a single structured JSON
/// object per command.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `noodle` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate the expected number of loops by Monte Carlo simulation.
    Simulate {
        /// Number of noodles in the bowl.
        #[arg(long, short = 'n', env = "NOODLE_NOODLES", default_value = "100")]
        noodles: usize,
        /// Number of independent trials.
        #[arg(long, short = 't', env = "NOODLE_TRIALS", default_value = "1000000")]
        trials: usize,
        /// Seed for reproducible runs (default: OS entropy).
        #[arg(long, env = "NOODLE_SEED")]
        seed: Option<u64>,
        /// Number of parallel workers, each with its own random source.
        #[arg(long, short = 'w', env = "NOODLE_WORKERS", default_value = "1")]
        workers: usize,
        /// Print the loop-count distribution as a bar chart.
        #[arg(long)]
        histogram: bool,
        /// Include every per-trial loop count in JSON output.
        #[arg(long)]
        per_trial: bool,
        /// Write the loop-count frequency table as JSON to this file.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Draw a single random pairing and print its adjacency matrix.
    Sample {
        /// Number of noodles in the bowl.
        #[arg(long, short = 'n', env = "NOODLE_NOODLES", default_value = "8")]
        noodles: usize,
        /// Seed for a reproducible draw (default: OS entropy).
        #[arg(long, env = "NOODLE_SEED")]
        seed: Option<u64>,
    },

    /// Print the exact expected number of loops.
    Theory {
        /// Number of noodles in the bowl.
        #[arg(long, short = 'n', env = "NOODLE_NOODLES", default_value = "100")]
        noodles: usize,
    },
}

/// Root CLI struct for the `noodle` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "noodle",
    version,
    about = "Random noodle pairing loop simulator",
    long_about = "Ties the 2N ends of N noodles together uniformly at random and\n\
                  counts the closed loops, estimating the expected loop count\n\
                  and its distribution by Monte Carlo simulation."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log run parameters and timing to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
