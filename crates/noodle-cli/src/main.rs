mod cli;
mod cmd;
mod error;
mod format;
mod logging;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat};
use cmd::simulate::SimulateOptions;
use error::CliError;
use noodle_core::SimulationConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = dispatch(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Routes the parsed command line to its subcommand.
fn dispatch(cli: Cli) -> Result<(), CliError> {
    let colors = format::colors_enabled(cli.no_color);
    match cli.command {
        Command::Simulate {
            noodles,
            trials,
            seed,
            workers,
            histogram,
            per_trial,
            output,
        } => {
            let mut config = SimulationConfig::new(noodles, trials).with_workers(workers);
            config.seed = seed;
            let options = SimulateOptions {
                histogram,
                per_trial,
                output,
            };
            cmd::simulate::run(&config, &options, cli.format, colors)
        }
        Command::Sample { noodles, seed } => cmd::sample::run(noodles, seed, cli.format),
        Command::Theory { noodles } => cmd::theory::run(noodles, cli.format),
    }
}
