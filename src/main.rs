//! ghpages CLI
//!
//! Usage: ghpages [OPTIONS]
//!
//! Every option can also be set through its `PLUGIN_*` environment
//! variable; build metadata comes from `DRONE_*` variables.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use ghpages::infrastructure::{CardWriter, HttpFetcher, LocalFs, SystemRunner};
use ghpages::presentation::{logging, Cli};
use ghpages::{PublishRun, RunSummary};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.log_level()) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let publish = PublishRun::new(
        SystemRunner::new(),
        LocalFs::new(),
        HttpFetcher::new(),
        CardWriter::new(cli.card_target()),
    );

    Ok(publish.execute(&cli.raw_args(), &cli.run_options())?)
}
