mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Invocation, scan};
use portr_common::config::Config;
use portr_common::network::ScanTarget;
use terminal::{format, logging, print};
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let commands: CommandLine = match CommandLine::parse_args() {
        Invocation::Run(commands) => commands,
        Invocation::Usage => {
            print!("{}", format::USAGE);
            return ExitCode::FAILURE;
        }
        Invocation::Clap(err) => err.exit(),
    };

    logging::init(commands.verbose, commands.quiet);
    print::initialize();

    match run(commands).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(commands: CommandLine) -> anyhow::Result<()> {
    let cfg: Config = commands.config();
    cfg.validate()?;

    let target: ScanTarget = commands.target()?;
    if !commands.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", commands.ignored);
    }

    print::banner(cfg.quiet);
    print::header("starting scanner", cfg.quiet);
    scan::scan(target, &cfg).await
}
