pub mod scan;

use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use portr_common::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_MS};
use portr_common::error::ScanError;
use portr_common::network::ScanTarget;

#[derive(Parser, Debug)]
#[command(name = "portr", version)]
#[command(about = "A TCP connect port scanner.")]
#[command(allow_negative_numbers = true)]
pub struct CommandLine {
    /// Hostname or IP address to scan
    pub host: String,

    /// First port of the range (inclusive)
    pub start_port: String,

    /// Last port of the range (inclusive)
    pub end_port: String,

    /// Extra positional arguments, accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Per-port connection timeout in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS, value_name = "MS")]
    pub timeout: u64,

    /// Number of ports probed at the same time
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY, value_name = "N")]
    pub concurrency: usize,

    /// Only print open ports and the final report
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What `main` should do after looking at the arguments.
pub enum Invocation {
    Run(CommandLine),
    /// Too few positional arguments.
    Usage,
    /// Anything else clap rejected, including `--help` and `--version`.
    Clap(clap::Error),
}

impl CommandLine {
    pub fn parse_args() -> Invocation {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cmd) => Invocation::Run(cmd),
            Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => Invocation::Usage,
            Err(e) => Invocation::Clap(e),
        }
    }

    /// Port bounds are validated here rather than by clap, so a bad value
    /// fails like every other scan error.
    pub fn target(&self) -> Result<ScanTarget, ScanError> {
        ScanTarget::parse(self.host.as_str(), &self.start_port, &self.end_port)
    }

    pub fn config(&self) -> Config {
        Config {
            timeout: Duration::from_millis(self.timeout),
            concurrency: self.concurrency,
            quiet: self.quiet,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
