use std::time::Duration;

use crate::error::ScanError;

pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);
pub const DEFAULT_CONCURRENCY: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound for a single connection attempt.
    ///
    /// Without it a filtered port stalls the scan for the OS connect timeout.
    pub timeout: Duration,
    /// Maximum number of connection attempts in flight at once.
    ///
    /// `1` probes strictly one port after the other.
    pub concurrency: usize,
    /// Hides banner, headers and the spinner. Results are still printed.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            quiet: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.timeout.is_zero() {
            return Err(ScanError::InvalidConfig {
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        check_concurrency(self.concurrency)?;
        Ok(())
    }
}

/// Rejects a concurrency of zero, which would never start a probe.
pub fn check_concurrency(concurrency: usize) -> Result<usize, ScanError> {
    if concurrency == 0 {
        return Err(ScanError::InvalidConfig {
            reason: "concurrency must be at least 1".to_string(),
        });
    }
    Ok(concurrency)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
