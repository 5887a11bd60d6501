use thiserror::Error;

/// Everything that can abort a scan before or instead of probing.
///
/// A port refusing a connection is not represented here; the prober reports
/// that as a closed port. Argument-count problems never reach the library and
/// are handled by the command line parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("could not resolve host '{host}': {reason}")]
    Resolution { host: String, reason: String },

    #[error("start port {start} is greater than end port {end}")]
    InvalidRange { start: u16, end: u16 },

    #[error("port {port} is outside of 1-65535")]
    InvalidPort { port: u32 },

    #[error("'{value}' is not a port number")]
    MalformedPort { value: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The process ran out of sockets, so probe results can no longer be
    /// trusted.
    #[error("ran out of file descriptors at port {port} ({reason}), lower the concurrency")]
    ResourceExhausted { port: u16, reason: String },
}

impl ScanError {
    pub fn resolution(host: &str, reason: impl std::fmt::Display) -> Self {
        Self::Resolution {
            host: host.to_string(),
            reason: reason.to_string(),
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
