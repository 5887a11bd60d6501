//! # Scan Target Model
//!
//! Defines the input of a single scan: the host to probe and the ports to
//! probe on it.
//!
//! The host is kept as written by the user. It can be:
//! * A literal IPv4 address (e.g. `192.168.1.5`).
//! * A literal IPv6 address (e.g. `::1`).
//! * A hostname, resolved by the scanner right before probing starts.

use std::net::IpAddr;

use crate::error::ScanError;
use crate::network::range::PortRange;

/// An immutable host/port-range pair consumed by the scan coordinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanTarget {
    host: String,
    ports: PortRange,
}

impl ScanTarget {
    /// Builds a target from raw user input.
    ///
    /// Fails with [`ScanError::InvalidPort`] or [`ScanError::InvalidRange`]
    /// before anything touches the network.
    pub fn new(host: impl Into<String>, start_port: u32, end_port: u32) -> Result<Self, ScanError> {
        let ports: PortRange = PortRange::new(start_port, end_port)?;
        Self::with_range(host, ports)
    }

    /// Same as [`ScanTarget::new`], for ports still in textual form.
    pub fn parse(host: impl Into<String>, start_port: &str, end_port: &str) -> Result<Self, ScanError> {
        let ports: PortRange = PortRange::parse(start_port, end_port)?;
        Self::with_range(host, ports)
    }

    pub fn with_range(host: impl Into<String>, ports: PortRange) -> Result<Self, ScanError> {
        let host: String = host.into().trim().to_string();
        if host.is_empty() {
            return Err(ScanError::resolution("", "host cannot be empty"));
        }
        Ok(Self { host, ports })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn ports(&self) -> PortRange {
        self.ports
    }

    /// Returns the address directly when the host is an IP literal.
    ///
    /// Accepts bracketed IPv6 (`[::1]`) as well.
    pub fn literal_addr(&self) -> Option<IpAddr> {
        let host: &str = self
            .host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host);
        host.parse::<IpAddr>().ok()
    }
}

impl std::fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.host, self.ports)
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
