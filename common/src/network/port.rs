use std::time::Duration;

use crate::services;

/// Outcome of probing a single port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortProbeResult {
    pub port: u16,
    pub is_open: bool,
    /// Only set for open ports.
    pub service_name: Option<&'static str>,
}

impl PortProbeResult {
    pub fn open(port: u16) -> Self {
        Self {
            port,
            is_open: true,
            service_name: Some(services::service_name(port)),
        }
    }

    pub fn closed(port: u16) -> Self {
        Self {
            port,
            is_open: false,
            service_name: None,
        }
    }

    pub fn from_probe(port: u16, is_open: bool) -> Self {
        if is_open {
            Self::open(port)
        } else {
            Self::closed(port)
        }
    }

    pub fn service(&self) -> &'static str {
        self.service_name.unwrap_or(services::UNKNOWN_SERVICE)
    }
}

/// Totals of a finished (or interrupted) scan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScanSummary {
    pub open_port_count: usize,
    pub ports_scanned: usize,
    pub elapsed: Duration,
    /// Set when the scan was stopped before every port was probed.
    pub interrupted: bool,
}

impl ScanSummary {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
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
