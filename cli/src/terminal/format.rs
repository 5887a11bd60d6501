use portr_common::network::{PortProbeResult, ScanSummary};

pub const USAGE: &str = "\
Usage
=====
You will have to supply 3 things in this order:
portr [HOST] [START_PORT] [END_PORT]

Example:
=======
portr localhost 1 3500
";

/// One line per open port, e.g. `Open:\t22:SSH`.
pub fn open_port_line(result: &PortProbeResult) -> String {
    format!("Open:\t{}:{}", result.port, result.service())
}

pub fn elapsed_line(summary: &ScanSummary) -> String {
    format!("Scan completed in: {:.2} seconds", summary.elapsed_seconds())
}

pub fn open_count_line(summary: &ScanSummary) -> String {
    format!("Number of open ports: {}", summary.open_port_count)
}

pub fn interrupted_line(summary: &ScanSummary, total_ports: usize) -> String {
    format!(
        "Scan interrupted after {} of {} ports",
        summary.ports_scanned, total_ports
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
