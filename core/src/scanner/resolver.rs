use std::net::{IpAddr, SocketAddr};

use portr_common::error::ScanError;
use portr_common::network::ScanTarget;
use tokio::net::lookup_host;
use tracing::debug;

/// Turns the target's host into the single address every probe will use.
///
/// IP literals are returned as-is. Hostnames go through the system resolver
/// and the first IPv4 address wins, falling back to the first IPv6 one.
pub async fn resolve(target: &ScanTarget) -> Result<IpAddr, ScanError> {
    if let Some(addr) = target.literal_addr() {
        return Ok(addr);
    }

    let host: &str = target.host();
    let addrs: Vec<SocketAddr> = lookup_host((host, 0))
        .await
        .map_err(|e| ScanError::resolution(host, e))?
        .collect();

    let addr: IpAddr = pick_address(&addrs)
        .ok_or_else(|| ScanError::resolution(host, "no addresses returned"))?;

    debug!("{host} resolved to {addr} ({} candidates)", addrs.len());
    Ok(addr)
}

fn pick_address(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
