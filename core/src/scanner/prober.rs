use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use portr_common::error::ScanError;

use crate::network::tcp;
use crate::scanner::Prober;

/// Probes ports with a full TCP handshake, bounded by a timeout.
#[derive(Debug, Clone, Copy)]
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: IpAddr, port: u16) -> Result<bool, ScanError> {
        tcp::handshake_probe(addr, port, self.timeout)
            .await
            .map_err(|err| ScanError::ResourceExhausted {
                port,
                reason: err.to_string(),
            })
    }
}
