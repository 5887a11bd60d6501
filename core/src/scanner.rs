//! The central **abstraction** for port scanning operations.
//!
//! A scan is split in two roles:
//! * a [`Prober`], which decides whether one `address:port` pair accepts
//!   connections, and
//! * the [`Scanner`], which resolves the target, walks the port range and
//!   drives the prober for every port, handing results out as a [`PortScan`].
//!
//! **Architectural Note:**
//! The scanner only ever talks to `dyn Prober`. The TCP implementation lives in
//! [`TcpProber`]; tests plug in their own probers to script which ports are open.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use portr_common::config::{self, Config};
use portr_common::error::ScanError;
use portr_common::network::ScanTarget;
use tracing::info;

mod port_scan;
mod prober;
pub mod resolver;

pub use port_scan::PortScan;
pub use prober::TcpProber;

/// Called with every port once its probe has completed, open or not.
pub type ProgressCallback = Arc<dyn Fn(u16) + Send + Sync>;

/// Defines the strategy for deciding whether a single port is open.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns `true` when `addr:port` accepts a connection.
    ///
    /// Implementations must never fail for an ordinary closed port; that is
    /// what `false` is for. An error means no further probe can be trusted
    /// and ends the scan.
    async fn probe(&self, addr: IpAddr, port: u16) -> Result<bool, ScanError>;
}

/// Drives a [`Prober`] over the ports of a [`ScanTarget`].
pub struct Scanner {
    prober: Arc<dyn Prober>,
    concurrency: usize,
    on_progress: Option<ProgressCallback>,
}

impl Scanner {
    pub fn new(prober: Arc<dyn Prober>, concurrency: usize) -> Result<Self, ScanError> {
        Ok(Self {
            prober,
            concurrency: config::check_concurrency(concurrency)?,
            on_progress: None,
        })
    }

    /// Builds a scanner probing with real TCP connections.
    pub fn from_config(cfg: &Config) -> Result<Self, ScanError> {
        cfg.validate()?;
        let prober: Arc<dyn Prober> = Arc::new(TcpProber::new(cfg.timeout));
        Self::new(prober, cfg.concurrency)
    }

    pub fn with_progress<F>(mut self, on_progress: F) -> Self
    where
        F: Fn(u16) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(on_progress));
        self
    }

    /// Starts a scan of `target`.
    ///
    /// The host is resolved first; if that fails no port is ever probed.
    /// Probing itself is lazy and only advances while the returned
    /// [`PortScan`] is being polled.
    pub async fn scan(&self, target: &ScanTarget) -> Result<PortScan, ScanError> {
        let addr: IpAddr = resolver::resolve(target).await?;

        info!(
            "Scanning {} ports on {} ({addr}), {} at a time",
            target.ports().len(),
            target.host(),
            self.concurrency
        );

        Ok(PortScan::start(
            addr,
            target.ports(),
            Arc::clone(&self.prober),
            self.concurrency,
            self.on_progress.clone(),
        ))
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
