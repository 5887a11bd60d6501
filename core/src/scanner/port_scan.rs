use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use futures::future;
use futures::stream::{BoxStream, StreamExt};
use portr_common::error::ScanError;
use portr_common::network::{PortProbeResult, PortRange, ScanSummary};
use tracing::{debug, info};

use crate::scanner::{ProgressCallback, Prober};

/// A running scan.
///
/// Ports are handed to the prober in ascending order, with up to
/// `concurrency` probes in flight. Results come back in ascending port order
/// no matter which probe finishes first, and each one is available as soon as
/// every lower port has been settled.
///
/// The open-port count is kept by this struct alone, as the single consumer of
/// the result stream.
///
/// A prober error stops the scan: the error is returned by [`PortScan::next`]
/// and no new ports are handed out.
pub struct PortScan {
    addr: IpAddr,
    results: BoxStream<'static, Result<PortProbeResult, ScanError>>,
    running: Arc<AtomicBool>,
    started: Instant,
    total_ports: usize,
    ports_scanned: usize,
    open_port_count: usize,
}

impl PortScan {
    pub(crate) fn start(
        addr: IpAddr,
        ports: PortRange,
        prober: Arc<dyn Prober>,
        concurrency: usize,
        on_progress: Option<ProgressCallback>,
    ) -> Self {
        let running: Arc<AtomicBool> = Arc::new(AtomicBool::new(true));
        let keep_going = Arc::clone(&running);

        let results = futures::stream::iter(ports.iter())
            .take_while(move |_| future::ready(keep_going.load(Ordering::Relaxed)))
            .map(move |port| {
                let prober = Arc::clone(&prober);
                async move {
                    let is_open: bool = prober.probe(addr, port).await?;
                    Ok::<PortProbeResult, ScanError>(PortProbeResult::from_probe(port, is_open))
                }
            })
            .buffered(concurrency)
            .inspect(move |outcome| {
                if let (Ok(result), Some(callback)) = (outcome, &on_progress) {
                    callback(result.port);
                }
            })
            .boxed();

        Self {
            addr,
            results,
            running,
            started: Instant::now(),
            total_ports: ports.len(),
            ports_scanned: 0,
            open_port_count: 0,
        }
    }

    /// Waits for the next open port.
    ///
    /// Closed ports are counted and skipped. Returns `None` once the range is
    /// exhausted, or once the scan was stopped and the in-flight probes drained.
    pub async fn next(&mut self) -> Result<Option<PortProbeResult>, ScanError> {
        while let Some(outcome) = self.results.next().await {
            let result: PortProbeResult = match outcome {
                Ok(result) => result,
                Err(err) => {
                    self.stop();
                    return Err(err);
                }
            };

            self.ports_scanned += 1;
            if result.is_open {
                self.open_port_count += 1;
                debug!("{}:{} is open", self.addr, result.port);
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Stops handing out new ports. Probes already in flight still complete
    /// and are still reported by [`PortScan::next`].
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Shared flag behind [`PortScan::stop`], for signal handlers and the like.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Consumes the scan and produces its summary.
    ///
    /// Ports that were never probed mark the summary as interrupted.
    pub fn finish(self) -> ScanSummary {
        let summary = ScanSummary {
            open_port_count: self.open_port_count,
            ports_scanned: self.ports_scanned,
            elapsed: self.started.elapsed(),
            interrupted: self.ports_scanned < self.total_ports,
        };

        info!(
            "Scan of {} finished: {}/{} ports probed, {} open",
            self.addr, summary.ports_scanned, self.total_ports, summary.open_port_count
        );
        summary
    }

    /// Drains the scan, returning every open port alongside the summary.
    pub async fn collect(mut self) -> Result<(Vec<PortProbeResult>, ScanSummary), ScanError> {
        let mut open: Vec<PortProbeResult> = Vec::new();
        while let Some(result) = self.next().await? {
            open.push(result);
        }
        Ok((open, self.finish()))
    }
}
