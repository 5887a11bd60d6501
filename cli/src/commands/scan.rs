use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::*;
use portr_common::config::Config;
use portr_common::error::ScanError;
use portr_common::network::{PortProbeResult, ScanSummary, ScanTarget};
use portr_core::scanner::{PortScan, Scanner};
use tracing::warn;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

const DETAIL_KEY_WIDTH: usize = 11;

pub async fn scan(target: ScanTarget, cfg: &Config) -> anyhow::Result<()> {
    let ports = target.ports();
    let total_ports: usize = ports.len();
    let first_port: u16 = ports.start();

    let scanner: Scanner = Scanner::from_config(cfg)?.with_progress(move |port| {
        let scanned: usize = usize::from(port - first_port) + 1;
        spinner::report_scan_progress(port, scanned, total_ports);
    });

    let mut port_scan: PortScan = scanner.scan(&target).await?;

    print_details(&target, &port_scan, cfg);
    print::header("open ports", cfg.quiet);

    if !cfg.quiet {
        spinner::start();
    }
    let interrupt_handle = spawn_interrupt_listener(port_scan.running_flag());

    let drained: Result<(), ScanError> = print_open_ports(&mut port_scan).await;

    interrupt_handle.abort();
    spinner::finish();
    drained?;

    let summary: ScanSummary = port_scan.finish();
    print_report(&summary, total_ports);
    Ok(())
}

/// Clears `running` on Ctrl+C so no new probes are issued.
fn spawn_interrupt_listener(running: Arc<AtomicBool>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            running.store(false, Ordering::Relaxed);
            warn!("Interrupted, waiting for in-flight probes to finish...");
        }
    })
}

fn print_details(target: &ScanTarget, port_scan: &PortScan, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    print::header("scan details", cfg.quiet);
    print::aligned_line("Target", target.host(), DETAIL_KEY_WIDTH);
    print::aligned_line(
        "Address",
        port_scan.addr().to_string().color(colors::ACCENT),
        DETAIL_KEY_WIDTH,
    );
    print::aligned_line("Ports", target.ports().to_string(), DETAIL_KEY_WIDTH);
    print::aligned_line(
        "Timeout",
        format!("{} ms", cfg.timeout.as_millis()),
        DETAIL_KEY_WIDTH,
    );
    print::aligned_line("Concurrency", cfg.concurrency.to_string(), DETAIL_KEY_WIDTH);
}

async fn print_open_ports(port_scan: &mut PortScan) -> Result<(), ScanError> {
    while let Some(result) = port_scan.next().await? {
        print_open_port(&result);
    }
    Ok(())
}

fn print_open_port(result: &PortProbeResult) {
    print::print(&format::open_port_line(result));
}

fn print_report(summary: &ScanSummary, total_ports: usize) {
    mprint!();
    print::fat_separator();
    print::centerln(&format!("{}", "Scan Report".bold().green()));
    print::fat_separator();

    if summary.interrupted {
        print::print(&format!(
            "{}",
            format::interrupted_line(summary, total_ports).yellow()
        ));
    }
    print::print(&format::elapsed_line(summary));
    print::print(&format::open_count_line(summary));
}
