#![cfg(test)]
use std::time::Duration;

use portr_common::config::Config;
use portr_common::network::ScanTarget;
use portr_core::scanner::{Prober, Scanner, TcpProber};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

use crate::utils::{LOCALHOST, loopback_listeners, port_of};

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

fn tcp_scanner(concurrency: usize) -> Scanner {
    let cfg: Config = Config {
        timeout: PROBE_TIMEOUT,
        concurrency,
        quiet: true,
    };
    Scanner::from_config(&cfg).unwrap()
}

#[tokio::test]
async fn tcp_prober_sees_listening_ports() {
    let listeners: Vec<TcpListener> = loopback_listeners(3).await.unwrap();
    let prober = TcpProber::new(PROBE_TIMEOUT);

    for listener in &listeners {
        let port: u16 = port_of(listener).unwrap();
        assert!(prober.probe(LOCALHOST, port).await.unwrap(), "Port {port} should be open");
    }
}

#[tokio::test]
async fn scan_reports_real_listener() {
    let listener: TcpListener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port: u16 = port_of(&listener).unwrap();
    let target: ScanTarget = ScanTarget::new("127.0.0.1", u32::from(port), u32::from(port)).unwrap();

    let (results, summary) = tcp_scanner(4).scan(&target).await.unwrap().collect().await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].port, port);
    assert!(results[0].is_open);
    assert_eq!(summary.open_port_count, 1);
}

#[tokio::test]
async fn scan_reports_closed_port_as_absent() {
    let listener: TcpListener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port: u16 = port_of(&listener).unwrap();
    drop(listener);
    let target: ScanTarget = ScanTarget::new("localhost", u32::from(port), u32::from(port)).unwrap();

    let (results, summary) = tcp_scanner(4).scan(&target).await.unwrap().collect().await.unwrap();

    assert!(results.is_empty(), "Closed port reported open: {results:?}");
    assert_eq!(summary.open_port_count, 0);
    assert_eq!(summary.ports_scanned, 1);
}

#[tokio::test]
async fn scan_finds_listener_inside_a_range() {
    let listener: TcpListener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port: u16 = port_of(&listener).unwrap();
    let start: u32 = u32::from(port.saturating_sub(5)).max(1);
    let end: u32 = u32::from(port.saturating_add(5));
    let target: ScanTarget = ScanTarget::new("127.0.0.1", start, end).unwrap();

    let (results, summary) = tcp_scanner(16).scan(&target).await.unwrap().collect().await.unwrap();

    assert!(results.iter().any(|r| r.port == port), "Listener on {port} not found");
    assert!(results.windows(2).all(|w| w[0].port < w[1].port));
    assert_eq!(summary.ports_scanned, target.ports().len());
}

#[tokio::test]
async fn probes_do_not_leak_connections() {
    let listener: TcpListener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port: u16 = port_of(&listener).unwrap();
    let prober = TcpProber::new(PROBE_TIMEOUT);

    for _ in 0..50 {
        assert!(prober.probe(LOCALHOST, port).await.unwrap());
    }

    // Accepted connections must already be closed by the prober
    let (mut stream, _) = listener.accept().await.unwrap();
    let mut buf = [0u8; 1];
    let read: usize = tokio::time::timeout(Duration::from_secs(1), stream.read(&mut buf))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read, 0, "Expected EOF from a closed probe connection");
}
