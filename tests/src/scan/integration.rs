#![cfg(test)]
use std::collections::BTreeSet;

use portr_common::error::ScanError;
use portr_common::network::{PortProbeResult, ScanSummary, ScanTarget};
use portr_core::scanner::PortScan;

use crate::utils::{StubProber, stub_scanner};

/// Scanning `localhost:1-100` with only port 80 open reports exactly that port.
#[tokio::test]
async fn scan_localhost_single_open_port() {
    let prober = StubProber::open_on(&[80]);
    let target: ScanTarget = ScanTarget::new("localhost", 1, 100).unwrap();

    let port_scan: PortScan = stub_scanner(&prober, 16).scan(&target).await.unwrap();
    let (results, summary) = port_scan.collect().await.unwrap();

    assert_eq!(
        results,
        vec![PortProbeResult {
            port: 80,
            is_open: true,
            service_name: Some("HTTP"),
        }]
    );
    assert_eq!(summary.open_port_count, 1);
    assert_eq!(summary.ports_scanned, 100);
    assert!(!summary.interrupted);
    assert_eq!(prober.calls(), 100);
}

#[tokio::test]
async fn scan_localhost_all_closed() {
    let prober = StubProber::all_closed();
    let target: ScanTarget = ScanTarget::new("localhost", 1, 10).unwrap();

    let (results, summary) = stub_scanner(&prober, 4)
        .scan(&target)
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert!(results.is_empty(), "Expected no open ports: {results:?}");
    assert_eq!(summary.open_port_count, 0);
    assert_eq!(summary.ports_scanned, 10);
}

#[tokio::test]
async fn unresolvable_host_never_probes() {
    let prober = StubProber::open_on(&[80]);
    let target: ScanTarget = ScanTarget::new("no-such-host.invalid", 1, 100).unwrap();

    let result = stub_scanner(&prober, 16).scan(&target).await;

    assert!(
        matches!(result, Err(ScanError::Resolution { .. })),
        "Expected a resolution error"
    );
    assert_eq!(prober.calls(), 0, "Prober must not run before resolution");
}

#[test]
fn reversed_range_is_rejected_before_scanning() {
    assert_eq!(
        ScanTarget::new("localhost", 100, 1).unwrap_err(),
        ScanError::InvalidRange { start: 100, end: 1 }
    );
}

#[tokio::test]
async fn open_count_matches_emitted_results() {
    let open: [u16; 7] = [1, 21, 22, 443, 3306, 5000, 8443];
    let prober = StubProber::open_on(&open);
    let target: ScanTarget = ScanTarget::new("127.0.0.1", 20, 5_000).unwrap();

    let (results, summary) = stub_scanner(&prober, 32)
        .scan(&target)
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    let expected: Vec<u16> = open
        .iter()
        .copied()
        .filter(|port| target.ports().contains(*port))
        .collect();
    let found: Vec<u16> = results.iter().map(|r| r.port).collect();

    assert_eq!(found, expected);
    assert_eq!(summary.open_port_count, results.len());
    assert_eq!(
        results.iter().map(PortProbeResult::service).collect::<Vec<_>>(),
        vec!["FTP", "SSH", "HTTPS", "MYSQL", "Unknown service"]
    );
}

#[tokio::test]
async fn rescanning_is_idempotent() {
    let prober = StubProber::open_on(&[25, 53, 110]);
    let scanner = stub_scanner(&prober, 8);
    let target: ScanTarget = ScanTarget::new("127.0.0.1", 1, 200).unwrap();

    let (first, _) = scanner.scan(&target).await.unwrap().collect().await.unwrap();
    let (second, _) = scanner.scan(&target).await.unwrap().collect().await.unwrap();

    let first: BTreeSet<u16> = first.iter().map(|r| r.port).collect();
    let second: BTreeSet<u16> = second.iter().map(|r| r.port).collect();
    assert_eq!(first, second);
    assert_eq!(prober.calls(), 400, "Every scan must probe every port again");
}

#[tokio::test]
async fn sequential_and_concurrent_scans_agree() {
    let open: [u16; 4] = [7, 8, 64, 65];
    let target: ScanTarget = ScanTarget::new("127.0.0.1", 1, 128).unwrap();

    let (sequential, _) = stub_scanner(&StubProber::open_on(&open), 1)
        .scan(&target)
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    let (concurrent, _) = stub_scanner(&StubProber::open_on(&open), 64)
        .scan(&target)
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn single_port_range_yields_at_most_one_result() {
    let target: ScanTarget = ScanTarget::new("127.0.0.1", 22, 22).unwrap();

    let (open, summary) = stub_scanner(&StubProber::open_on(&[22]), 8)
        .scan(&target)
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(summary.ports_scanned, 1);

    let (closed, summary): (Vec<PortProbeResult>, ScanSummary) =
        stub_scanner(&StubProber::all_closed(), 8)
            .scan(&target)
            .await
            .unwrap()
            .collect()
            .await
            .unwrap();
    assert!(closed.is_empty());
    assert_eq!(summary.open_port_count, 0);
}

#[tokio::test]
async fn stopping_keeps_summary_consistent() {
    let prober = StubProber::open_on(&(1..=1_000).collect::<Vec<u16>>());
    let target: ScanTarget = ScanTarget::new("127.0.0.1", 1, 1_000).unwrap();
    let mut port_scan: PortScan = stub_scanner(&prober, 8).scan(&target).await.unwrap();

    let mut seen: usize = 0;
    while let Some(_result) = port_scan.next().await.unwrap() {
        seen += 1;
        if seen == 10 {
            port_scan.running_flag().store(false, std::sync::atomic::Ordering::Relaxed);
        }
    }

    let summary: ScanSummary = port_scan.finish();
    assert!(summary.interrupted);
    assert_eq!(summary.open_port_count, seen);
    assert_eq!(summary.ports_scanned, seen);
    assert!(seen < 1_000);
    assert_eq!(prober.calls(), seen, "Every issued probe must be accounted for");
}
