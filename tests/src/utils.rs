use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use portr_common::error::ScanError;
use portr_core::scanner::{Prober, Scanner};
use tokio::net::TcpListener;

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Reports exactly the configured ports as open and counts every call.
pub struct StubProber {
    open: BTreeSet<u16>,
    calls: AtomicUsize,
}

impl StubProber {
    pub fn open_on(ports: &[u16]) -> Arc<Self> {
        Arc::new(Self {
            open: ports.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn all_closed() -> Arc<Self> {
        Self::open_on(&[])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for StubProber {
    async fn probe(&self, _addr: IpAddr, port: u16) -> Result<bool, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(self.open.contains(&port))
    }
}

pub fn stub_scanner(prober: &Arc<StubProber>, concurrency: usize) -> Scanner {
    Scanner::new(prober.clone(), concurrency).expect("stub scanner concurrency must be non-zero")
}

/// Binds `count` listeners on ephemeral loopback ports.
pub async fn loopback_listeners(count: usize) -> anyhow::Result<Vec<TcpListener>> {
    let mut listeners: Vec<TcpListener> = Vec::with_capacity(count);
    for _ in 0..count {
        listeners.push(TcpListener::bind((LOCALHOST, 0)).await?);
    }
    Ok(listeners)
}

pub fn port_of(listener: &TcpListener) -> anyhow::Result<u16> {
    Ok(listener.local_addr()?.port())
}
