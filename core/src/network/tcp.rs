use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

const ENFILE: i32 = 23;
const EMFILE: i32 = 24;

/// Attempts a full TCP handshake with `addr:port`.
///
/// Returns `Ok(true)` only when the connection is established within
/// `probe_timeout`. The stream is dropped before returning, so the socket is
/// closed right away. Refusals, timeouts and other I/O failures count as a
/// closed port.
///
/// Running out of file descriptors says nothing about the port, so it is the
/// one failure handed back as an error.
pub async fn handshake_probe(addr: IpAddr, port: u16, probe_timeout: Duration) -> io::Result<bool> {
    let socket_addr: SocketAddr = SocketAddr::new(addr, port);

    match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            trace!("{socket_addr} accepted the connection");
            Ok(true)
        }
        Ok(Err(err)) if is_descriptor_exhaustion(&err) => Err(err),
        Ok(Err(err)) => {
            log_connect_error(&socket_addr, &err);
            Ok(false)
        }
        Err(_elapsed) => {
            trace!("{socket_addr} timed out after {probe_timeout:?}");
            Ok(false)
        }
    }
}

/// `EMFILE` / `ENFILE`: the process or the system hit its open file limit.
pub fn is_descriptor_exhaustion(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(EMFILE | ENFILE))
}

fn log_connect_error(socket_addr: &SocketAddr, err: &io::Error) {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => trace!("{socket_addr} refused the connection"),
        // Not a verdict from the remote side (no route, reset, ...)
        _ => debug!("{socket_addr} could not be probed: {err}"),
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
