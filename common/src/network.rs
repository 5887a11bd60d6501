pub mod port;
pub mod range;
pub mod target;

pub use port::{PortProbeResult, ScanSummary};
pub use range::PortRange;
pub use target::ScanTarget;
