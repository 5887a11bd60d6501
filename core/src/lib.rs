//! Scanning engine of `portr`.
//!
//! * [`scanner`]: resolves a target and coordinates probes over its port range.
//! * [`network`]: the low-level TCP connect probe.

pub mod network;
pub mod scanner;
