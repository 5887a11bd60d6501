//! Shared models for `portr`: scan targets, port ranges, probe results,
//! the service table, configuration and the error taxonomy.

pub mod config;
pub mod error;
pub mod network;
pub mod services;
