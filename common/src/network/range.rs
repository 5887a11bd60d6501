//! # Port Range Model
//!
//! An inclusive, ascending interval of TCP port numbers.
//!
//! A [`PortRange`] can only be built through [`PortRange::new`], which rejects
//! port `0` and reversed bounds, so every value in circulation is scannable.

use std::ops::RangeInclusive;

use crate::error::ScanError;

pub const MIN_PORT: u32 = 1;
pub const MAX_PORT: u32 = u16::MAX as u32;

/// Represents a continuous range of ports, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Validates the bounds and builds the range.
    ///
    /// Bounds are taken as `u32` so that values above `65535` coming from the
    /// command line are reported as [`ScanError::InvalidPort`] instead of
    /// being truncated.
    pub fn new(start: u32, end: u32) -> Result<Self, ScanError> {
        let start: u16 = to_port(start)?;
        let end: u16 = to_port(end)?;

        if start > end {
            return Err(ScanError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// Builds the range from bounds as typed by the user.
    ///
    /// Text that is not an unsigned number is a [`ScanError::MalformedPort`];
    /// numbers go through the same checks as [`PortRange::new`].
    pub fn parse(start: &str, end: &str) -> Result<Self, ScanError> {
        Self::new(parse_port(start)?, parse_port(end)?)
    }

    /// A range holding exactly one port.
    pub fn single(port: u32) -> Result<Self, ScanError> {
        Self::new(port, port)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports covered by the range.
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Always false; a validated range holds at least one port.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }

    /// Lazily yields every port in ascending order.
    ///
    /// Each call starts a fresh cursor at `start`.
    pub fn iter(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn parse_port(value: &str) -> Result<u32, ScanError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ScanError::MalformedPort {
            value: value.to_string(),
        })
}

fn to_port(value: u32) -> Result<u16, ScanError> {
    if !(MIN_PORT..=MAX_PORT).contains(&value) {
        return Err(ScanError::InvalidPort { port: value });
    }
    u16::try_from(value).map_err(|_| ScanError::InvalidPort { port: value })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
