//! Well-known TCP port to service name mapping.

pub const UNKNOWN_SERVICE: &str = "Unknown service";

/// Sorted by port so lookups can binary search.
const COMMON_PORT_NAMES: &[(u16, &str)] = &[
    (21, "FTP"),
    (22, "SSH"),
    (23, "TELNET"),
    (25, "SMTP"),
    (53, "DNS"),
    (69, "TFTP"),
    (80, "HTTP"),
    (109, "POP2"),
    (110, "POP3"),
    (123, "NTP"),
    (137, "NETBIOS-NS"),
    (138, "NETBIOS-DGM"),
    (139, "NETBIOS-SSN"),
    (143, "IMAP"),
    (156, "SQL-SERVER"),
    (389, "LDAP"),
    (443, "HTTPS"),
    (546, "DHCP-CLIENT"),
    (547, "DHCP-SERVER"),
    (631, "CUPS-SERVER"),
    (993, "IMAP-SSL"),
    (995, "POP3-SSL"),
    (2082, "CPANEL"),
    (2083, "CPANEL"),
    (2086, "WHM/CPANEL"),
    (2087, "WHM/CPANEL"),
    (3306, "MYSQL"),
    (5432, "POSTGRESQL"),
    (8443, "PLESK"),
    (10000, "VIRTUALMIN/WEBMIN"),
];

/// Returns the service conventionally bound to `port`, if it is a known one.
pub fn lookup(port: u16) -> Option<&'static str> {
    COMMON_PORT_NAMES
        .binary_search_by_key(&port, |(p, _)| *p)
        .ok()
        .map(|idx| COMMON_PORT_NAMES[idx].1)
}

/// Like [`lookup`], falling back to [`UNKNOWN_SERVICE`].
pub fn service_name(port: u16) -> &'static str {
    lookup(port).unwrap_or(UNKNOWN_SERVICE)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
