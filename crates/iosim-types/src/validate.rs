//! Argument validators shared by the command handlers and the config loader.

use std::sync::LazyLock;

use regex::Regex;

static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").expect("static hostname regex")
});

/// Letters, digits and inner hyphens, 1 to 63 characters.
pub fn is_valid_hostname(name: &str) -> bool {
    HOSTNAME_RE.is_match(name)
}

/// Four dot-separated decimal octets, each 0-255.
pub fn is_valid_ipv4(addr: &str) -> bool {
    let parts: Vec<&str> = addr.split('.').collect();
    parts.len() == 4
        && parts.iter().all(|p| {
            !p.is_empty()
                && p.len() <= 3
                && p.bytes().all(|b| b.is_ascii_digit())
                && p.parse::<u16>().is_ok_and(|n| n <= 255)
        })
}
