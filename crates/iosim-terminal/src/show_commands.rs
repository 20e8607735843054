//! Read-only `show` renderers.
//!
//! Interfaces come out of the running configuration already sorted by type
//! weight, slot and port, so every listing here shares that order.

use iosim_types::device::{InterfaceRecord, LinkStatus};
use iosim_types::interface::InterfaceName;

use crate::session::Session;

/// `show version`.
pub fn version(session: &Session) -> String {
    let secs = session.uptime().as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    let mut out = Vec::new();
    out.push("iosim IOS-style CLI simulator".to_string());
    out.push(format!("Version: {}", session.settings().software_version));
    out.push(format!("Hostname: {}", session.config().hostname()));
    out.push(format!("Uptime: {h:02}h {m:02}m {s:02}s"));
    out.push(format!("Interfaces: {}", session.config().interface_count()));
    out.join("\n")
}

/// `show running-config`.
pub fn running_config(session: &Session) -> String {
    let config = session.config();
    let mut out = vec![
        "Building configuration...".to_string(),
        "!".to_string(),
        format!("version {}", session.settings().software_version),
        "!".to_string(),
        format!("hostname {}", config.hostname()),
        "!".to_string(),
    ];
    for (name, record) in config.interfaces() {
        out.push(format!("interface {name}"));
        if let (Some(ip), Some(mask)) = (record.ip_address(), record.subnet_mask()) {
            out.push(format!(" ip address {ip} {mask}"));
        }
        if record.status() == LinkStatus::AdministrativelyDown {
            out.push(" shutdown".to_string());
        }
        out.push("!".to_string());
    }
    out.push("!".to_string());
    out.push("end".to_string());
    out.join("\n")
}

/// `show ip interface brief`.
pub fn ip_interface_brief(session: &Session) -> String {
    let mut out = vec![brief_row(
        "Interface",
        "IP-Address",
        "OK?",
        "Method",
        "Status",
        "Protocol",
    )];
    out.extend(
        session
            .config()
            .interfaces()
            .map(|(name, record)| brief_line(name, record)),
    );
    out.join("\n")
}

fn brief_line(name: &InterfaceName, record: &InterfaceRecord) -> String {
    let (ip, ok, method) = match record.ip_address() {
        Some(ip) => (ip, "YES", "manual"),
        None => ("unassigned", "NO", "unset"),
    };
    // Protocol mirrors the link status, admin-down included.
    let status = record.status().to_string();
    brief_row(&name.to_string(), ip, ok, method, &status, &status)
}

fn brief_row(
    interface: &str,
    ip: &str,
    ok: &str,
    method: &str,
    status: &str,
    protocol: &str,
) -> String {
    format!("{interface:<26} {ip:<15} {ok:<3} {method:<6} {status:<21} {protocol}")
}

/// `show history`, numbered from 1.
pub fn history(session: &Session) -> String {
    let mut out = vec!["Command History:".to_string()];
    out.extend(
        session
            .history()
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!(" {}: {cmd}", i + 1)),
    );
    out.join("\n")
}
