//! The device's running configuration: hostname plus interface records.
//!
//! Pure data with mutation helpers. Interface status is derived from the
//! administrative state and the address, so the invariant
//! `admin down => administratively down`, `admin up => up iff addressed`
//! cannot be broken by a handler.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, SimError};
use crate::interface::InterfaceName;
use crate::validate::{is_valid_hostname, is_valid_ipv4};

/// Hostname a fresh device boots with.
pub const DEFAULT_HOSTNAME: &str = "Router";

/// Operator-controlled state (`shutdown` / `no shutdown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminStatus {
    Up,
    #[default]
    Down,
}

/// Operational state reported by `show ip interface brief`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Up,
    Down,
    AdministrativelyDown,
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkStatus::Up => "up",
            LinkStatus::Down => "down",
            LinkStatus::AdministrativelyDown => "administratively down",
        };
        f.write_str(s)
    }
}

/// Per-interface configuration. New interfaces start shut down with no address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceRecord {
    ip_address: Option<String>,
    subnet_mask: Option<String>,
    admin_status: AdminStatus,
}

impl InterfaceRecord {
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn subnet_mask(&self) -> Option<&str> {
        self.subnet_mask.as_deref()
    }

    pub fn admin_status(&self) -> AdminStatus {
        self.admin_status
    }

    pub fn status(&self) -> LinkStatus {
        match (self.admin_status, &self.ip_address) {
            (AdminStatus::Down, _) => LinkStatus::AdministrativelyDown,
            (AdminStatus::Up, Some(_)) => LinkStatus::Up,
            (AdminStatus::Up, None) => LinkStatus::Down,
        }
    }

    /// Assign an address and mask. Both are validated before either is stored.
    pub fn set_address(&mut self, ip: &str, mask: &str) -> Result<()> {
        if !is_valid_ipv4(ip) {
            return Err(SimError::invalid("IP address", ip));
        }
        if !is_valid_ipv4(mask) {
            return Err(SimError::invalid("subnet mask", mask));
        }
        self.ip_address = Some(ip.to_string());
        self.subnet_mask = Some(mask.to_string());
        Ok(())
    }

    pub fn clear_address(&mut self) {
        self.ip_address = None;
        self.subnet_mask = None;
    }

    pub fn shutdown(&mut self) {
        self.admin_status = AdminStatus::Down;
    }

    pub fn no_shutdown(&mut self) {
        self.admin_status = AdminStatus::Up;
    }
}

/// Hostname and interfaces of one simulated device.
#[derive(Debug, Clone)]
pub struct RunningConfig {
    hostname: String,
    interfaces: BTreeMap<InterfaceName, InterfaceRecord>,
}

impl RunningConfig {
    /// Create a configuration with the given hostname and no interfaces.
    pub fn new(hostname: &str) -> Result<Self> {
        let mut cfg = Self::default();
        cfg.set_hostname(hostname)?;
        Ok(cfg)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn set_hostname(&mut self, name: &str) -> Result<()> {
        if !is_valid_hostname(name) {
            return Err(SimError::invalid("hostname", name));
        }
        self.hostname = name.to_string();
        Ok(())
    }

    pub fn interface(&self, name: &InterfaceName) -> Option<&InterfaceRecord> {
        self.interfaces.get(name)
    }

    pub fn interface_mut(&mut self, name: &InterfaceName) -> Option<&mut InterfaceRecord> {
        self.interfaces.get_mut(name)
    }

    /// Create the record if absent. Returns `true` when it was created.
    pub fn ensure_interface(&mut self, name: InterfaceName) -> bool {
        if self.interfaces.contains_key(&name) {
            return false;
        }
        self.interfaces.insert(name, InterfaceRecord::default());
        true
    }

    /// Interfaces in display order (type weight, slot, port).
    pub fn interfaces(&self) -> impl Iterator<Item = (&InterfaceName, &InterfaceRecord)> {
        self.interfaces.iter()
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }
}

impl Default for RunningConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            interfaces: BTreeMap::new(),
        }
    }
}
