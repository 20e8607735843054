//! Interface types and canonical interface names.
//!
//! `InterfaceName` orders by type weight, then slot, then port, so a
//! `BTreeMap` keyed by it iterates in the order `show` commands print.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SimError};

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("static interface number regex"));

static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(\d+)/(\d+)$").expect("static interface name regex")
});

/// Physical interface type. Declaration order is the sort weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InterfaceKind {
    Ethernet,
    FastEthernet,
    GigabitEthernet,
    TenGigabitEthernet,
}

impl InterfaceKind {
    pub const ALL: [InterfaceKind; 4] = [
        InterfaceKind::Ethernet,
        InterfaceKind::FastEthernet,
        InterfaceKind::GigabitEthernet,
        InterfaceKind::TenGigabitEthernet,
    ];

    /// Full type name as printed in configuration output.
    pub fn name(self) -> &'static str {
        match self {
            InterfaceKind::Ethernet => "Ethernet",
            InterfaceKind::FastEthernet => "FastEthernet",
            InterfaceKind::GigabitEthernet => "GigabitEthernet",
            InterfaceKind::TenGigabitEthernet => "TenGigabitEthernet",
        }
    }

    /// Look up a kind by its full name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized interface name such as `GigabitEthernet0/1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceName {
    kind: InterfaceKind,
    slot: u32,
    port: u32,
}

impl InterfaceName {
    pub fn new(kind: InterfaceKind, slot: u32, port: u32) -> Self {
        Self { kind, slot, port }
    }

    /// Build a name from a kind and a `<slot>/<port>` string.
    pub fn with_number(kind: InterfaceKind, number: &str) -> Result<Self> {
        let (slot, port) = parse_number(number)?;
        Ok(Self::new(kind, slot, port))
    }

    pub fn kind(&self) -> InterfaceKind {
        self.kind
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn port(&self) -> u32 {
        self.port
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", self.kind.name(), self.slot, self.port)
    }
}

/// Parses the canonical form only (`FastEthernet0/1`); abbreviated types are
/// resolved by the command layer.
impl FromStr for InterfaceName {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = CANONICAL_RE
            .captures(s)
            .ok_or_else(|| SimError::invalid("interface", s))?;
        let kind =
            InterfaceKind::from_name(&caps[1]).ok_or_else(|| SimError::invalid("interface", s))?;
        let slot = parse_u32(&caps[2], s)?;
        let port = parse_u32(&caps[3], s)?;
        Ok(Self::new(kind, slot, port))
    }
}

/// Parse a `<slot>/<port>` string.
pub fn parse_number(number: &str) -> Result<(u32, u32)> {
    let caps = NUMBER_RE
        .captures(number)
        .ok_or_else(|| SimError::invalid("interface number", number))?;
    Ok((parse_u32(&caps[1], number)?, parse_u32(&caps[2], number)?))
}

fn parse_u32(digits: &str, whole: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| SimError::invalid("interface number", whole))
}
