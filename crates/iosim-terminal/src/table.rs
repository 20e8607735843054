//! Static per-mode command tables.
//!
//! Each mode owns a tree of [`Entry`] values. A branch holds child entries
//! (`show` -> `ip` -> `interface` -> `brief`); a leaf holds the [`Action`] to
//! run and, through it, the argument shape the action accepts.

use iosim_types::mode::Mode;

/// Argument shape a terminal action accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No arguments.
    None,
    /// Exactly `n` arguments.
    Exact(usize),
    /// Between `min` and `max` arguments, inclusive.
    Between(usize, usize),
    /// Any number; surplus arguments are reported but not fatal.
    Trailing,
}

/// Terminal handlers, one per resolved command path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Help,
    Enable,
    Disable,
    ConfigureTerminal,
    Quit,
    ExitMode,
    End,
    Hostname,
    NoHostname,
    Interface,
    IpAddress,
    NoIpAddress,
    Shutdown,
    NoShutdown,
    ShowVersion,
    ShowRunningConfig,
    ShowIpInterfaceBrief,
    ShowHistory,
}

impl Action {
    pub fn arity(self) -> Arity {
        match self {
            Action::Hostname => Arity::Exact(1),
            Action::IpAddress => Arity::Exact(2),
            Action::Interface => Arity::Between(1, 2),
            Action::Help
            | Action::ShowVersion
            | Action::ShowRunningConfig
            | Action::ShowIpInterfaceBrief
            | Action::ShowHistory => Arity::Trailing,
            _ => Arity::None,
        }
    }

    /// Expected syntax, used as the hint for incomplete commands.
    pub fn usage(self) -> &'static str {
        match self {
            Action::Help => "?",
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::ConfigureTerminal => "configure terminal",
            Action::Quit => "exit",
            Action::ExitMode => "exit",
            Action::End => "end",
            Action::Hostname => "hostname <name>",
            Action::NoHostname => "no hostname",
            Action::Interface => "interface <type><slot>/<port>",
            Action::IpAddress => "ip address <ip> <mask>",
            Action::NoIpAddress => "no ip address",
            Action::Shutdown => "shutdown",
            Action::NoShutdown => "no shutdown",
            Action::ShowVersion => "show version",
            Action::ShowRunningConfig => "show running-config",
            Action::ShowIpInterfaceBrief => "show ip interface brief",
            Action::ShowHistory => "show history",
        }
    }
}

/// A node in a command tree.
#[derive(Debug, Clone, Copy)]
pub enum Node {
    Leaf(Action),
    Branch(&'static [Entry]),
}

/// A named command at one level of a tree.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub help: &'static str,
    pub node: Node,
}

const fn leaf(name: &'static str, help: &'static str, action: Action) -> Entry {
    Entry {
        name,
        help,
        node: Node::Leaf(action),
    }
}

const fn branch(name: &'static str, help: &'static str, children: &'static [Entry]) -> Entry {
    Entry {
        name,
        help,
        node: Node::Branch(children),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

const SHOW_IP_INTERFACE: &[Entry] = &[leaf(
    "brief",
    "Brief summary of IP status and configuration",
    Action::ShowIpInterfaceBrief,
)];

const SHOW_IP: &[Entry] = &[branch(
    "interface",
    "IP interface status and configuration",
    SHOW_IP_INTERFACE,
)];

const SHOW: &[Entry] = &[
    leaf("version", "System hardware and software status", Action::ShowVersion),
    leaf(
        "running-config",
        "Current operating configuration",
        Action::ShowRunningConfig,
    ),
    leaf("run", "Current operating configuration", Action::ShowRunningConfig),
    branch("ip", "IP information", SHOW_IP),
    leaf("history", "Display the session command history", Action::ShowHistory),
];

// ---------------------------------------------------------------------------
// per-mode top level
// ---------------------------------------------------------------------------

const USER_EXEC: &[Entry] = &[
    leaf("?", "List available commands", Action::Help),
    leaf("enable", "Turn on privileged commands", Action::Enable),
    leaf("exit", "Exit from the EXEC", Action::Quit),
    leaf("quit", "Exit from the EXEC", Action::Quit),
];

const CONFIGURE: &[Entry] = &[leaf(
    "terminal",
    "Configure from the terminal",
    Action::ConfigureTerminal,
)];

const PRIVILEGED_EXEC: &[Entry] = &[
    leaf("?", "List available commands", Action::Help),
    branch("configure", "Enter configuration mode", CONFIGURE),
    leaf("disable", "Turn off privileged commands", Action::Disable),
    leaf("exit", "Exit from the EXEC", Action::Quit),
    leaf("quit", "Exit from the EXEC", Action::Quit),
    branch("show", "Show running system information", SHOW),
];

const GLOBAL_NO: &[Entry] = &[leaf(
    "hostname",
    "Restore the default hostname",
    Action::NoHostname,
)];

const GLOBAL_CONFIG: &[Entry] = &[
    leaf("?", "List available commands", Action::Help),
    leaf("end", "Exit from configure mode", Action::End),
    leaf("exit", "Exit from configure mode", Action::ExitMode),
    leaf("hostname", "Set system's network name", Action::Hostname),
    leaf("interface", "Select an interface to configure", Action::Interface),
    branch("no", "Negate a command or set its defaults", GLOBAL_NO),
];

const IP_ADDRESS: &[Entry] = &[leaf(
    "address",
    "Set the IP address of an interface",
    Action::IpAddress,
)];

const NO_IP_ADDRESS: &[Entry] = &[leaf(
    "address",
    "Remove the IP address of an interface",
    Action::NoIpAddress,
)];

const INTERFACE_NO: &[Entry] = &[
    branch("ip", "Interface Internet Protocol config commands", NO_IP_ADDRESS),
    leaf("shutdown", "Enable the interface", Action::NoShutdown),
];

const INTERFACE_CONFIG: &[Entry] = &[
    leaf("?", "List available commands", Action::Help),
    leaf("end", "Exit from configure mode", Action::End),
    leaf("exit", "Exit from interface configuration mode", Action::ExitMode),
    branch("ip", "Interface Internet Protocol config commands", IP_ADDRESS),
    branch("no", "Negate a command or set its defaults", INTERFACE_NO),
    leaf("shutdown", "Shutdown the selected interface", Action::Shutdown),
];

/// Top-level command table for `mode`.
pub fn commands(mode: Mode) -> &'static [Entry] {
    match mode {
        Mode::UserExec => USER_EXEC,
        Mode::PrivilegedExec => PRIVILEGED_EXEC,
        Mode::GlobalConfig => GLOBAL_CONFIG,
        Mode::InterfaceConfig => INTERFACE_CONFIG,
    }
}

/// Names of the entries at one level, in table order.
pub fn names(entries: &'static [Entry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.name).collect()
}

/// Find an entry by its exact name.
pub fn find(entries: &'static [Entry], name: &str) -> Option<&'static Entry> {
    entries.iter().find(|e| e.name == name)
}

/// Heading printed above a `?` listing.
pub fn heading(mode: Mode) -> &'static str {
    match mode {
        Mode::UserExec | Mode::PrivilegedExec => "Exec commands:",
        Mode::GlobalConfig => "Configure commands:",
        Mode::InterfaceConfig => "Interface configuration commands:",
    }
}
