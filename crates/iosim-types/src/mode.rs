//! CLI modes and prompt derivation.

use std::fmt;

/// The command-interpretation context. Exactly one is current per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    UserExec,
    PrivilegedExec,
    GlobalConfig,
    InterfaceConfig,
}

impl Mode {
    /// Every mode, in transition order.
    pub const ALL: [Mode; 4] = [
        Mode::UserExec,
        Mode::PrivilegedExec,
        Mode::GlobalConfig,
        Mode::InterfaceConfig,
    ];

    /// Prompt text for this mode, e.g. `Router(config-if)#`.
    pub fn prompt(self, hostname: &str) -> String {
        match self {
            Mode::UserExec => format!("{hostname}>"),
            Mode::PrivilegedExec => format!("{hostname}#"),
            Mode::GlobalConfig => format!("{hostname}(config)#"),
            Mode::InterfaceConfig => format!("{hostname}(config-if)#"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::UserExec => "user EXEC",
            Mode::PrivilegedExec => "privileged EXEC",
            Mode::GlobalConfig => "global configuration",
            Mode::InterfaceConfig => "interface configuration",
        };
        f.write_str(s)
    }
}
