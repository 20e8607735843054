//! Handlers for the non-`show` actions.

use std::sync::LazyLock;

use regex::Regex;

use iosim_types::error::{Result, SimError};
use iosim_types::interface::{InterfaceKind, InterfaceName};
use iosim_types::mode::Mode;

use crate::interpreter::{CommandOutput, Token, list_entries};
use crate::resolver::{Resolution, resolve};
use crate::session::Session;
use crate::show_commands;
use crate::table::{self, Action};

const CONFIG_BANNER: &str = "Enter configuration commands, one per line.  End with CNTL/Z.";
const PASSWORD_NOTICE: &str = "% Password: ***** (simulated)";

/// Leading type letters, then whatever follows (`gi0/1` -> `gi`, `0/1`).
static TYPE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)(.*)$").expect("static type-prefix regex"));

/// Run a resolved action. Arity has already been checked by the dispatcher.
pub(crate) fn execute(
    action: Action,
    args: &[Token<'_>],
    session: &mut Session,
) -> Result<CommandOutput> {
    match action {
        Action::Help => Ok(help(session.mode())),
        Action::Enable => {
            session.set_mode(Mode::PrivilegedExec);
            if session.settings().show_password_prompt {
                Ok(CommandOutput::Text(PASSWORD_NOTICE.to_string()))
            } else {
                Ok(CommandOutput::None)
            }
        },
        Action::Disable => {
            session.set_mode(Mode::UserExec);
            Ok(CommandOutput::None)
        },
        Action::ConfigureTerminal => {
            session.set_mode(Mode::GlobalConfig);
            Ok(CommandOutput::Text(CONFIG_BANNER.to_string()))
        },
        Action::Quit => {
            log::info!("session closed from {}", session.mode());
            session.terminate();
            Ok(CommandOutput::Exit)
        },
        Action::ExitMode => {
            let parent = match session.mode() {
                Mode::InterfaceConfig => Mode::GlobalConfig,
                _ => Mode::PrivilegedExec,
            };
            session.set_mode(parent);
            Ok(CommandOutput::None)
        },
        Action::End => {
            session.set_mode(Mode::PrivilegedExec);
            Ok(CommandOutput::None)
        },
        Action::Hostname => hostname(session, args[0].text),
        Action::NoHostname => {
            let default = session.settings().hostname.clone();
            hostname(session, &default)
        },
        Action::Interface => {
            let name = interface_name(args)?;
            session.enter_interface(name);
            Ok(CommandOutput::None)
        },
        Action::IpAddress => {
            let (ip, mask) = (args[0].text, args[1].text);
            session.current_record_mut("ip address")?.set_address(ip, mask)?;
            log::info!("ip address {ip} {mask} on {}", current_label(session));
            Ok(CommandOutput::None)
        },
        Action::NoIpAddress => {
            session.current_record_mut("no ip address")?.clear_address();
            log::info!("cleared ip address on {}", current_label(session));
            Ok(CommandOutput::None)
        },
        Action::Shutdown => {
            session.current_record_mut("shutdown")?.shutdown();
            log::info!("{} shut down", current_label(session));
            Ok(CommandOutput::None)
        },
        Action::NoShutdown => {
            session.current_record_mut("no shutdown")?.no_shutdown();
            log::info!("{} enabled", current_label(session));
            Ok(CommandOutput::None)
        },
        Action::ShowVersion => Ok(CommandOutput::Text(show_commands::version(session))),
        Action::ShowRunningConfig => {
            Ok(CommandOutput::Text(show_commands::running_config(session)))
        },
        Action::ShowIpInterfaceBrief => {
            Ok(CommandOutput::Text(show_commands::ip_interface_brief(session)))
        },
        Action::ShowHistory => Ok(CommandOutput::Text(show_commands::history(session))),
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

fn help(mode: Mode) -> CommandOutput {
    let listing = list_entries(table::commands(mode));
    CommandOutput::Text(format!("{}\n{listing}", table::heading(mode)))
}

// ---------------------------------------------------------------------------
// hostname
// ---------------------------------------------------------------------------

fn hostname(session: &mut Session, name: &str) -> Result<CommandOutput> {
    session.config_mut().set_hostname(name)?;
    log::info!("hostname set to {name}");
    Ok(CommandOutput::None)
}

// ---------------------------------------------------------------------------
// interface
// ---------------------------------------------------------------------------

fn current_label(session: &Session) -> String {
    session
        .current_interface()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Parse `gi0/1`, `gi 0/1` or `GigabitEthernet0/1` into a canonical name.
fn interface_name(args: &[Token<'_>]) -> Result<InterfaceName> {
    let raw: Vec<&str> = args.iter().map(|t| t.text).collect();
    let invalid = || SimError::invalid("interface", raw.join(" "));

    let (letters, number) = match raw.as_slice() {
        [joined] => {
            let caps = TYPE_PREFIX.captures(joined).ok_or_else(invalid)?;
            match (caps.get(1), caps.get(2)) {
                (Some(l), Some(n)) => (l.as_str(), n.as_str()),
                _ => return Err(invalid()),
            }
        },
        [kind, number] if kind.chars().all(|c| c.is_ascii_alphabetic()) => (*kind, *number),
        _ => return Err(invalid()),
    };

    let kind = interface_kind(letters).ok_or_else(invalid)?;
    InterfaceName::with_number(kind, number).map_err(|_| invalid())
}

/// Resolve an abbreviated interface type (`g`, `Fa`, `te`).
pub(crate) fn interface_kind(letters: &str) -> Option<InterfaceKind> {
    let names: Vec<&str> = InterfaceKind::ALL.iter().map(|k| k.name()).collect();
    match resolve(letters, &names) {
        Resolution::Unique(name) => InterfaceKind::from_name(name),
        _ => None,
    }
}
