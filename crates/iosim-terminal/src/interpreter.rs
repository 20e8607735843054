//! Line tokenizing and dispatch.
//!
//! A line is split on whitespace, then walked through the current mode's
//! command tree one token per level. The walk ends at a leaf action, whose
//! remaining tokens are its literal arguments, or at a `?` listing.

use iosim_types::error::{Result, SimError};
use iosim_types::mode::Mode;

use crate::commands;
use crate::resolver::{Resolution, resolve};
use crate::session::Session;
use crate::table::{self, Action, Arity, Entry, Node};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Command produced no visible output.
    None,
    /// The session ended (`exit`/`quit` in an EXEC mode).
    Exit,
}

/// A whitespace-delimited word and its byte offset in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Split a line on whitespace, remembering where each word starts.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token {
                    text: &line[s..i],
                    offset: s,
                });
                start = None;
            },
            (false, None) => start = Some(i),
            _ => {},
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &line[s..],
            offset: s,
        });
    }
    tokens
}

/// Where a walk through a command tree ended.
enum Target<'t, 'a> {
    /// A leaf action plus the tokens left over as its arguments.
    Run {
        action: Action,
        args: &'t [Token<'a>],
    },
    /// A `?` at a branch: list the branch's entries.
    List(&'static [Entry]),
}

/// Parse and execute one input line against the session.
///
/// Every non-empty line is recorded in history before it is resolved, so
/// failed commands show up in `show history` too. Errors never end the
/// session; only [`CommandOutput::Exit`] does.
pub fn dispatch(session: &mut Session, line: &str) -> Result<CommandOutput> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(CommandOutput::None);
    }
    session.push_history(trimmed);
    log::debug!("dispatch [{}] {trimmed}", session.mode());

    let tokens = tokenize(line);
    let mode = session.mode();
    let mut path = Vec::new();
    let target = match descend(table::commands(mode), &tokens, &mut path) {
        Err(SimError::NoMatch { token, position }) if path.is_empty() => {
            return Err(cross_mode_violation(mode, &token).unwrap_or(SimError::NoMatch {
                token,
                position,
            }));
        },
        other => other?,
    };

    match target {
        Target::List(entries) => Ok(CommandOutput::Text(list_entries(entries))),
        Target::Run { action, args } => {
            let surplus = check_arity(action, args)?;
            if !surplus.is_empty() {
                log::warn!("{}: ignoring trailing arguments", action.usage());
            }
            let output = commands::execute(action, args, session)?;
            Ok(with_surplus_notice(output, surplus))
        },
    }
}

/// Walk `tokens` through `entries`, one level per token.
fn descend<'t, 'a>(
    entries: &'static [Entry],
    tokens: &'t [Token<'a>],
    path: &mut Vec<&'static str>,
) -> Result<Target<'t, 'a>> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(SimError::Incomplete(branch_hint(path, entries)));
    };
    if first.text == "?" && !path.is_empty() {
        return Ok(Target::List(entries));
    }

    let names = table::names(entries);
    match resolve(first.text, &names) {
        Resolution::NoMatch => Err(SimError::NoMatch {
            token: first.text.to_string(),
            position: first.offset,
        }),
        Resolution::Ambiguous(candidates) => {
            let mut input = path.join(" ");
            if !input.is_empty() {
                input.push(' ');
            }
            input.push_str(first.text);
            log::debug!("ambiguous {input:?}: {candidates:?}");
            Err(SimError::Ambiguous {
                input,
                candidates: candidates.into_iter().map(String::from).collect(),
            })
        },
        Resolution::Unique(name) => {
            let entry = table::find(entries, name).ok_or_else(|| SimError::NoMatch {
                token: first.text.to_string(),
                position: first.offset,
            })?;
            path.push(entry.name);
            match entry.node {
                Node::Leaf(action) => Ok(Target::Run { action, args: rest }),
                Node::Branch(children) => descend(children, rest, path),
            }
        },
    }
}

/// Hint for a branch that ran out of tokens, e.g. `show <version|...>`.
fn branch_hint(path: &[&'static str], entries: &'static [Entry]) -> String {
    let prefix = path.join(" ");
    let names = table::names(entries);
    match names.as_slice() {
        [only] => format!("{prefix} {only}"),
        _ => format!("{prefix} <{}>", names.join("|")),
    }
}

/// Enforce the action's declared arity. Returns surplus tokens that a
/// trailing-tolerant action should report.
fn check_arity<'t, 'a>(action: Action, args: &'t [Token<'a>]) -> Result<&'t [Token<'a>]> {
    let (min, max) = match action.arity() {
        Arity::None => (0, 0),
        Arity::Exact(n) => (n, n),
        Arity::Between(lo, hi) => (lo, hi),
        Arity::Trailing => return Ok(args),
    };
    if args.len() < min {
        return Err(SimError::Incomplete(action.usage().to_string()));
    }
    if args.len() > max {
        let extra: Vec<&str> = args[max..].iter().map(|t| t.text).collect();
        return Err(SimError::invalid("argument", extra.join(" ")));
    }
    Ok(&[])
}

fn with_surplus_notice(output: CommandOutput, surplus: &[Token<'_>]) -> CommandOutput {
    if surplus.is_empty() {
        return output;
    }
    let extra: Vec<&str> = surplus.iter().map(|t| t.text).collect();
    let notice = format!("% Unrecognized argument(s) ignored: {}", extra.join(" "));
    match output {
        CommandOutput::Text(text) => CommandOutput::Text(format!("{notice}\n{text}")),
        CommandOutput::None => CommandOutput::Text(notice),
        CommandOutput::Exit => CommandOutput::Exit,
    }
}

/// A first token that resolves, abbreviations included, to a command of
/// another mode.
fn cross_mode_violation(mode: Mode, token: &str) -> Option<SimError> {
    Mode::ALL
        .into_iter()
        .filter(|m| *m != mode)
        .find_map(|other| {
            let names: Vec<&'static str> = table::names(table::commands(other))
                .into_iter()
                .filter(|n| *n != "?")
                .collect();
            match resolve(token, &names) {
                Resolution::Unique(name) => Some(name),
                _ => None,
            }
        })
        .map(|name| SimError::ModeViolation {
            command: name.to_string(),
            mode,
        })
}

/// Two-column `name  help` listing used by `?`.
pub(crate) fn list_entries(entries: &'static [Entry]) -> String {
    entries
        .iter()
        .filter(|e| e.name != "?")
        .map(|e| format!("  {:<14} {}", e.name, e.help))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use iosim_types::device::{AdminStatus, LinkStatus};
    use iosim_types::interface::{InterfaceKind, InterfaceName};

    fn run(session: &mut Session, lines: &[&str]) {
        for line in lines {
            dispatch(session, line).unwrap_or_else(|e| panic!("{line}: {e}"));
        }
    }

    fn text(out: CommandOutput) -> String {
        match out {
            CommandOutput::Text(s) => s,
            other => panic!("expected text output, got {other:?}"),
        }
    }

    fn gi(slot: u32, port: u32) -> InterfaceName {
        InterfaceName::new(InterfaceKind::GigabitEthernet, slot, port)
    }

    // -- tokenize --

    #[test]
    fn tokenize_offsets() {
        let toks = tokenize("  show   ip int");
        let pairs: Vec<(&str, usize)> = toks.iter().map(|t| (t.text, t.offset)).collect();
        assert_eq!(pairs, vec![("show", 2), ("ip", 9), ("int", 12)]);
    }

    #[test]
    fn tokenize_tabs_and_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
        let toks = tokenize("a\tb");
        assert_eq!(toks[1].text, "b");
        assert_eq!(toks[1].offset, 2);
    }

    // -- dispatch basics --

    #[test]
    fn empty_line_is_noop() {
        let mut s = Session::default();
        assert_eq!(dispatch(&mut s, "").unwrap(), CommandOutput::None);
        assert_eq!(dispatch(&mut s, "   ").unwrap(), CommandOutput::None);
        assert!(s.history().is_empty());
    }

    #[test]
    fn failed_commands_are_recorded() {
        let mut s = Session::default();
        assert!(dispatch(&mut s, "bogus").is_err());
        assert!(dispatch(&mut s, "e").is_err());
        assert_eq!(s.history(), &["bogus".to_string(), "e".to_string()]);
    }

    #[test]
    fn no_match_caret_at_first_non_space() {
        let mut s = Session::default();
        match dispatch(&mut s, "   xyz").unwrap_err() {
            SimError::NoMatch { token, position } => {
                assert_eq!(token, "xyz");
                assert_eq!(position, 3);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn nested_no_match_points_at_offending_token() {
        let mut s = Session::default();
        run(&mut s, &["enable"]);
        match dispatch(&mut s, "show bogus").unwrap_err() {
            SimError::NoMatch { token, position } => {
                assert_eq!(token, "bogus");
                assert_eq!(position, 5);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn ambiguous_top_level() {
        let mut s = Session::default();
        match dispatch(&mut s, "e").unwrap_err() {
            SimError::Ambiguous { input, candidates } => {
                assert_eq!(input, "e");
                assert_eq!(candidates, vec!["enable", "exit"]);
            },
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.mode(), Mode::UserExec);
    }

    // -- mode state machine --

    #[test]
    fn enable_and_disable() {
        let mut s = Session::default();
        run(&mut s, &["en"]);
        assert_eq!(s.mode(), Mode::PrivilegedExec);
        run(&mut s, &["disable"]);
        assert_eq!(s.mode(), Mode::UserExec);
    }

    #[test]
    fn configure_terminal_prints_banner() {
        let mut s = Session::default();
        run(&mut s, &["enable"]);
        let out = text(dispatch(&mut s, "conf t").unwrap());
        assert!(out.starts_with("Enter configuration commands"));
        assert_eq!(s.mode(), Mode::GlobalConfig);
    }

    #[test]
    fn configure_alone_is_incomplete() {
        let mut s = Session::default();
        run(&mut s, &["enable"]);
        match dispatch(&mut s, "configure").unwrap_err() {
            SimError::Incomplete(hint) => assert_eq!(hint, "configure terminal"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.mode(), Mode::PrivilegedExec);
    }

    #[test]
    fn exit_and_end_walk_back() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0"]);
        assert_eq!(s.mode(), Mode::InterfaceConfig);
        run(&mut s, &["exit"]);
        assert_eq!(s.mode(), Mode::GlobalConfig);
        assert_eq!(s.current_interface(), None);
        run(&mut s, &["exit"]);
        assert_eq!(s.mode(), Mode::PrivilegedExec);
        run(&mut s, &["conf t", "int f0/1", "end"]);
        assert_eq!(s.mode(), Mode::PrivilegedExec);
        assert_eq!(s.current_interface(), None);
    }

    #[test]
    fn exit_in_exec_terminates() {
        let mut s = Session::default();
        assert_eq!(dispatch(&mut s, "exit").unwrap(), CommandOutput::Exit);
        assert!(!s.is_active());

        let mut s = Session::default();
        run(&mut s, &["enable"]);
        assert_eq!(dispatch(&mut s, "quit").unwrap(), CommandOutput::Exit);
        assert!(!s.is_active());
    }

    #[test]
    fn command_from_other_mode_is_mode_violation() {
        let mut s = Session::default();
        run(&mut s, &["enable"]);
        match dispatch(&mut s, "hostname R2").unwrap_err() {
            SimError::ModeViolation { command, mode } => {
                assert_eq!(command, "hostname");
                assert_eq!(mode, Mode::PrivilegedExec);
            },
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.config().hostname(), "Router");
    }

    #[test]
    fn abbreviated_command_from_other_mode_is_mode_violation() {
        let violation = |s: &mut Session, line: &str| match dispatch(s, line).unwrap_err() {
            SimError::ModeViolation { command, mode } => (command, mode),
            other => panic!("{line}: unexpected {other:?}"),
        };

        let mut s = Session::default();
        assert_eq!(
            violation(&mut s, "conf t"),
            ("configure".to_string(), Mode::UserExec)
        );
        run(&mut s, &["enable"]);
        assert_eq!(
            violation(&mut s, "int g0/0"),
            ("interface".to_string(), Mode::PrivilegedExec)
        );
        assert_eq!(s.config().interface_count(), 0);

        run(&mut s, &["conf t"]);
        let before = s.history().len();
        assert_eq!(
            violation(&mut s, "shut"),
            ("shutdown".to_string(), Mode::GlobalConfig)
        );
        assert_eq!(
            violation(&mut s, "shutdown"),
            ("shutdown".to_string(), Mode::GlobalConfig)
        );
        assert_eq!(
            violation(&mut s, "sh run"),
            ("show".to_string(), Mode::GlobalConfig)
        );
        assert_eq!(s.mode(), Mode::GlobalConfig);
        assert_eq!(s.history().len(), before + 3);

        // Unknown everywhere stays an invalid-input error.
        assert!(matches!(
            dispatch(&mut s, "zz").unwrap_err(),
            SimError::NoMatch { .. }
        ));
    }

    #[test]
    fn ip_address_outside_interface_mode() {
        let mut s = Session::default();
        run(&mut s, &["enable", "conf t"]);
        assert!(matches!(
            dispatch(&mut s, "ip address 1.2.3.4 255.0.0.0").unwrap_err(),
            SimError::ModeViolation { .. }
        ));
    }

    // -- global config --

    #[test]
    fn global_config_abbreviations() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "h R1"]);
        assert_eq!(s.config().hostname(), "R1");
        run(&mut s, &["i g0/1"]);
        assert_eq!(s.mode(), Mode::InterfaceConfig);
        assert_eq!(s.current_interface(), Some(&gi(0, 1)));
    }

    #[test]
    fn global_config_ambiguous_e() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t"]);
        match dispatch(&mut s, "e").unwrap_err() {
            SimError::Ambiguous { candidates, .. } => {
                assert_eq!(candidates, vec!["end", "exit"]);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hostname_arity() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t"]);
        assert!(matches!(
            dispatch(&mut s, "hostname").unwrap_err(),
            SimError::Incomplete(_)
        ));
        assert!(matches!(
            dispatch(&mut s, "hostname a b").unwrap_err(),
            SimError::InvalidArgument { .. }
        ));
        match dispatch(&mut s, "hostname -bad").unwrap_err() {
            SimError::InvalidArgument { what, value } => {
                assert_eq!(what, "hostname");
                assert_eq!(value, "-bad");
            },
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.config().hostname(), "Router");
    }

    #[test]
    fn no_hostname_restores_default() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "hostname R9"]);
        assert_eq!(s.prompt(), "R9(config)#");
        run(&mut s, &["no hostname"]);
        assert_eq!(s.config().hostname(), "Router");
    }

    #[test]
    fn interface_forms() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t"]);
        for (line, expected) in [
            ("interface GigabitEthernet0/0", "GigabitEthernet0/0"),
            ("int gi 0/2", "GigabitEthernet0/2"),
            ("int F 1/3", "FastEthernet1/3"),
            ("int e0/0", "Ethernet0/0"),
            ("int te1/1", "TenGigabitEthernet1/1"),
        ] {
            run(&mut s, &[line, "exit"]);
            let name: InterfaceName = expected.parse().unwrap();
            assert!(s.config().interface(&name).is_some(), "{line}");
        }
        assert_eq!(s.config().interface_count(), 5);
    }

    #[test]
    fn interface_bad_format() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t"]);
        for line in ["int g0", "int x0/0", "int 0/0", "int g0/0/0", "int g a/b"] {
            match dispatch(&mut s, line).unwrap_err() {
                SimError::InvalidArgument { .. } => {},
                other => panic!("{line}: unexpected {other:?}"),
            }
            assert_eq!(s.mode(), Mode::GlobalConfig);
        }
        assert_eq!(s.config().interface_count(), 0);
        assert!(matches!(
            dispatch(&mut s, "interface").unwrap_err(),
            SimError::Incomplete(_)
        ));
    }

    // -- interface config --

    #[test]
    fn full_scenario() {
        let mut s = Session::default();
        run(&mut s, &["en"]);
        assert_eq!(s.mode(), Mode::PrivilegedExec);
        run(&mut s, &["conf t"]);
        assert_eq!(s.mode(), Mode::GlobalConfig);
        run(&mut s, &["int g0/0"]);
        assert_eq!(s.mode(), Mode::InterfaceConfig);
        let rec = s.config().interface(&gi(0, 0)).unwrap();
        assert_eq!(rec.status(), LinkStatus::AdministrativelyDown);

        run(&mut s, &["ip address 192.168.1.1 255.255.255.0"]);
        let rec = s.config().interface(&gi(0, 0)).unwrap();
        assert_eq!(rec.status(), LinkStatus::AdministrativelyDown);
        assert_eq!(rec.ip_address(), Some("192.168.1.1"));

        run(&mut s, &["no shutdown"]);
        let rec = s.config().interface(&gi(0, 0)).unwrap();
        assert_eq!(rec.admin_status(), AdminStatus::Up);
        assert_eq!(rec.status(), LinkStatus::Up);
    }

    #[test]
    fn shutdown_twice_same_as_once() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0", "no shut", "shutdown"]);
        let once = s.config().interface(&gi(0, 0)).unwrap().clone();
        run(&mut s, &["shutdown"]);
        let twice = s.config().interface(&gi(0, 0)).unwrap().clone();
        assert_eq!(once, twice);
        assert_eq!(twice.admin_status(), AdminStatus::Down);
        assert_eq!(twice.status(), LinkStatus::AdministrativelyDown);
    }

    #[test]
    fn ip_address_round_trip() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0", "no shutdown"]);
        let before = s.config().interface(&gi(0, 0)).unwrap().clone();
        assert_eq!(before.status(), LinkStatus::Down);
        run(&mut s, &["ip address 10.0.0.1 255.255.255.0"]);
        assert_eq!(
            s.config().interface(&gi(0, 0)).unwrap().status(),
            LinkStatus::Up
        );
        run(&mut s, &["no ip address"]);
        let after = s.config().interface(&gi(0, 0)).unwrap();
        assert_eq!(after, &before);
        assert_eq!(after.ip_address(), None);
        assert_eq!(after.subnet_mask(), None);
    }

    #[test]
    fn ip_address_validation() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0"]);
        assert!(matches!(
            dispatch(&mut s, "ip address 10.0.0.1").unwrap_err(),
            SimError::Incomplete(_)
        ));
        assert!(matches!(
            dispatch(&mut s, "ip address").unwrap_err(),
            SimError::Incomplete(_)
        ));
        assert!(matches!(
            dispatch(&mut s, "ip").unwrap_err(),
            SimError::Incomplete(_)
        ));
        assert!(matches!(
            dispatch(&mut s, "ip address 10.0.0.256 255.0.0.0").unwrap_err(),
            SimError::InvalidArgument { .. }
        ));
        assert!(matches!(
            dispatch(&mut s, "ip address 10.0.0.1 255.0.0.0 extra").unwrap_err(),
            SimError::InvalidArgument { .. }
        ));
        assert_eq!(s.config().interface(&gi(0, 0)).unwrap().ip_address(), None);
    }

    #[test]
    fn no_command_incomplete_and_ambiguity() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0"]);
        match dispatch(&mut s, "no").unwrap_err() {
            SimError::Incomplete(hint) => assert_eq!(hint, "no <ip|shutdown>"),
            other => panic!("unexpected {other:?}"),
        }
        match dispatch(&mut s, "no ip").unwrap_err() {
            SimError::Incomplete(hint) => assert_eq!(hint, "no ip address"),
            other => panic!("unexpected {other:?}"),
        }
        run(&mut s, &["no ip add"]);
    }

    #[test]
    fn extra_argument_on_plain_command() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0"]);
        match dispatch(&mut s, "shutdown now").unwrap_err() {
            SimError::InvalidArgument { what, value } => {
                assert_eq!(what, "argument");
                assert_eq!(value, "now");
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    // -- show --

    #[test]
    fn show_ru_renders_sorted_running_config() {
        let mut s = Session::default();
        run(
            &mut s,
            &[
                "en",
                "conf t",
                "int g0/1",
                "exit",
                "int f0/0",
                "ip address 10.0.0.1 255.0.0.0",
                "exit",
                "int e1/0",
                "exit",
                "int g0/0",
                "end",
            ],
        );
        let out = text(dispatch(&mut s, "show ru").unwrap());
        let order: Vec<&str> = out
            .lines()
            .filter_map(|l| l.strip_prefix("interface "))
            .collect();
        assert_eq!(
            order,
            vec![
                "Ethernet1/0",
                "FastEthernet0/0",
                "GigabitEthernet0/0",
                "GigabitEthernet0/1"
            ]
        );
        assert!(out.contains(" ip address 10.0.0.1 255.0.0.0"));
        assert!(out.contains("hostname Router"));
    }

    #[test]
    fn show_run_and_r() {
        let mut s = Session::default();
        run(&mut s, &["en"]);
        assert!(text(dispatch(&mut s, "show run").unwrap()).contains("hostname"));
        match dispatch(&mut s, "show r").unwrap_err() {
            SimError::Ambiguous { input, .. } => assert_eq!(input, "show r"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn show_trailing_arguments_reported_not_fatal() {
        let mut s = Session::default();
        run(&mut s, &["en"]);
        let out = text(dispatch(&mut s, "show version extra stuff").unwrap());
        assert!(out.starts_with("% Unrecognized argument(s) ignored: extra stuff"));
        assert!(out.contains("Hostname: Router"));
    }

    #[test]
    fn show_ip_interface_brief_abbreviated() {
        let mut s = Session::default();
        run(&mut s, &["en", "conf t", "int g0/0", "end"]);
        let out = text(dispatch(&mut s, "sh ip int b").unwrap());
        assert!(out.lines().next().unwrap().starts_with("Interface"));
        assert!(out.contains("GigabitEthernet0/0"));
        match dispatch(&mut s, "show ip").unwrap_err() {
            SimError::Incomplete(hint) => assert_eq!(hint, "show ip interface"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn show_history_includes_failures() {
        let mut s = Session::default();
        let _ = dispatch(&mut s, "bogus");
        run(&mut s, &["en"]);
        let out = text(dispatch(&mut s, "show history").unwrap());
        assert!(out.contains(" 1: bogus"));
        assert!(out.contains(" 2: en"));
        assert!(out.contains(" 3: show history"));
    }

    // -- help --

    #[test]
    fn question_mark_lists_mode_commands() {
        let mut s = Session::default();
        let out = text(dispatch(&mut s, "?").unwrap());
        assert!(out.starts_with("Exec commands:"));
        assert!(out.contains("enable"));
        assert!(!out.contains("configure"));
    }

    #[test]
    fn question_mark_at_branch_lists_children() {
        let mut s = Session::default();
        run(&mut s, &["en"]);
        let out = text(dispatch(&mut s, "show ?").unwrap());
        assert!(out.contains("version"));
        assert!(out.contains("running-config"));
        let out = text(dispatch(&mut s, "sh ip ?").unwrap());
        assert!(out.contains("interface"));
        assert!(!out.contains("version"));
    }

    #[test]
    fn sessions_are_isolated() {
        let mut a = Session::default();
        let mut b = Session::default();
        run(&mut a, &["en", "conf t", "hostname A"]);
        assert_eq!(b.mode(), Mode::UserExec);
        assert_eq!(b.config().hostname(), "Router");
        run(&mut b, &["en"]);
        assert_eq!(a.mode(), Mode::GlobalConfig);
        assert_eq!(a.history().len(), 3);
        assert_eq!(b.history().len(), 1);
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        const WORDS: &[&str] = &[
            "en", "enable", "disable", "conf", "t", "exit", "end", "int", "g0/0", "fa", "1/2",
            "ip", "address", "10.0.0.1", "255.0.0.0", "no", "shut", "hostname", "R2", "show",
            "run", "?", "bogus",
        ];

        fn line() -> impl Strategy<Value = String> {
            proptest::collection::vec(proptest::sample::select(WORDS), 0..5)
                .prop_map(|words| words.join(" "))
        }

        proptest! {
            #[test]
            fn random_sessions_keep_invariants(lines in proptest::collection::vec(line(), 0..20)) {
                let mut s = Session::default();
                let mut expected_history = 0;
                for l in &lines {
                    if !l.trim().is_empty() {
                        expected_history += 1;
                    }
                    if matches!(dispatch(&mut s, l), Ok(CommandOutput::Exit)) {
                        prop_assert!(!s.is_active());
                        break;
                    }
                    prop_assert_eq!(
                        s.current_interface().is_some(),
                        s.mode() == Mode::InterfaceConfig
                    );
                    if let Some(name) = s.current_interface() {
                        prop_assert!(s.config().interface(name).is_some());
                    }
                }
                prop_assert_eq!(s.history().len(), expected_history);
            }

            #[test]
            fn arbitrary_text_never_panics(l in "\\PC{0,40}") {
                let mut s = Session::default();
                let _ = dispatch(&mut s, &l);
            }
        }
    }
}
