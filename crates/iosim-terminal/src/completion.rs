//! Tab-completion advisor.
//!
//! Walks the same per-mode tables as the dispatcher, so a suggestion is
//! always something `dispatch` would accept at that position.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use iosim_types::interface::InterfaceKind;

use crate::commands::interface_kind;
use crate::interpreter::tokenize;
use crate::resolver::{Resolution, resolve};
use crate::session::Session;
use crate::table::{self, Action, Entry, Node};

/// Type letters followed by a slot number and no slash yet (`gi0`).
static TYPE_AND_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\d+$").expect("static type-and-slot regex"));

/// Candidates for the last (possibly empty) token of `partial`.
///
/// Each candidate is the full replacement for that token plus a delimiter
/// hint: a space after a complete word, `/` where an interface port is
/// expected next. The session is only read.
pub fn suggest(session: &Session, partial: &str) -> BTreeSet<String> {
    let tokens = tokenize(partial);
    let ends_open = partial.is_empty() || partial.ends_with(char::is_whitespace);
    let (done, current): (Vec<&str>, &str) = match tokens.split_last() {
        Some((last, rest)) if !ends_open => (rest.iter().map(|t| t.text).collect(), last.text),
        _ => (tokens.iter().map(|t| t.text).collect(), ""),
    };

    let mut entries = table::commands(session.mode());
    for (i, word) in done.iter().enumerate() {
        let names = table::names(entries);
        let Resolution::Unique(name) = resolve(word, &names) else {
            return BTreeSet::new();
        };
        let Some(entry) = table::find(entries, name) else {
            return BTreeSet::new();
        };
        match entry.node {
            Node::Branch(children) => entries = children,
            Node::Leaf(action) => {
                return argument_candidates(session, action, &done[i + 1..], current);
            },
        }
    }
    level_candidates(entries, current)
}

fn level_candidates(entries: &'static [Entry], current: &str) -> BTreeSet<String> {
    let needle = current.to_lowercase();
    entries
        .iter()
        .filter(|e| e.name != "?" && e.name.to_lowercase().starts_with(&needle))
        .map(|e| format!("{} ", e.name))
        .collect()
}

fn argument_candidates(
    session: &Session,
    action: Action,
    done: &[&str],
    current: &str,
) -> BTreeSet<String> {
    if action != Action::Interface {
        return BTreeSet::new();
    }
    match done {
        [] if TYPE_AND_SLOT
            .captures(current)
            .and_then(|c| c.get(1))
            .is_some_and(|l| interface_kind(l.as_str()).is_some()) =>
        {
            BTreeSet::from([format!("{current}/")])
        },
        [] => {
            let needle = current.to_lowercase();
            let kinds = InterfaceKind::ALL.iter().map(|k| k.name().to_string());
            let existing = session.config().interfaces().map(|(n, _)| n.to_string());
            kinds
                .chain(existing)
                .filter(|n| n.to_lowercase().starts_with(&needle))
                .map(|n| format!("{n} "))
                .collect()
        },
        [kind]
            if interface_kind(kind).is_some()
                && !current.is_empty()
                && current.bytes().all(|b| b.is_ascii_digit()) =>
        {
            BTreeSet::from([format!("{current}/")])
        },
        _ => BTreeSet::new(),
    }
}
