//! Abbreviation resolution.
//!
//! A typed token matches every candidate it is a case-insensitive prefix of.
//! One match wins outright; among several, an exact match wins; otherwise the
//! token is ambiguous.

/// Outcome of resolving one token against a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Unique(&'a str),
    NoMatch,
    Ambiguous(Vec<&'a str>),
}

/// `(alias, target, minimum token length)`.
///
/// When a token matches exactly this pair and nothing else, and is at least
/// the minimum length, it resolves to the target. Only `run` /
/// `running-config` is listed: `ru` picks `running-config`, `r` stays
/// ambiguous, and `run` is an exact match on its own.
const ALIAS_PAIRS: &[(&str, &str, usize)] = &[("run", "running-config", 2)];

/// Resolve `token` against `candidates`.
///
/// Pure: the result depends only on the arguments. The empty token never
/// matches.
pub fn resolve<'a>(token: &str, candidates: &[&'a str]) -> Resolution<'a> {
    if token.is_empty() {
        return Resolution::NoMatch;
    }
    let needle = token.to_lowercase();
    let matches: Vec<&'a str> = candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => Resolution::NoMatch,
        [only] => Resolution::Unique(*only),
        _ => {
            let exact: Vec<&'a str> = matches
                .iter()
                .copied()
                .filter(|c| c.to_lowercase() == needle)
                .collect();
            if let [one] = exact.as_slice() {
                return Resolution::Unique(*one);
            }
            if let Some(target) = alias_target(&needle, &matches) {
                return Resolution::Unique(target);
            }
            Resolution::Ambiguous(matches)
        },
    }
}

fn alias_target<'a>(needle: &str, matches: &[&'a str]) -> Option<&'a str> {
    if matches.len() != 2 {
        return None;
    }
    ALIAS_PAIRS.iter().find_map(|&(alias, target, min_len)| {
        let has_alias = matches.iter().any(|m| m.eq_ignore_ascii_case(alias));
        let target = matches
            .iter()
            .copied()
            .find(|m| m.eq_ignore_ascii_case(target))?;
        (has_alias && needle.chars().count() >= min_len).then_some(target)
    })
}
