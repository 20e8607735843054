//! Line-editor glue: the rustyline helper that owns the session and
//! answers Tab completion from it.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use iosim_terminal::{Session, suggest};

pub struct ShellHelper {
    pub session: Session,
}

impl ShellHelper {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

/// Byte offset where the word under the cursor starts.
fn word_start(before_cursor: &str) -> usize {
    before_cursor
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = line.get(..pos).unwrap_or(line);
        let candidates = suggest(&self.session, before)
            .into_iter()
            .map(|c| Pair {
                display: c.trim_end().to_string(),
                replacement: c,
            })
            .collect();
        Ok((word_start(before), candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
