//! IOS-style error rendering.

use iosim_types::error::SimError;

/// Render `err` for display after the user entered `line`.
///
/// `NoMatch` gets the echoed line with a caret under the offending token;
/// everything else is its one-line message.
pub fn render_error(line: &str, err: &SimError) -> String {
    match err {
        SimError::NoMatch { position, .. } => {
            let column = line
                .get(..*position)
                .map_or(*position, |before| before.chars().count());
            format!("{err}\n  {line}\n  {}^", " ".repeat(column))
        },
        _ => err.to_string(),
    }
}
