//! Command interpreter for the simulated IOS CLI.
//!
//! Input lines are dispatched against static per-mode command tables. Each
//! token is resolved by unambiguous prefix, branches descend into their own
//! child tables, and leaf actions mutate the session's running
//! configuration or render read-only `show` output.

pub mod completion;
mod commands;
pub mod interpreter;
pub mod report;
pub mod resolver;
pub mod session;
mod show_commands;
pub mod table;

/// Tab-completion candidates for a partial line.
pub use completion::suggest;
/// Output produced by a command (text, nothing, session end).
pub use interpreter::CommandOutput;
/// Parse and execute one input line.
pub use interpreter::dispatch;
/// IOS-style rendering of a command error.
pub use report::render_error;
/// Prefix resolution of one token against a candidate set.
pub use resolver::{Resolution, resolve};
/// Per-session simulator state.
pub use session::Session;
