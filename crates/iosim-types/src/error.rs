//! Error types for iosim.
//!
//! Every command-level variant is recoverable: the session reports it and
//! keeps reading input.

use std::io;

use crate::mode::Mode;

/// Errors produced by the simulator.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// No candidate starts with the typed token.
    ///
    /// `position` is the byte offset of the token in the input line, used
    /// to place the `^` marker.
    #[error("% Invalid input detected at '^' marker.")]
    NoMatch { token: String, position: usize },

    /// Two or more candidates match and none is an exact literal match.
    /// `input` is the command path including the offending token.
    #[error("% Ambiguous command: \"{input}\"")]
    Ambiguous {
        input: String,
        candidates: Vec<String>,
    },

    /// Required subcommand or argument missing.
    #[error("% Incomplete command. Expecting '{0}'")]
    Incomplete(String),

    /// Argument present but fails validation.
    #[error("% Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },

    /// Command resolved but is not legal in the current mode.
    #[error("% Command '{command}' is not applicable in {mode} mode")]
    ModeViolation { command: String, mode: Mode },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl SimError {
    /// Shorthand for [`SimError::InvalidArgument`].
    pub fn invalid(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            what,
            value: value.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SimError>;
