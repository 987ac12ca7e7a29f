//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: pattern error (bad dimensions, bad palette in config)
//! - 11: I/O error (file write, PNG encoding)
//! - 12: input error (bad palette name, bad style, bad output extension)
//! - 13: serialization error

use std::fmt;
use tri_pattern_core::PatternError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A pattern-level error (missing dimension, palette resolution failure).
    Pattern(PatternError),
    /// An I/O error (file write, PNG encoding).
    Io(String),
    /// A user input error (bad palette or style name, bad output path).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pattern(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Pattern(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PatternError> for CliError {
    fn from(e: PatternError) -> Self {
        match e {
            PatternError::Io(msg) => CliError::Io(msg),
            other => CliError::Pattern(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
