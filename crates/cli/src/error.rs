//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: scene error (bad dimensions, degenerate parameters, sampling failure)
//! - 11: I/O error (PNG write, config read, window)
//! - 12: input error (bad config file, bad JSON params, bad color)
//! - 13: serialization error

use heartfield_core::HeartfieldError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A scene-level error from the pipeline.
    Scene(HeartfieldError),
    /// An I/O error (file write, directory creation, window).
    Io(String),
    /// A user input error (config document, params JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scene(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Scene(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<HeartfieldError> for CliError {
    fn from(e: HeartfieldError) -> Self {
        match e {
            HeartfieldError::Io(msg) => CliError::Io(msg),
            HeartfieldError::InvalidParam(msg) => CliError::Input(msg),
            HeartfieldError::InvalidColor(msg) => CliError::Input(format!("invalid color: {msg}")),
            other => CliError::Scene(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
