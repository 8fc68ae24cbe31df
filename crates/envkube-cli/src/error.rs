//! CLI error types with exit code handling
//!
//! The conversion core never fails; the only failures the CLI can hit are
//! its own IO and argument handling, mapped here to exit codes.

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(envkube::cli::io))]
    Io { message: String },

    /// Contradictory or invalid arguments
    #[error("{message}")]
    #[diagnostic(code(envkube::cli::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", path.display(), source),
        }
    }

    /// Build a usage error with a help hint
    pub fn usage(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// The exit code this error maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => exit_codes::IO_ERROR,
            Self::Usage { .. } => exit_codes::USAGE_ERROR,
        }
    }
}
