//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and the process exit code.

use std::fmt;
use std::process;
use tilecutter::pyramid::PyramidError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// The pyramid run failed
    Run(PyramidError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        if let CliError::Run(PyramidError::ToolUnavailable { command, .. }) = self {
            eprintln!();
            eprintln!("'{command}' is part of ImageMagick. Install it with:");
            eprintln!("  sudo apt install imagemagick   (Debian/Ubuntu)");
            eprintln!("  brew install imagemagick       (macOS)");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Run(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Run(e) => Some(e),
            _ => None,
        }
    }
}
