//! Error types for the pyramid pipeline.

use crate::magick::MagickError;
use crate::workspace::WorkspaceError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pyramid run.
///
/// Every variant propagates unchanged to the top-level handler; there is no
/// local recovery, retry, or partial-result salvage. A failed run leaves
/// the scratch directory behind and may leave a partially populated output
/// tree.
#[derive(Debug, Error)]
pub enum PyramidError {
    /// Missing image argument, inverted zoom range, or zero tile size.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required external command did not respond to its version probe.
    #[error("Required command '{command}' is unavailable: {source}")]
    ToolUnavailable {
        command: String,
        #[source]
        source: MagickError,
    },

    /// Workspace directory creation, probing, or removal failed.
    #[error(transparent)]
    Filesystem(#[from] WorkspaceError),

    /// Per-tile directory creation or viewer page write failed.
    #[error("Filesystem error at '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    /// An image operation exited non-zero or produced unusable output.
    #[error(transparent)]
    ExternalOperation(#[from] MagickError),
}
