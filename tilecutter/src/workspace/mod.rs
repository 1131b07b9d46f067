//! Workspace lifecycle
//!
//! A run owns two top-level directories: a scratch directory for per-level
//! working images and the output directory receiving the tile tree. Both are
//! created up front with collision resolution — an existing directory is
//! never reused or merged; instead the leaf name gets an incrementing
//! numeric suffix (`tiles`, `tiles1`, `tiles2`, …) until a free path is
//! found. Per-tile subdirectories inside the output tree do NOT get this
//! treatment: their names are partitioned by construction, so they are
//! created idempotently by the tiler.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

/// Errors from workspace directory management.
///
/// A "does not exist" result while probing is not an error — it is the
/// signal to create the directory. Everything else is fatal.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Probing a candidate path failed for a reason other than "not found".
    #[error("Failed to probe '{path}': {source}")]
    Probe { path: PathBuf, source: io::Error },

    /// Recursive directory creation failed.
    #[error("Failed to create directory '{path}': {source}")]
    Create { path: PathBuf, source: io::Error },

    /// Removing the scratch directory failed.
    #[error("Failed to remove directory '{path}': {source}")]
    Remove { path: PathBuf, source: io::Error },
}

/// The two directories a run works in.
///
/// `scratch_dir` holds intermediate per-level images and is removed after a
/// successful run; `output_dir` holds the finished tile tree and persists.
/// Either may carry a numeric suffix when the requested path was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    scratch_dir: PathBuf,
    output_dir: PathBuf,
}

impl Workspace {
    /// Creates the scratch and output directories, resolving collisions
    /// independently for each. Both creations run concurrently.
    pub async fn create(scratch: &Path, output: &Path) -> Result<Self, WorkspaceError> {
        let (scratch_dir, output_dir) =
            tokio::join!(create_unique_dir(scratch), create_unique_dir(output));
        Ok(Self {
            scratch_dir: scratch_dir?,
            output_dir: output_dir?,
        })
    }

    /// The directory holding intermediate per-level images.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// The directory receiving the tile tree and viewer page.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Removes the scratch directory and everything in it.
    ///
    /// Tiles already written to the output directory are untouched either
    /// way; a removal failure surfaces as an error without undoing them.
    pub async fn remove_scratch(&self) -> Result<(), WorkspaceError> {
        info!("Cleaning workspace: {}", self.scratch_dir.display());
        fs::remove_dir_all(&self.scratch_dir)
            .await
            .map_err(|source| WorkspaceError::Remove {
                path: self.scratch_dir.clone(),
                source,
            })
    }
}

/// Creates `desired`, or the first free sibling formed by appending an
/// incrementing counter to it (`p`, `p1`, `p2`, …), recursing through any
/// missing intermediate segments. Returns the path actually created.
pub async fn create_unique_dir(desired: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut candidate = desired.to_path_buf();
    let mut counter: u32 = 0;

    loop {
        match fs::metadata(&candidate).await {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("Creating directory: {}", candidate.display());
                fs::create_dir_all(&candidate)
                    .await
                    .map_err(|source| WorkspaceError::Create {
                        path: candidate.clone(),
                        source,
                    })?;
                return Ok(candidate);
            }
            Err(source) => {
                return Err(WorkspaceError::Probe {
                    path: candidate,
                    source,
                })
            }
            Ok(_) => {
                counter += 1;
                debug!(
                    "Directory exists, retrying with suffix {}: {}",
                    counter,
                    candidate.display()
                );
                let mut suffixed = desired.as_os_str().to_os_string();
                suffixed.push(counter.to_string());
                candidate = PathBuf::from(suffixed);
            }
        }
    }
}
