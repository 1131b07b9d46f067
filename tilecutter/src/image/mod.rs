//! Image file descriptors
//!
//! [`ImageFile`] describes an image on disk without touching it: a file name,
//! the directory it lives in, and its pixel dimensions once known. The source
//! image starts out with unknown dimensions until the orchestrator probes
//! them; per-level working images are created with their geometry already
//! decided. Values are immutable; "updating" the dimensions produces a new
//! value.

use std::path::{Path, PathBuf};

/// An image file with a name, a containing directory, and (once known) its
/// pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    dir: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageFile {
    /// Creates a descriptor for an image whose dimensions are not yet known.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            width: None,
            height: None,
        }
    }

    /// Creates a descriptor with known dimensions.
    pub fn with_dimensions(
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Returns a copy of this descriptor with its dimensions filled in.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        Self {
            name: self.name.clone(),
            dir: self.dir.clone(),
            width: Some(width),
            height: Some(height),
        }
    }

    /// The image's file name, including extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the image: directory joined with the file name.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// The containing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file extension with its leading dot, or an empty string when the
    /// name has none. Tiles inherit this extension from the source image.
    pub fn ext(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!(".{ext}"),
            _ => String::new(),
        }
    }

    /// Both dimensions in pixels, if probed.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    /// Width in pixels, if probed.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Height in pixels, if probed.
    pub fn height(&self) -> Option<u32> {
        self.height
    }
}
