//! Run configuration
//!
//! [`PyramidConfig`] is the validated, immutable configuration value
//! threaded through every pipeline stage. All validation happens at
//! construction so the stages themselves have no input error states.

use super::error::PyramidError;
use crate::geometry::DEFAULT_TILE_SIZE;
use std::path::PathBuf;

/// Name of the scratch directory requested under the base directory.
pub const SCRATCH_DIR_NAME: &str = ".tmp";

/// Name of the output directory requested under the base directory.
pub const OUTPUT_DIR_NAME: &str = "tiles";

/// Default coarsest zoom level.
pub const DEFAULT_MIN_ZOOM: u32 = 0;

/// Default finest zoom level.
pub const DEFAULT_MAX_ZOOM: u32 = 2;

/// Raw zoom/tile-size options as they arrive from the command line.
///
/// `None` means "not given"; defaults are applied during validation. A
/// `zoom` value collapses the range to that single level, overriding both
/// bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomOptions {
    pub min_zoom: Option<u32>,
    pub max_zoom: Option<u32>,
    pub zoom: Option<u32>,
    pub tile_size: Option<u32>,
}

/// Validated configuration for one pyramid run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidConfig {
    /// Source image file name, resolved against `base_dir`
    pub image: String,
    /// Directory the source image lives in and the workspace is created in
    pub base_dir: PathBuf,
    /// Coarsest user-facing zoom level (inclusive)
    pub min_zoom: u32,
    /// Finest user-facing zoom level (inclusive)
    pub max_zoom: u32,
    /// Edge length of a square tile, in pixels
    pub tile_size: u32,
    /// Requested scratch directory (collision-resolved at creation)
    pub scratch_dir: PathBuf,
    /// Requested output directory (collision-resolved at creation)
    pub output_dir: PathBuf,
}

impl PyramidConfig {
    /// Validates options into a run configuration rooted at the current
    /// directory.
    ///
    /// The zoom range is checked before a `zoom` override collapses it, so
    /// an inconsistent `--min-zoom`/`--max-zoom` pair is rejected even when
    /// `--zoom` would have masked it.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the image name is empty, the resolved
    /// `min_zoom` exceeds `max_zoom`, or `tile_size` is zero.
    pub fn new(image: impl Into<String>, opts: ZoomOptions) -> Result<Self, PyramidError> {
        let image = image.into();
        if image.is_empty() {
            return Err(PyramidError::InvalidInput(
                "Please provide an image.".to_string(),
            ));
        }

        let mut min_zoom = opts.min_zoom.unwrap_or(DEFAULT_MIN_ZOOM);
        let mut max_zoom = opts.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM);
        if min_zoom > max_zoom {
            return Err(PyramidError::InvalidInput(
                "Min zoom is greater than max zoom.".to_string(),
            ));
        }

        if let Some(zoom) = opts.zoom {
            min_zoom = zoom;
            max_zoom = zoom;
        }

        let tile_size = opts.tile_size.unwrap_or(DEFAULT_TILE_SIZE);
        if tile_size == 0 {
            return Err(PyramidError::InvalidInput(
                "Tile size must be positive.".to_string(),
            ));
        }

        let base_dir = PathBuf::from(".");
        Ok(Self {
            image,
            scratch_dir: base_dir.join(SCRATCH_DIR_NAME),
            output_dir: base_dir.join(OUTPUT_DIR_NAME),
            base_dir,
            min_zoom,
            max_zoom,
            tile_size,
        })
    }

    /// Rebases the source lookup and both workspace directories onto `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.scratch_dir = dir.join(SCRATCH_DIR_NAME);
        self.output_dir = dir.join(OUTPUT_DIR_NAME);
        self.base_dir = dir;
        self
    }

    /// Internal 1-based levels to generate, coarsest first.
    ///
    /// The internal counter is the user-facing zoom plus one, so the output
    /// folder name (`level - 1`) maps 1:1 to user-facing zoom values.
    pub fn levels(&self) -> std::ops::RangeInclusive<u32> {
        (self.min_zoom + 1)..=(self.max_zoom + 1)
    }
}
