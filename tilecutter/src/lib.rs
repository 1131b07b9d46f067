//! Tilecutter - slippy-map tile pyramids from a single raster image
//!
//! This library turns one raster image into a directory tree of fixed-size
//! square tiles, one subtree per zoom level, suitable for a web map viewer.
//! The pixel work itself (scaling, canvas extension, cropping) is delegated
//! to ImageMagick invoked as an external command; this crate owns the
//! geometry, the workspace lifecycle and the concurrent orchestration.
//!
//! # High-Level API
//!
//! ```ignore
//! use tilecutter::magick::ImageMagick;
//! use tilecutter::pyramid::{PyramidBuilder, PyramidConfig, ZoomOptions};
//!
//! let config = PyramidConfig::new("map.png", ZoomOptions::default(), None)?;
//! let report = PyramidBuilder::new(config, ImageMagick::new()).run().await?;
//! println!("{} tiles in {}", report.tile_count, report.output_dir.display());
//! ```

pub mod geometry;
pub mod image;
pub mod logging;
pub mod magick;
pub mod pyramid;
pub mod viewer;
pub mod workspace;

/// Version of the tilecutter library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
