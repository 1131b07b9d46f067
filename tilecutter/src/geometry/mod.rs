//! Zoom level geometry planning
//!
//! Pure arithmetic that decides, for each zoom level, how much to scale the
//! source image, how much to pad it so it divides evenly into tiles, how
//! many tiles exist on each axis, and the pixel crop window of every tile.
//! No I/O happens here; the planner's output drives the external image
//! operations performed by the orchestrator.

mod types;

pub use types::{LevelGeometry, TileWindow, TileWindowIterator, DEFAULT_TILE_SIZE};

/// Plans the working-image geometry for one zoom level.
///
/// `level` is the 1-based internal level; level 1 is the coarsest, where the
/// image's longer side fits a single tile. The scale factor is chosen so the
/// longer side lands exactly on `tile_size * 2^(level - 1)` pixels, with the
/// aspect ratio preserved. The canvas is then padded right and bottom to the
/// smallest multiple of `tile_size` covering each scaled axis.
///
/// # Arguments
///
/// * `source_width` - Source image width in pixels (positive)
/// * `source_height` - Source image height in pixels (positive)
/// * `tile_size` - Edge length of a square tile in pixels (positive)
/// * `level` - 1-based zoom level
pub fn plan_level(source_width: u32, source_height: u32, tile_size: u32, level: u32) -> LevelGeometry {
    // Target length of the longer side at this level. u64 keeps the shift
    // safe for deep pyramids.
    let size = (tile_size as u64) << (level - 1);

    let max_side = source_width.max(source_height);
    let factor = size as f64 / max_side as f64;

    let scaled_width = source_width as f64 * factor;
    let scaled_height = source_height as f64 * factor;

    let columns = (scaled_width / tile_size as f64).ceil() as u32;
    let rows = (scaled_height / tile_size as f64).ceil() as u32;

    LevelGeometry {
        level,
        tile_size,
        scale_percent: factor * 100.0,
        scaled_width,
        scaled_height,
        columns,
        rows,
        padded_width: columns * tile_size,
        padded_height: rows * tile_size,
    }
}

#[cfg(test)]
mod tests;
