//! Geometry type definitions

/// Default edge length of a square tile, in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Geometry of one zoom level's working image.
///
/// Produced by [`plan_level`](super::plan_level); immutable once computed.
/// The padded canvas is always an exact grid of `columns × rows` tiles, so
/// every crop window yielded by [`tiles`](Self::tiles) lies fully inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelGeometry {
    /// 1-based internal zoom level (level 1 is the coarsest)
    pub level: u32,
    /// Edge length of a square tile, in pixels
    pub tile_size: u32,
    /// Resize percentage to hand to the image operator
    pub scale_percent: f64,
    /// Source width after scaling, before padding
    pub scaled_width: f64,
    /// Source height after scaling, before padding
    pub scaled_height: f64,
    /// Number of tiles along the x axis
    pub columns: u32,
    /// Number of tiles along the y axis
    pub rows: u32,
    /// Canvas width after padding, an exact multiple of `tile_size`
    pub padded_width: u32,
    /// Canvas height after padding, an exact multiple of `tile_size`
    pub padded_height: u32,
}

impl LevelGeometry {
    /// Total number of tiles in this level's grid.
    #[inline]
    pub fn tile_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Returns an iterator over every tile window in this level's grid.
    ///
    /// Windows are yielded in column-major order (column 0 rows 0..rows,
    /// then column 1, and so on), matching the order in which the tiler
    /// fans out work.
    #[inline]
    pub fn tiles(&self) -> TileWindowIterator {
        TileWindowIterator {
            geometry: *self,
            current: 0,
        }
    }
}

/// One cell of a zoom level's tile grid with its pixel crop origin.
///
/// `column` and `row` are 0-based and double as the output directory and
/// file names. The pixel window is
/// `[crop_x, crop_x + tile_size) × [crop_y, crop_y + tile_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileWindow {
    /// 0-based grid column (x axis)
    pub column: u32,
    /// 0-based grid row (y axis)
    pub row: u32,
    /// Left edge of the crop window, in pixels
    pub crop_x: u32,
    /// Top edge of the crop window, in pixels
    pub crop_y: u32,
}

/// Iterator over all tile windows of a level, in column-major order.
#[derive(Debug, Clone)]
pub struct TileWindowIterator {
    geometry: LevelGeometry,
    current: u64,
}

impl Iterator for TileWindowIterator {
    type Item = TileWindow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.geometry.tile_count() {
            return None;
        }

        let rows = self.geometry.rows as u64;
        let column = (self.current / rows) as u32;
        let row = (self.current % rows) as u32;

        self.current += 1;

        Some(TileWindow {
            column,
            row,
            crop_x: column * self.geometry.tile_size,
            crop_y: row * self.geometry.tile_size,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.geometry.tile_count() - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileWindowIterator {
    fn len(&self) -> usize {
        (self.geometry.tile_count() - self.current) as usize
    }
}
