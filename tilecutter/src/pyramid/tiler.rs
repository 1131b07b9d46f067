//! Grid tiler
//!
//! Cuts one zoom level's working image into its grid of tiles. Columns are
//! fanned out concurrently; each column creates its output directory, then
//! fans out its rows, each row invoking one crop. Per-tile directories are
//! created idempotently (`create_dir_all`, exists-is-fine) — unlike the
//! top-level workspace directories, their names are unique per level and
//! column by construction, so collision suffixing would be wrong here.

use super::error::PyramidError;
use crate::geometry::LevelGeometry;
use crate::image::ImageFile;
use crate::magick::{ImageOperator, MagickError};
use futures::future::join_all;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Cuts every tile of `geometry` out of `working` into
/// `output_dir/<level-1>/<column>/<row><ext>`. Returns the number of tiles
/// written.
pub(super) async fn cut_level<M: ImageOperator>(
    operator: &M,
    geometry: &LevelGeometry,
    working: &ImageFile,
    output_dir: &Path,
) -> Result<u64, PyramidError> {
    // Folder name is the user-facing zoom value
    let level_dir = output_dir.join((geometry.level - 1).to_string());

    let columns = (0..geometry.columns)
        .map(|column| cut_column(operator, geometry, working, &level_dir, column));

    join_all(columns)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(geometry.tile_count())
}

/// Creates one column directory, then crops every tile in the column.
async fn cut_column<M: ImageOperator>(
    operator: &M,
    geometry: &LevelGeometry,
    working: &ImageFile,
    level_dir: &Path,
    column: u32,
) -> Result<(), PyramidError> {
    let column_dir = level_dir.join(column.to_string());
    debug!("Creating dir: {}", column_dir.display());
    fs::create_dir_all(&column_dir)
        .await
        .map_err(|source| PyramidError::Io {
            path: column_dir.clone(),
            source,
        })?;

    let src = working.path();
    let ext = working.ext();

    let rows = (0..geometry.rows).map(|row| {
        let tile_path = column_dir.join(format!("{row}{ext}"));
        let crop_x = column * geometry.tile_size;
        let crop_y = row * geometry.tile_size;
        let src = &src;
        async move {
            debug!("Creating tile: {}", tile_path.display());
            operator
                .crop(
                    src,
                    geometry.tile_size,
                    geometry.tile_size,
                    crop_x,
                    crop_y,
                    &tile_path,
                )
                .await
        }
    });

    join_all(rows)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, MagickError>>()?;

    Ok(())
}
