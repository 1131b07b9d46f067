//! Viewer page rendering
//!
//! Renders the embedded Leaflet template with the resolved zoom bounds,
//! tile size and tile extension, and writes it as `index.html` next to the
//! tile tree so the pyramid can be inspected in a browser straight away.
//! Substitution is plain placeholder replacement; the handful of values
//! involved does not warrant a template engine.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

const TEMPLATE: &str = include_str!("template.html");

/// Renders the viewer page for the given run parameters.
pub fn render(min_zoom: u32, max_zoom: u32, tile_size: u32, ext: &str) -> String {
    TEMPLATE
        .replace("{{minZoom}}", &min_zoom.to_string())
        .replace("{{maxZoom}}", &max_zoom.to_string())
        .replace("{{tileSize}}", &tile_size.to_string())
        .replace("{{ext}}", ext)
}

/// Writes the rendered viewer page into `output_dir` and returns its path.
pub async fn write_page(
    output_dir: &Path,
    min_zoom: u32,
    max_zoom: u32,
    tile_size: u32,
    ext: &str,
) -> Result<PathBuf, io::Error> {
    let path = output_dir.join("index.html");
    fs::write(&path, render(min_zoom, max_zoom, tile_size, ext)).await?;
    Ok(path)
}
