//! Pyramid orchestration
//!
//! [`PyramidBuilder`] drives a run through its strict stage sequence:
//! validate input (done at [`PyramidConfig`] construction) → verify tooling
//! → build workspace → probe source dimensions → generate levels → remove
//! scratch → write the viewer page. Each stage gates the next; the first
//! failure short-circuits everything that remains.
//!
//! Within a stage, siblings (commands to verify, zoom levels, columns,
//! rows) are fanned out with `join_all`: all are launched at once with no
//! concurrency cap, the stage completes only when every sibling has
//! settled, and the aggregate result is the first error if any failed.
//! In-flight siblings are never cancelled — one failing crop does not stop
//! the crops already running next to it.

mod config;
mod error;
mod tiler;

pub use config::{
    PyramidConfig, ZoomOptions, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, OUTPUT_DIR_NAME,
    SCRATCH_DIR_NAME,
};
pub use error::PyramidError;

use crate::geometry::plan_level;
use crate::image::ImageFile;
use crate::magick::ImageOperator;
use crate::viewer;
use crate::workspace::Workspace;
use futures::future::join_all;
use std::path::PathBuf;
use tracing::info;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidReport {
    /// Directory the tile tree and viewer page were written to
    /// (collision-suffixed when `tiles` was taken)
    pub output_dir: PathBuf,
    /// Total number of tiles written across all levels
    pub tile_count: u64,
    /// Resolved coarsest zoom level
    pub min_zoom: u32,
    /// Resolved finest zoom level
    pub max_zoom: u32,
}

/// Orchestrates one pyramid run over an [`ImageOperator`].
pub struct PyramidBuilder<M: ImageOperator> {
    config: PyramidConfig,
    operator: M,
}

impl<M: ImageOperator> PyramidBuilder<M> {
    /// Creates a builder for one run.
    pub fn new(config: PyramidConfig, operator: M) -> Self {
        Self { config, operator }
    }

    /// Runs the pipeline to completion.
    ///
    /// On success the output directory holds the full tile tree plus
    /// `index.html` and the scratch directory is gone. On failure the error
    /// of the first failed stage is returned and nothing is rolled back:
    /// the scratch directory and any tiles already written stay on disk.
    pub async fn run(self) -> Result<PyramidReport, PyramidError> {
        info!(
            "Tiling {} (zoom {}..={}, {}px tiles)",
            self.config.image, self.config.min_zoom, self.config.max_zoom, self.config.tile_size
        );

        self.verify_tooling().await?;

        let workspace =
            Workspace::create(&self.config.scratch_dir, &self.config.output_dir).await?;

        let source = self.probe_source().await?;
        let tile_count = self.generate_levels(&workspace, &source).await?;

        workspace.remove_scratch().await?;

        let page = viewer::write_page(
            workspace.output_dir(),
            self.config.min_zoom,
            self.config.max_zoom,
            self.config.tile_size,
            &source.ext(),
        )
        .await
        .map_err(|err| PyramidError::Io {
            path: workspace.output_dir().to_path_buf(),
            source: err,
        })?;
        info!("Viewer page written: {}", page.display());

        Ok(PyramidReport {
            output_dir: workspace.output_dir().to_path_buf(),
            tile_count,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
        })
    }

    /// Probes every required external command concurrently.
    async fn verify_tooling(&self) -> Result<(), PyramidError> {
        info!("Verifying commands");
        let checks = self.operator.required_commands().iter().map(|command| {
            info!("Verifying: {}", command);
            async move {
                self.operator
                    .verify(command)
                    .await
                    .map_err(|source| PyramidError::ToolUnavailable {
                        command: command.to_string(),
                        source,
                    })
            }
        });

        join_all(checks)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }

    /// Reads the source image's dimensions from the external tool.
    async fn probe_source(&self) -> Result<ImageFile, PyramidError> {
        info!("Getting image dimension");
        let source = ImageFile::new(self.config.image.clone(), &self.config.base_dir);
        let (width, height) = self.operator.probe_dimensions(&source.path()).await?;
        if width == 0 || height == 0 {
            return Err(PyramidError::InvalidInput(format!(
                "Source image has zero dimensions ({width}x{height})."
            )));
        }
        info!("Image size: {}px x {}px", width, height);
        Ok(source.resized(width, height))
    }

    /// Fans out every zoom level concurrently. Returns the total tile count.
    async fn generate_levels(
        &self,
        workspace: &Workspace,
        source: &ImageFile,
    ) -> Result<u64, PyramidError> {
        info!("Creating tiles");
        let (width, height) = source.dimensions().ok_or_else(|| {
            PyramidError::InvalidInput("Source dimensions were not probed.".to_string())
        })?;

        let levels = self
            .config
            .levels()
            .map(|level| self.generate_level(workspace, source, width, height, level));

        let counts = join_all(levels)
            .await
            .into_iter()
            .collect::<Result<Vec<u64>, _>>()?;
        Ok(counts.iter().sum())
    }

    /// Produces one level's working image (scale, then extend) and cuts it
    /// into tiles.
    async fn generate_level(
        &self,
        workspace: &Workspace,
        source: &ImageFile,
        width: u32,
        height: u32,
        level: u32,
    ) -> Result<u64, PyramidError> {
        info!("Creating image @ zoom {}", level);
        let geometry = plan_level(width, height, self.config.tile_size, level);

        let working = ImageFile::with_dimensions(
            format!("{}{}", level, source.ext()),
            workspace.scratch_dir(),
            geometry.padded_width,
            geometry.padded_height,
        );

        info!("Resizing image @ zoom {}", level);
        self.operator
            .scale(&source.path(), geometry.scale_percent, &working.path())
            .await?;

        info!("Extending image @ zoom {}", level);
        self.operator
            .extend_canvas(&working.path(), geometry.padded_width, geometry.padded_height)
            .await?;

        tiler::cut_level(&self.operator, &geometry, &working, workspace.output_dir()).await
    }
}
