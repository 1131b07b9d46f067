//! Tilecutter CLI - Command-line interface
//!
//! Cuts a raster image into a slippy-map tile pyramid: `./tiles/<zoom>/
//! <column>/<row><ext>` plus a viewer `index.html`, using ImageMagick for
//! the pixel work.

mod error;

use clap::Parser;
use error::CliError;
use tilecutter::logging::init_logging;
use tilecutter::magick::ImageMagick;
use tilecutter::pyramid::{PyramidBuilder, PyramidConfig, ZoomOptions};
use tracing::info;

#[derive(Parser)]
#[command(name = "tilecutter")]
#[command(version)]
#[command(about = "Cut a raster image into a slippy-map tile pyramid", long_about = None)]
struct Args {
    /// Source image to tile
    image: String,

    /// Coarsest zoom level to generate
    #[arg(long, value_name = "N")]
    min_zoom: Option<u32>,

    /// Finest zoom level to generate
    #[arg(long, value_name = "N")]
    max_zoom: Option<u32>,

    /// Generate exactly this zoom level (overrides --min-zoom and --max-zoom)
    #[arg(long, value_name = "N")]
    zoom: Option<u32>,

    /// Tile edge length in pixels
    #[arg(long, value_name = "PX")]
    tile_size: Option<u32>,

    /// Enable debug logging (per-tile detail)
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn zoom_options(&self) -> ZoomOptions {
        ZoomOptions {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            zoom: self.zoom,
            tile_size: self.tile_size,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        CliError::LoggingInit(e.to_string()).exit();
    }
    info!("tilecutter v{}", tilecutter::VERSION);

    let config = match PyramidConfig::new(&args.image, args.zoom_options()) {
        Ok(config) => config,
        Err(e) => CliError::Run(e).exit(),
    };

    match PyramidBuilder::new(config, ImageMagick::new()).run().await {
        Ok(report) => {
            info!("Conversion finished!");
            info!(
                "{} tiles created in {}",
                report.tile_count,
                report.output_dir.display()
            );
        }
        Err(e) => CliError::Run(e).exit(),
    }
}
