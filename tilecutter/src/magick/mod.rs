//! External image operator boundary
//!
//! All pixel work is delegated to ImageMagick's `convert` and `identify`
//! commands, invoked as external processes. [`ImageOperator`] is the trait
//! boundary the orchestrator depends on, enabling dependency injection and
//! testability; [`ImageMagick`] is the production implementation shelling
//! out via `tokio::process`.
//!
//! Each operation is a single black-box command invocation: it either
//! produces its output file and exits zero, or fails with a non-zero status
//! surfaced as [`MagickError::Failed`]. A command that cannot be spawned at
//! all surfaces as [`MagickError::Unavailable`], which tooling verification
//! uses to fail a run before any work starts.

use std::future::Future;
use std::io;
use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Commands a run needs on the PATH.
pub const REQUIRED_COMMANDS: [&str; 2] = ["convert", "identify"];

/// Errors from external image command invocations.
#[derive(Debug, Error)]
pub enum MagickError {
    /// The command could not be spawned at all (typically not installed).
    #[error("Command '{command}' could not be invoked: {source}")]
    Unavailable { command: String, source: io::Error },

    /// The command ran but exited non-zero.
    #[error("Command '{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// `identify` replied with something other than `<width>,<height>`.
    #[error("Could not parse image dimensions from identify output '{output}'")]
    MalformedDimensions { output: String },
}

/// The four image operations the pyramid pipeline consumes, plus the
/// version probe used to verify tooling before a run starts.
///
/// Implementations perform the pixel work; callers only ever see paths and
/// geometry. Futures are `Send` so operations can be fanned out freely.
pub trait ImageOperator: Send + Sync {
    /// Commands that must respond to [`verify`](Self::verify) before a run.
    fn required_commands(&self) -> &[&str];

    /// Checks that `command` responds to a version probe.
    fn verify(&self, command: &str) -> impl Future<Output = Result<(), MagickError>> + Send;

    /// Reads the pixel dimensions of the image at `path`.
    fn probe_dimensions(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<(u32, u32), MagickError>> + Send;

    /// Scales `src` by `percent` (aspect-preserving) into `dst`.
    fn scale(
        &self,
        src: &Path,
        percent: f64,
        dst: &Path,
    ) -> impl Future<Output = Result<(), MagickError>> + Send;

    /// Extends the canvas of the image at `path`, in place, to exactly
    /// `width × height`. Anchored top-left; padding is transparent.
    fn extend_canvas(
        &self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> impl Future<Output = Result<(), MagickError>> + Send;

    /// Crops a `width × height` window at `(x, y)` out of `src` into `dst`.
    fn crop(
        &self,
        src: &Path,
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        dst: &Path,
    ) -> impl Future<Output = Result<(), MagickError>> + Send;
}

/// Production operator shelling out to ImageMagick.
#[derive(Debug, Clone, Default)]
pub struct ImageMagick;

impl ImageMagick {
    /// Creates a new ImageMagick-backed operator.
    pub fn new() -> Self {
        Self
    }
}

/// Runs a command to completion, capturing output. Non-zero exit becomes
/// `Failed` with the trimmed stderr; a spawn error becomes `Unavailable`.
async fn run(program: &str, mut command: Command) -> Result<String, MagickError> {
    let output = command
        .output()
        .await
        .map_err(|source| MagickError::Unavailable {
            command: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(MagickError::Failed {
            command: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parses `identify -format %w,%h` output.
fn parse_dimensions(output: &str) -> Result<(u32, u32), MagickError> {
    let malformed = || MagickError::MalformedDimensions {
        output: output.to_string(),
    };

    let (w, h) = output.trim().split_once(',').ok_or_else(malformed)?;
    Ok((
        w.trim().parse().map_err(|_| malformed())?,
        h.trim().parse().map_err(|_| malformed())?,
    ))
}

impl ImageOperator for ImageMagick {
    fn required_commands(&self) -> &[&str] {
        &REQUIRED_COMMANDS
    }

    async fn verify(&self, command: &str) -> Result<(), MagickError> {
        debug!("Verifying command: {}", command);
        let mut cmd = Command::new(command);
        cmd.arg("-version");
        run(command, cmd).await.map(|_| ())
    }

    async fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), MagickError> {
        debug!("Probing dimensions: {}", path.display());
        let mut cmd = Command::new("identify");
        cmd.arg("-format").arg("%w,%h").arg(path);
        let stdout = run("identify", cmd).await?;
        parse_dimensions(&stdout)
    }

    async fn scale(&self, src: &Path, percent: f64, dst: &Path) -> Result<(), MagickError> {
        debug!("Scaling {} by {}% -> {}", src.display(), percent, dst.display());
        let mut cmd = Command::new("convert");
        cmd.arg(src)
            .arg("-resize")
            .arg(format!("{percent}%"))
            .arg(dst);
        run("convert", cmd).await.map(|_| ())
    }

    async fn extend_canvas(&self, path: &Path, width: u32, height: u32) -> Result<(), MagickError> {
        debug!("Extending {} to {}x{}", path.display(), width, height);
        let mut cmd = Command::new("convert");
        cmd.arg(path)
            .arg("-background")
            .arg("none")
            .arg("-gravity")
            .arg("NorthWest")
            .arg("-extent")
            .arg(format!("{width}x{height}"))
            .arg(path);
        run("convert", cmd).await.map(|_| ())
    }

    async fn crop(
        &self,
        src: &Path,
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        dst: &Path,
    ) -> Result<(), MagickError> {
        debug!("Cropping {} at {}+{} -> {}", src.display(), x, y, dst.display());
        let mut cmd = Command::new("convert");
        cmd.arg(src)
            .arg("-crop")
            .arg(format!("{width}x{height}+{x}+{y}"))
            .arg(dst);
        run("convert", cmd).await.map(|_| ())
    }
}
