//! Configuration management for Image Slicer.
//!
//! Settings come from the command line, with environment variable fallbacks
//! for the optional flags:
//!
//! - `SLICER_MERGE_REMAINDER` - Merge a short trailing row/column (default: false)
//! - `SLICER_DESTINATION` - Absolute folder for slices (default: next to each source)
//! - `SLICER_WORKERS` - Worker count (default: number of CPUs)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use image_slicer::config::Config;
//!
//! let config = Config::parse();
//! let job = config.validate()?;
//! job.prepare_destination()?;
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::dispatch::host_parallelism;
use crate::error::ConfigError;
use crate::slice::GridSpec;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Image Slicer - cut every image in a folder into a grid of slices.
///
/// Processes the first-level jpg, jpeg, bmp, png, gif and tiff files of the
/// folder in parallel, one worker per CPU.
#[derive(Parser, Debug, Clone)]
#[command(name = "image-slicer")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Absolute path to the folder with images to slice.
    pub source_dir: PathBuf,

    /// Width of a slice in pixels.
    pub width: u32,

    /// Height of a slice in pixels.
    pub height: u32,

    /// Add a trailing row/column smaller than a slice to the previous one
    /// instead of dropping it.
    #[arg(short, long, alias = "add", default_value_t = false, env = "SLICER_MERGE_REMAINDER")]
    pub merge_remainder: bool,

    /// Absolute path to the folder where slices are saved. Created if missing.
    ///
    /// If not specified, slices are saved next to their source image.
    #[arg(short, long, alias = "save-to", env = "SLICER_DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Number of parallel workers.
    ///
    /// If not specified, uses the number of available CPUs.
    #[arg(short, long, env = "SLICER_WORKERS")]
    pub workers: Option<NonZeroUsize>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the arguments and build the job they describe.
    ///
    /// Only inspects the filesystem; the destination directory is not
    /// created here (see [`SliceJob::prepare_destination`]).
    pub fn validate(&self) -> Result<SliceJob, ConfigError> {
        let source = &self.source_dir;
        if !source.is_absolute() {
            return Err(ConfigError::SourceNotAbsolute(source.clone()));
        }
        if !source.exists() {
            return Err(ConfigError::SourceMissing(source.clone()));
        }
        if !source.is_dir() {
            return Err(ConfigError::SourceNotDirectory(source.clone()));
        }

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSliceSize {
                width: self.width,
                height: self.height,
            });
        }

        let destination = match &self.destination {
            Some(dir) if dir.as_os_str().is_empty() => None,
            Some(dir) if !dir.is_absolute() => {
                return Err(ConfigError::DestinationNotAbsolute(dir.clone()));
            }
            other => other.clone(),
        };

        Ok(SliceJob {
            source_dir: source.clone(),
            grid: GridSpec::new(self.width, self.height, self.merge_remainder),
            destination,
            workers: self.workers.unwrap_or_else(host_parallelism),
        })
    }
}

// =============================================================================
// Slice Job
// =============================================================================

/// A validated slicing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceJob {
    pub source_dir: PathBuf,
    pub grid: GridSpec,
    pub destination: Option<PathBuf>,
    pub workers: NonZeroUsize,
}

impl SliceJob {
    /// Create the destination directory if one was given and is missing.
    pub fn prepare_destination(&self) -> Result<(), ConfigError> {
        let Some(dir) = &self.destination else {
            return Ok(());
        };
        if dir.is_dir() {
            return Ok(());
        }

        std::fs::create_dir_all(dir).map_err(|source| ConfigError::DestinationCreate {
            path: dir.clone(),
            source,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
