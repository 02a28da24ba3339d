//! Per-image slicing.
//!
//! Decodes one source image, plans its grid, then crops and writes every
//! region in raster order. The source file is never modified.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::{debug, info};

use crate::error::SliceError;

use super::grid::{GridSpec, Region};
use super::naming::SliceNamer;

// =============================================================================
// Image Descriptor
// =============================================================================

/// A decoded source image together with where it came from.
#[derive(Debug)]
pub struct ImageDescriptor {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    image: DynamicImage,
}

impl ImageDescriptor {
    /// Open and decode an image from disk.
    ///
    /// The decoder is chosen from the file content, falling back to the
    /// extension when the content is not recognised.
    pub fn open(path: &Path) -> Result<Self, SliceError> {
        let decode_error = |message: String| SliceError::Decode {
            path: path.to_path_buf(),
            message,
        };

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;
        let (width, height) = image.dimensions();

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            image,
        })
    }

    /// Crop a region out of the decoded image.
    pub fn crop(&self, region: &Region) -> DynamicImage {
        self.image
            .crop_imm(region.left, region.top, region.width(), region.height())
    }
}

// =============================================================================
// Slice Outcome
// =============================================================================

/// What happened to a single source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceOutcome {
    /// Slices were written
    Sliced { slices: usize },

    /// Image was too small for the requested slice size
    Skipped { width: u32, height: u32 },
}

// =============================================================================
// Image Slicer
// =============================================================================

/// Slices individual images according to a fixed grid and output location.
#[derive(Debug, Clone)]
pub struct ImageSlicer {
    grid: GridSpec,
    destination: Option<PathBuf>,
}

impl ImageSlicer {
    /// Create a slicer.
    ///
    /// With `destination` set to `None`, slices land next to their source.
    /// The destination directory must already exist.
    pub fn new(grid: GridSpec, destination: Option<PathBuf>) -> Self {
        Self { grid, destination }
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Slice one image.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded, its name cannot be
    /// split into stem and extension, or a slice fails to encode or write.
    /// Slices written before a write failure are left on disk.
    pub fn slice_image(&self, path: &Path) -> Result<SliceOutcome, SliceError> {
        let descriptor = ImageDescriptor::open(path)?;

        let regions = self.grid.plan(descriptor.width, descriptor.height);
        if regions.is_empty() {
            info!(
                path = %path.display(),
                width = descriptor.width,
                height = descriptor.height,
                "skipped: too small"
            );
            return Ok(SliceOutcome::Skipped {
                width: descriptor.width,
                height: descriptor.height,
            });
        }

        let namer = SliceNamer::for_source(path, self.destination())?;

        for region in &regions {
            let target = namer.path_for(region.row, region.column);
            descriptor
                .crop(region)
                .save(&target)
                .map_err(|e| SliceError::Write {
                    path: target.clone(),
                    message: e.to_string(),
                })?;
            debug!(
                path = %target.display(),
                row = region.row,
                column = region.column,
                "wrote slice"
            );
        }

        info!(
            path = %path.display(),
            slices = regions.len(),
            "sliced image"
        );
        Ok(SliceOutcome::Sliced {
            slices: regions.len(),
        })
    }
}
