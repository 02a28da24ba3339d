use std::path::PathBuf;

use thiserror::Error;

/// Errors detected while validating the command line, before any work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source directory path is relative
    #[error("Invalid path to folder with images: {0} is not an absolute path")]
    SourceNotAbsolute(PathBuf),

    /// Source directory does not exist
    #[error("Invalid path to folder with images: {0} does not exist")]
    SourceMissing(PathBuf),

    /// Source path exists but is not a directory
    #[error("Invalid path to folder with images: {0} is not a directory")]
    SourceNotDirectory(PathBuf),

    /// Slice width or height is zero
    #[error("Invalid slice size: {width}x{height} (both dimensions must be positive)")]
    InvalidSliceSize { width: u32, height: u32 },

    /// Destination directory path is relative
    #[error("Invalid path to folder for slices: {0} is not an absolute path")]
    DestinationNotAbsolute(PathBuf),

    /// Destination directory could not be created
    #[error("Failed to create folder for slices {path}: {source}")]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when listing the source directory
#[derive(Debug, Error)]
pub enum ScanError {
    /// Directory could not be read
    #[error("Failed to read folder {path}: {message}")]
    ReadDir { path: PathBuf, message: String },
}

/// Per-image failures. These are isolated to one source image and never
/// abort the other images of a run.
#[derive(Debug, Error)]
pub enum SliceError {
    /// Source image could not be opened or decoded
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// A slice could not be encoded or written
    #[error("Failed to write slice {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Decoding or encoding panicked
    #[error("Slicing {path} panicked: {message}")]
    Panicked { path: PathBuf, message: String },

    /// Source path has no usable file stem or extension
    #[error("Cannot derive slice names from {0}")]
    InvalidFileName(PathBuf),
}
