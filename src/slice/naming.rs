//! Output naming for slices.
//!
//! A slice of `photo.JPG` at row 2, column 11 is written as
//! `photo_02_11.jpg` into the destination directory, or next to the source
//! image when no destination was given. Indices below 100 are zero-padded to
//! two digits; larger indices are rendered in full. No uniqueness check is
//! made, so colliding names overwrite each other.

use std::path::{Path, PathBuf};

use crate::error::SliceError;

/// Format the file name of one slice.
pub fn slice_file_name(base: &str, row: u32, column: u32, extension: &str) -> String {
    format!("{base}_{row:02}_{column:02}.{extension}")
}

/// Derives slice paths for a single source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceNamer {
    directory: PathBuf,
    base: String,
    extension: String,
}

impl SliceNamer {
    /// Build a namer for `source`.
    ///
    /// `destination` overrides the output directory; `None` or an empty path
    /// means "next to the source image". The base name is the file stem (so
    /// `a.b.png` gives `a.b`) and the extension is lower-cased.
    pub fn for_source(source: &Path, destination: Option<&Path>) -> Result<Self, SliceError> {
        let invalid = || SliceError::InvalidFileName(source.to_path_buf());

        let base = source
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;
        let extension = source
            .extension()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;

        let directory = match destination {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        Ok(Self {
            directory,
            base: base.to_string(),
            extension: extension.to_lowercase(),
        })
    }

    /// Directory slices are written into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Source file name without its extension.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Lower-cased output extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Full output path of the slice at `(row, column)`.
    pub fn path_for(&self, row: u32, column: u32) -> PathBuf {
        self.directory
            .join(slice_file_name(&self.base, row, column, &self.extension))
    }
}
