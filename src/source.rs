//! Source image discovery.
//!
//! Only regular files directly inside the source directory are considered;
//! subdirectories are not descended into. A file qualifies when its
//! extension, compared case-insensitively, is one of
//! [`SUPPORTED_EXTENSIONS`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::ScanError;

/// Image extensions that are sliced.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "bmp", "png", "gif", "tiff"];

/// Whether a path names a supported image, judging by extension only.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List the supported images at the first level of `dir`, sorted by path.
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Failing to read the directory itself is fatal
            Err(e) if e.depth() == 0 => {
                return Err(ScanError::ReadDir {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if is_supported_image(path) {
            images.push(path.to_path_buf());
        } else {
            debug!(path = %path.display(), "ignoring non-image file");
        }
    }

    images.sort();
    Ok(images)
}
