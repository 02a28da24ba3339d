//! Test utilities for integration tests.
//!
//! Helpers for writing synthetic source images and inspecting the slices
//! produced from them.

use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Write a gradient RGB image to `dir/name`, encoded by the extension of
/// `name`.
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 7) as u8])
    });
    let path = dir.join(name);
    img.save(&path).expect("failed to write test image");
    path
}

/// Write an image in an explicit format, whatever the file name says.
pub fn write_image_as(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> PathBuf {
    let img = RgbImage::from_pixel(width, height, Rgb([90, 120, 150]));
    let path = dir.join(name);
    img.save_with_format(&path, format)
        .expect("failed to write test image");
    path
}

/// Write an RGBA image with a transparent left half in an explicit format.
pub fn write_rgba_image_as(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> PathBuf {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([200, 40, 40, 255])
        }
    });
    let path = dir.join(name);
    img.save_with_format(&path, format)
        .expect("failed to write test image");
    path
}

/// Write a file that is not a decodable image.
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not an image").expect("failed to write file");
    path
}

/// Names of all files in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("failed to read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Names of the slice files derived from `base` in `dir`, sorted.
pub fn slice_names(dir: &Path, base: &str) -> Vec<String> {
    let prefix = format!("{base}_");
    file_names(dir)
        .into_iter()
        .filter(|n| n.starts_with(&prefix))
        .collect()
}

/// Pixel dimensions of an image file.
pub fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path)
        .expect("failed to open slice")
        .dimensions()
}
