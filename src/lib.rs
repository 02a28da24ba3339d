//! # Image Slicer
//!
//! Cuts every image in a folder into a grid of fixed-size slices, spreading
//! the images across one worker per CPU.
//!
//! ## Features
//!
//! - **Grid slicing**: Fixed `width x height` slices in raster order
//! - **Remainder merging**: Optionally fold a short last row/column into the previous one
//! - **Deterministic names**: `{name}_{row:02}_{column:02}.{ext}` next to the source or in a destination folder
//! - **Parallel**: Contiguous chunks of the image list, one blocking task per chunk
//!
//! ## Architecture
//!
//! - [`config`] - CLI arguments and validation into a [`SliceJob`]
//! - [`source`] - Discovery of the images to slice
//! - [`slice`] - Grid planning, naming and per-image slicing
//! - [`dispatch`] - Work partitioning and parallel workers
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use image_slicer::{collect_image_paths, Dispatcher, GridSpec, ImageSlicer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let images = collect_image_paths(Path::new("/data/photos")).unwrap();
//!     let slicer = ImageSlicer::new(GridSpec::new(200, 100, true), None);
//!
//!     let summary = Dispatcher::with_host_parallelism(slicer).run(&images).await;
//!     println!("wrote {} slices", summary.slices_written);
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod slice;
pub mod source;

// Re-export commonly used types
pub use config::{Config, SliceJob};
pub use dispatch::{
    guard_panics, host_parallelism, partition, run_worker, DispatchSummary, Dispatcher,
    WorkerReport,
};
pub use error::{ConfigError, ScanError, SliceError};
pub use slice::{
    plan_regions, slice_file_name, GridSpec, ImageDescriptor, ImageSlicer, Region, SliceNamer,
    SliceOutcome,
};
pub use source::{collect_image_paths, is_supported_image, SUPPORTED_EXTENSIONS};
