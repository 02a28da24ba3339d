//! Slicing layer.
//!
//! Everything needed to turn one source image into a grid of slice files.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              ImageSlicer                │
//! │   decode → plan → crop → name → save    │
//! └──────────┬─────────────────┬────────────┘
//!            │                 │
//!            ▼                 ▼
//! ┌───────────────────┐ ┌──────────────────┐
//! │   plan_regions    │ │   SliceNamer     │
//! │ (grid geometry)   │ │ (output paths)   │
//! └───────────────────┘ └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use image_slicer::slice::plan_regions;
//!
//! let regions = plan_regions(445, 306, 200, 100, true);
//! assert_eq!(regions.len(), 6);
//! assert_eq!(regions[5].right, 445);
//! assert_eq!(regions[5].bottom, 306);
//! ```

mod grid;
mod naming;
mod slicer;

pub use grid::{plan_regions, GridSpec, Region};
pub use naming::{slice_file_name, SliceNamer};
pub use slicer::{ImageDescriptor, ImageSlicer, SliceOutcome};
