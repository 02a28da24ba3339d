//! Grid planning.
//!
//! Computes the rectangular regions an image is cut into. Regions are laid
//! out on a fixed grid of `slice_width` x `slice_height` cells anchored at the
//! top-left corner of the image.
//!
//! # Remainder handling
//!
//! A trailing row or column narrower than a full slice is either dropped
//! (default) or, with `merge_remainder`, absorbed into the last full row or
//! column, which is then extended up to the image edge. Each axis is handled
//! independently: an image that divides evenly horizontally but not vertically
//! only gets its last row extended.
//!
//! ```text
//!  merge off                      merge on
//! ┌──────┬──────┬──┐            ┌──────┬─────────┐
//! │ 0,0  │ 0,1  │  │            │ 0,0  │  0,1    │
//! ├──────┼──────┤  │            ├──────┼─────────┤
//! │ 1,0  │ 1,1  │  │            │ 1,0  │  1,1    │
//! ├──────┴──────┘  │            │      │         │
//! │   (dropped)    │            │      │         │
//! └────────────────┘            └──────┴─────────┘
//! ```

// =============================================================================
// Region
// =============================================================================

/// A half-open pixel rectangle `[left, right) x [top, bottom)` at a grid
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Zero-based grid row (top to bottom)
    pub row: u32,

    /// Zero-based grid column (left to right)
    pub column: u32,

    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    /// Width of the region in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the region in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

// =============================================================================
// Grid Spec
// =============================================================================

/// Slice geometry shared by every image of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub slice_width: u32,
    pub slice_height: u32,
    pub merge_remainder: bool,
}

impl GridSpec {
    pub fn new(slice_width: u32, slice_height: u32, merge_remainder: bool) -> Self {
        Self {
            slice_width,
            slice_height,
            merge_remainder,
        }
    }

    /// Number of full slices an image must hold along each axis before it is
    /// sliced at all.
    #[inline]
    pub fn minimum_divisions(&self) -> u32 {
        if self.merge_remainder {
            2
        } else {
            1
        }
    }

    /// Whether an image of the given size is too small to be sliced.
    ///
    /// Zero slice dimensions are treated as unsliceable rather than dividing
    /// by zero.
    pub fn is_too_small(&self, image_width: u32, image_height: u32) -> bool {
        if self.slice_width == 0 || self.slice_height == 0 {
            return true;
        }
        let min = self.minimum_divisions();
        image_width / self.slice_width < min || image_height / self.slice_height < min
    }

    /// Plan the regions for an image of the given size.
    pub fn plan(&self, image_width: u32, image_height: u32) -> Vec<Region> {
        plan_regions(
            image_width,
            image_height,
            self.slice_width,
            self.slice_height,
            self.merge_remainder,
        )
    }
}

// =============================================================================
// Planning
// =============================================================================

/// Compute the slice regions of an image in row-major order.
///
/// Returns an empty vector when the image holds fewer than one full slice per
/// axis (two with `merge_remainder`); callers treat that as a skip.
pub fn plan_regions(
    image_width: u32,
    image_height: u32,
    slice_width: u32,
    slice_height: u32,
    merge_remainder: bool,
) -> Vec<Region> {
    let spec = GridSpec::new(slice_width, slice_height, merge_remainder);
    if spec.is_too_small(image_width, image_height) {
        return Vec::new();
    }

    let rows = axis_spans(image_height, slice_height, merge_remainder);
    let columns = axis_spans(image_width, slice_width, merge_remainder);

    let mut regions = Vec::with_capacity(rows.len() * columns.len());
    for (row, &(top, bottom)) in rows.iter().enumerate() {
        for (column, &(left, right)) in columns.iter().enumerate() {
            regions.push(Region {
                row: row as u32,
                column: column as u32,
                left,
                top,
                right,
                bottom,
            });
        }
    }
    regions
}

/// Spans `(start, end)` along one axis.
///
/// Only spans that fully fit are emitted. With `merge`, the last full span is
/// stretched to `extent` when what follows it is shorter than `step`.
fn axis_spans(extent: u32, step: u32, merge: bool) -> Vec<(u32, u32)> {
    let mut spans = Vec::new();
    let mut start = 0u32;

    // `start <= extent` holds throughout, so the subtractions cannot underflow.
    while extent - start >= step {
        let mut end = start + step;
        if merge && extent - end < step {
            end = extent;
        }
        spans.push((start, end));
        start += step;
    }
    spans
}

// =============================================================================
// Tests
// =============================================================================
