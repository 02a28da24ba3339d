//! Parallel dispatch of slicing work.
//!
//! One blocking task per chunk. Workers share nothing but the read-only
//! slicing parameters (each gets its own clone) and only meet again at the
//! final join. A failing or panicking image is logged and counted by its
//! worker, which then moves on to the next image of its chunk.

use std::num::NonZeroUsize;
use std::panic::{self, UnwindSafe};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::SliceError;
use crate::slice::{ImageSlicer, SliceOutcome};

use super::partition::partition;

// =============================================================================
// Reports
// =============================================================================

/// Tally of what one worker did with its chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerReport {
    /// Worker index (0-based)
    pub worker: usize,

    /// Images that produced slices
    pub sliced: usize,

    /// Images too small to slice
    pub skipped: usize,

    /// Images that failed to decode or write
    pub failed: Vec<PathBuf>,

    /// Slice files written
    pub slices_written: usize,
}

/// Totals across all workers of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub workers: usize,
    pub images_sliced: usize,
    pub images_skipped: usize,
    pub images_failed: usize,
    pub slices_written: usize,

    /// Workers whose task did not complete
    pub workers_lost: usize,
}

impl DispatchSummary {
    fn absorb(&mut self, report: &WorkerReport) {
        self.images_sliced += report.sliced;
        self.images_skipped += report.skipped;
        self.images_failed += report.failed.len();
        self.slices_written += report.slices_written;
    }

    /// Total images handled, whatever the outcome.
    pub fn images_processed(&self) -> usize {
        self.images_sliced + self.images_skipped + self.images_failed
    }
}

// =============================================================================
// Worker
// =============================================================================

/// Slice every image of a chunk, one after another.
pub fn run_worker(worker: usize, slicer: &ImageSlicer, paths: &[PathBuf]) -> WorkerReport {
    debug!(worker, images = paths.len(), "worker started");

    let mut report = WorkerReport {
        worker,
        ..Default::default()
    };

    for path in paths {
        match guard_panics(path, || slicer.slice_image(path)) {
            Ok(SliceOutcome::Sliced { slices }) => {
                report.sliced += 1;
                report.slices_written += slices;
            }
            Ok(SliceOutcome::Skipped { .. }) => report.skipped += 1,
            Err(e) => {
                error!(worker, path = %path.display(), "{}", e);
                report.failed.push(path.clone());
            }
        }
    }

    debug!(
        worker,
        sliced = report.sliced,
        skipped = report.skipped,
        failed = report.failed.len(),
        "worker finished"
    );
    report
}

/// Run `slice` for `path`, turning a panic into a per-image error.
pub fn guard_panics<F>(path: &Path, slice: F) -> Result<SliceOutcome, SliceError>
where
    F: FnOnce() -> Result<SliceOutcome, SliceError> + UnwindSafe,
{
    panic::catch_unwind(slice).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(SliceError::Panicked {
            path: path.to_path_buf(),
            message,
        })
    })
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Fans a list of images out over a fixed number of workers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    slicer: ImageSlicer,
    workers: NonZeroUsize,
}

impl Dispatcher {
    /// Create a dispatcher with an explicit worker count.
    pub fn new(slicer: ImageSlicer, workers: NonZeroUsize) -> Self {
        Self { slicer, workers }
    }

    /// Create a dispatcher with one worker per available CPU.
    pub fn with_host_parallelism(slicer: ImageSlicer) -> Self {
        Self::new(slicer, host_parallelism())
    }

    /// Run every worker to completion.
    ///
    /// All workers are started before any is awaited. The returned summary
    /// only covers workers that finished; lost workers are counted
    /// separately.
    pub async fn run(&self, paths: &[PathBuf]) -> DispatchSummary {
        let chunks = partition(paths, self.workers);
        info!(
            images = paths.len(),
            workers = chunks.len(),
            "dispatching"
        );

        let handles: Vec<_> = chunks
            .into_iter()
            .enumerate()
            .map(|(worker, chunk)| {
                let slicer = self.slicer.clone();
                let chunk = chunk.to_vec();
                tokio::task::spawn_blocking(move || run_worker(worker, &slicer, &chunk))
            })
            .collect();

        let mut summary = DispatchSummary {
            workers: handles.len(),
            ..Default::default()
        };

        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(report) => summary.absorb(&report),
                Err(e) => {
                    error!(worker, "worker did not complete: {}", e);
                    summary.workers_lost += 1;
                }
            }
        }

        summary
    }
}

/// Number of logical CPUs, never less than one.
pub fn host_parallelism() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}
