//! Parallel dispatch tests.
//!
//! Tests verify:
//! - Every image of a folder is sliced exactly once regardless of worker count
//! - Corrupt and undersized images do not stop the other workers
//! - Outputs from many workers land in one shared destination

use std::num::NonZeroUsize;

use image_slicer::{collect_image_paths, Config, Dispatcher, GridSpec, ImageSlicer};

use super::test_utils::{file_names, slice_names, write_garbage, write_image};

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[tokio::test]
async fn test_all_images_sliced_once() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    for i in 0..7 {
        write_image(src.path(), &format!("img{i}.png"), 40, 20);
    }
    let images = collect_image_paths(src.path()).unwrap();

    for n in [1, 2, 3, 8] {
        let slicer = ImageSlicer::new(
            GridSpec::new(10, 10, false),
            Some(out.path().to_path_buf()),
        );
        let summary = Dispatcher::new(slicer, workers(n)).run(&images).await;

        assert_eq!(summary.workers, n);
        assert_eq!(summary.images_sliced, 7);
        assert_eq!(summary.slices_written, 7 * 8);
        assert_eq!(summary.workers_lost, 0);
    }

    // Re-runs overwrite the same names
    assert_eq!(file_names(out.path()).len(), 7 * 8);
    for i in 0..7 {
        assert_eq!(slice_names(out.path(), &format!("img{i}")).len(), 8);
    }
}

#[tokio::test]
async fn test_failures_are_isolated() {
    let src = tempfile::tempdir().unwrap();
    write_image(src.path(), "a_good.png", 30, 30);
    write_garbage(src.path(), "b_corrupt.png");
    write_image(src.path(), "c_tiny.png", 5, 5);
    write_image(src.path(), "d_good.png", 30, 30);
    let images = collect_image_paths(src.path()).unwrap();
    assert_eq!(images.len(), 4);

    let slicer = ImageSlicer::new(GridSpec::new(10, 10, false), None);
    let summary = Dispatcher::new(slicer, workers(2)).run(&images).await;

    assert_eq!(summary.images_sliced, 2);
    assert_eq!(summary.images_skipped, 1);
    assert_eq!(summary.images_failed, 1);
    assert_eq!(summary.images_processed(), 4);
    assert_eq!(summary.slices_written, 18);

    assert_eq!(slice_names(src.path(), "a_good").len(), 9);
    assert_eq!(slice_names(src.path(), "d_good").len(), 9);
    assert!(slice_names(src.path(), "c_tiny").is_empty());
}

#[tokio::test]
async fn test_end_to_end_from_config() {
    let src = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("slices").join("nested");
    write_image(src.path(), "sample.png", 445, 306);

    let config = Config {
        source_dir: src.path().to_path_buf(),
        width: 200,
        height: 100,
        merge_remainder: true,
        destination: Some(out.clone()),
        workers: NonZeroUsize::new(4),
        verbose: false,
    };
    let job = config.validate().unwrap();
    job.prepare_destination().unwrap();

    let images = collect_image_paths(&job.source_dir).unwrap();
    let slicer = ImageSlicer::new(job.grid, job.destination.clone());
    let summary = Dispatcher::new(slicer, job.workers).run(&images).await;

    assert_eq!(summary.slices_written, 6);
    assert_eq!(file_names(&out).len(), 6);
    assert_eq!(file_names(src.path()), vec!["sample.png"]);
}
