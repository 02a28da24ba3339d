//! Image Slicer - slice every image in a folder into a grid.
//!
//! This binary validates the arguments, prepares the output folder and runs
//! the parallel slicing workers.

use clap::Parser;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use image_slicer::{
    collect_image_paths, config::Config, dispatch::Dispatcher, slice::ImageSlicer, SliceJob,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    // Validate configuration
    let job = match config.validate() {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Invalid arguments. Try again!");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = job.prepare_destination() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    log_job(&job);

    let images = match collect_image_paths(&job.source_dir) {
        Ok(images) => images,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if images.is_empty() {
        warn!("No images found in {}", job.source_dir.display());
        return ExitCode::SUCCESS;
    }

    let slicer = ImageSlicer::new(job.grid, job.destination.clone());
    let dispatcher = Dispatcher::new(slicer, job.workers);
    let summary = dispatcher.run(&images).await;

    info!("");
    info!("Done:");
    info!("  Images sliced: {}", summary.images_sliced);
    info!("  Images skipped (too small): {}", summary.images_skipped);
    if summary.images_failed > 0 {
        warn!("  Images failed: {}", summary.images_failed);
    }
    if summary.workers_lost > 0 {
        warn!("  Workers lost: {}", summary.workers_lost);
    }
    info!("  Slices written: {}", summary.slices_written);

    ExitCode::SUCCESS
}

/// Log the validated job parameters.
fn log_job(job: &SliceJob) {
    info!("Configuration:");
    info!("  Source: {}", job.source_dir.display());
    info!(
        "  Slice size: {}x{}",
        job.grid.slice_width, job.grid.slice_height
    );
    info!(
        "  Merge remainder: {}",
        if job.grid.merge_remainder { "on" } else { "off" }
    );
    match &job.destination {
        Some(dir) => info!("  Destination: {}", dir.display()),
        None => info!("  Destination: next to each source image"),
    }
    info!("  Workers: {}", job.workers);
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "image_slicer=debug"
    } else {
        "image_slicer=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
