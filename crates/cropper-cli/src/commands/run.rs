use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::config::CropJob;
use cropper_core::session::run_job;
use tracing::debug;

use super::spinner;
use crate::summary::print_job_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Crop job TOML file
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let job = CropJob::from_file(&args.config)
        .with_context(|| format!("Failed to read job {}", args.config.display()))?;

    debug!(job = ?job, "Running crop job");

    let pb = spinner("Cropping");
    let report = run_job(&job).with_context(|| format!("Failed to crop {}", job.input.display()));
    pb.finish_and_clear();

    print_job_summary(&job, &report?);
    Ok(())
}
