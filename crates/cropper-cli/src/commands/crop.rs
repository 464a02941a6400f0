use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::config::{CropJob, SelectionConfig};
use cropper_core::consts::{
    DEFAULT_EXPORT_EXTENSION, DEFAULT_JPEG_QUALITY, EXPORT_HEIGHT, EXPORT_WIDTH,
};
use cropper_core::export::ExportOptions;
use cropper_core::geometry::Size;
use cropper_core::session::run_job;
use tracing::debug;

use super::{parse_point, parse_size, spinner};
use crate::summary::print_job_summary;

#[derive(Args)]
pub struct CropArgs {
    /// Input image file (at least 6000x4000)
    pub file: PathBuf,

    /// Pointer press position on the preview surface, as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub press: [f64; 2],

    /// Pointer release position on the preview surface, as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub release: [f64; 2],

    /// Primary display size; the preview viewport is half of it
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    pub display: Size,

    /// Drawing surface size (defaults to the preview size)
    #[arg(long, value_parser = parse_size)]
    pub surface: Option<Size>,

    /// Output file (defaults to <stem>_1080x1350.jpg next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let job = CropJob {
        input: args.file.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| crop_output_path(&args.file)),
        display: args.display,
        surface: args.surface,
        selection: SelectionConfig {
            press: args.press,
            release: args.release,
        },
        export: ExportOptions {
            jpeg_quality: args.quality,
        },
    };

    debug!(job = ?job, "Running crop job");

    let pb = spinner("Cropping");
    let report = run_job(&job).with_context(|| format!("Failed to crop {}", job.input.display()));
    pb.finish_and_clear();

    print_job_summary(&job, &report?);
    Ok(())
}

fn crop_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        "{stem}_{EXPORT_WIDTH}x{EXPORT_HEIGHT}.{DEFAULT_EXPORT_EXTENSION}"
    ))
}
