use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{DEFAULT_JPEG_QUALITY, EXPORT_HEIGHT, EXPORT_WIDTH};
use crate::error::{CropperError, Result};
use crate::geometry::{Size, Viewport};
use crate::io::crop::CropResult;
use crate::io::image_io::{save_rgb, with_default_extension};
use crate::resample::resize_area;
use crate::transform::review_size;

/// Encoder settings for exported files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ExportOptions {
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(CropperError::Config(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

/// What happened to an export request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// No path was chosen; nothing was written.
    Cancelled,
}

/// The canonical output size.
pub fn export_size() -> Size {
    Size::new(EXPORT_WIDTH, EXPORT_HEIGHT)
}

/// Resize a crop to exactly 1080x1350, whatever its own size.
pub fn normalize(crop: &CropResult) -> RgbImage {
    resize_area(&crop.pixels, export_size())
}

/// Downsized copy of a crop for on-screen review.
pub fn review_preview(crop: &CropResult, viewport: Viewport) -> RgbImage {
    resize_area(&crop.pixels, review_size(crop.size(), viewport))
}

/// Normalize and write `crop` to `path`. `None` means the user cancelled.
pub fn export_crop(
    crop: &CropResult,
    path: Option<&Path>,
    options: &ExportOptions,
) -> Result<ExportOutcome> {
    let Some(path) = path else {
        info!("Export cancelled");
        return Ok(ExportOutcome::Cancelled);
    };
    options.validate()?;

    let path = with_default_extension(path);
    let output = normalize(crop);
    save_rgb(&output, &path, options.jpeg_quality)?;

    info!(
        output = %path.display(),
        source_width = crop.width(),
        source_height = crop.height(),
        "Crop exported"
    );
    Ok(ExportOutcome::Saved(path))
}
