//! Mapping a display-space selection back onto the source raster.

use image::{imageops, RgbImage};
use tracing::info;

use crate::error::{CropperError, Result};
use crate::geometry::{NormalizedRect, PixelRect, Size};
use crate::source::SourceImage;

/// A sub-raster cut from the source, with where it came from.
#[derive(Clone, Debug)]
pub struct CropResult {
    pub pixels: RgbImage,
    /// Region of the source image, in source pixels.
    pub rect: PixelRect,
}

impl CropResult {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Map a display-space rectangle to source pixels.
///
/// Each axis gets its own factor (`source / display`). Corners are
/// truncated toward negative infinity, then clamped to the source bounds.
/// An empty result is an [`CropperError::EmptySelection`].
pub fn map_to_source(rect: NormalizedRect, display: Size, source: Size) -> Result<PixelRect> {
    if display.is_empty() || source.is_empty() {
        return Err(CropperError::EmptySelection);
    }
    let scale_x = source.width as f64 / display.width as f64;
    let scale_y = source.height as f64 / display.height as f64;

    let clamp = |v: f64, max: u32| (v.floor().max(0.0) as u64).min(max as u64) as u32;
    let x1 = clamp(rect.x1 * scale_x, source.width);
    let x2 = clamp(rect.x2 * scale_x, source.width);
    let y1 = clamp(rect.y1 * scale_y, source.height);
    let y2 = clamp(rect.y2 * scale_y, source.height);

    if x2 <= x1 || y2 <= y1 {
        return Err(CropperError::EmptySelection);
    }

    Ok(PixelRect {
        x: x1,
        y: y1,
        width: x2 - x1,
        height: y2 - y1,
    })
}

/// Copy `rect` out of `source`.
pub fn extract(source: &SourceImage, rect: PixelRect) -> Result<CropResult> {
    let (w, h) = (source.width() as u64, source.height() as u64);
    if rect.width == 0 || rect.height == 0 {
        return Err(CropperError::EmptySelection);
    }
    if rect.x as u64 + rect.width as u64 > w || rect.y as u64 + rect.height as u64 > h {
        return Err(CropperError::Extraction(format!(
            "region ({},{} {}x{}) exceeds source dimensions ({w}x{h})",
            rect.x, rect.y, rect.width, rect.height
        )));
    }
    let expected = w * h * 3;
    if (source.pixels.as_raw().len() as u64) < expected {
        return Err(CropperError::Extraction(format!(
            "pixel buffer holds {} bytes, expected {expected}",
            source.pixels.as_raw().len()
        )));
    }

    let pixels =
        imageops::crop_imm(&source.pixels, rect.x, rect.y, rect.width, rect.height).to_image();
    info!(
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "Crop extracted"
    );
    Ok(CropResult { pixels, rect })
}

/// Map and extract in one step.
pub fn crop_display_rect(
    source: &SourceImage,
    rect: NormalizedRect,
    display: Size,
) -> Result<CropResult> {
    let pixel_rect = map_to_source(rect, display, source.size())?;
    extract(source, pixel_rect)
}
