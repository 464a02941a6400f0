use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageFormat, ImageResult, RgbImage};
use tracing::warn;

use crate::consts::DEFAULT_EXPORT_EXTENSION;
use crate::error::{CropperError, Result};
use crate::source::SourceImage;

/// Decode an image file into an RGB source.
pub fn load_source(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?;
    Ok(SourceImage::with_path(img.to_rgb8(), path))
}

/// Append the default extension to a path that has none.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXPORT_EXTENSION)
    }
}

/// Save as JPEG with the given quality (1-100).
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> ImageResult<()> {
    let mut writer = BufWriter::new(File::create(path).map_err(ImageError::IoError)?);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    img.write_with_encoder(encoder)?;
    writer.flush().map_err(ImageError::IoError)
}

/// Save, choosing the format from the file extension. Unknown extensions get JPEG.
///
/// A failed write removes whatever was left at `path`.
pub fn save_rgb(img: &RgbImage, path: &Path, jpeg_quality: u8) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let written = match ext.as_deref() {
        Some("png") => img.save_with_format(path, ImageFormat::Png),
        Some("bmp") => img.save_with_format(path, ImageFormat::Bmp),
        _ => save_jpeg(img, path, jpeg_quality),
    };

    written.map_err(|source| {
        if std::fs::remove_file(path).is_ok() {
            warn!(path = %path.display(), "Removed partially written output");
        }
        CropperError::Encode {
            path: path.to_path_buf(),
            source,
        }
    })
}
