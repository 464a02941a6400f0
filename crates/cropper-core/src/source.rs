use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::geometry::Size;

/// A decoded full-resolution photograph. Pixels are 8-bit RGB, row-major.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub pixels: RgbImage,
    /// File the image was decoded from, if any.
    pub path: Option<PathBuf>,
}

impl SourceImage {
    pub fn new(pixels: RgbImage) -> Self {
        Self { pixels, path: None }
    }

    pub fn with_path(pixels: RgbImage, path: &Path) -> Self {
        Self {
            pixels,
            path: Some(path.to_path_buf()),
        }
    }

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
