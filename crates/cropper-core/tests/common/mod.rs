#![allow(dead_code)]

use image::{Rgb, RgbImage};

use cropper_core::source::SourceImage;

/// Image where each pixel encodes its own coordinates.
pub fn coordinate_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x / 256 + y / 256) % 256) as u8])
    })
}

/// Uniform image of a single color.
pub fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// All-black source; cheap to allocate at full resolution.
pub fn blank_source(width: u32, height: u32) -> SourceImage {
    SourceImage::new(RgbImage::new(width, height))
}
