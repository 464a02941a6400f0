use image::RgbImage;

/// Convert an 8-bit RGB raster to an egui ColorImage.
pub fn rgb_to_color_image(img: &RgbImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgb(size, img.as_raw())
}
