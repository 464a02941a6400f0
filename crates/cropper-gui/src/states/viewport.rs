use cropper_core::geometry::Size;

/// Preview texture for the current display size.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Display size the texture was rendered at.
    pub texture_size: Option<Size>,
}

impl ViewportState {
    pub fn clear_texture(&mut self) {
        self.texture = None;
        self.texture_size = None;
    }
}
