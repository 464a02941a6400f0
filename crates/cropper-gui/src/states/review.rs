use cropper_core::io::crop::CropResult;

/// A committed crop waiting to be saved or discarded.
pub struct ReviewState {
    pub crop: CropResult,
    pub texture: egui::TextureHandle,
}

impl ReviewState {
    pub fn preview_size(&self) -> egui::Vec2 {
        let [w, h] = self.texture.size();
        egui::vec2(w as f32, h as f32)
    }
}
