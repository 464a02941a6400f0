use crate::app::CropperApp;

/// Review window for a committed crop: Undo discards it, Save exports it.
pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    let Some(review) = app.review.as_ref() else {
        return;
    };
    let texture_id = review.texture.id();
    let size = review.preview_size();
    let crop_size = review.crop.size();

    let mut undo = false;
    let mut save = false;

    egui::Window::new("Cropped Image")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.image((texture_id, size));
            ui.small(format!("{crop_size} source pixels, exported at 1080x1350"));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                undo = ui.button("Undo").clicked();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    save = ui.button("Save").clicked();
                });
            });
        });

    if undo {
        app.undo_review();
    } else if save {
        app.save_review();
    }
}
