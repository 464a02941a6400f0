use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("Load Image").clicked() {
                app.open_image();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let can_crop = app.session.has_image();
                if ui.add_enabled(can_crop, egui::Button::new("Crop Image")).clicked() {
                    app.crop(ctx);
                }
            });
        });

        ui.separator();

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for empty lines to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(name) = app.ui_state.file_path.as_ref().and_then(|p| p.file_name()) {
                ui.label(name.to_string_lossy());
                ui.separator();
            }
            if let Some(source) = app.session.source() {
                ui.label(format!("Source: {}", source.size()));
                ui.separator();
            }
            if let Some(t) = app.session.transform() {
                ui.label(format!(
                    "Preview: {} ({:.1}%)",
                    t.display_size(),
                    t.scale * 100.0
                ));
                ui.separator();
            }
            if let Some(rect) = app.session.visible_rect() {
                ui.label(format!(
                    "Selection: {:.0}x{:.0}",
                    rect.width().abs(),
                    rect.height().abs()
                ));
            }
        });

        ui.add_space(2.0);
    });
}
