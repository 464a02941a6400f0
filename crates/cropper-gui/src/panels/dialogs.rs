use crate::app::CropperApp;

/// Message and About dialogs.
pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    if let Some(dialog) = &app.ui_state.dialog {
        let mut close = false;
        egui::Window::new(dialog.title.as_str())
            .id(egui::Id::new("message_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(dialog.message.as_str());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    close = ui.button("OK").clicked();
                });
            });
        if close {
            app.ui_state.dialog = None;
        }
    }

    if app.ui_state.show_about {
        egui::Window::new("About Image Cropper")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Image Cropper");
                    ui.label("4:5 portrait crops from high-resolution photographs");
                    ui.add_space(8.0);
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        app.ui_state.show_about = false;
                    }
                });
            });
    }
}
