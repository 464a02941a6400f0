use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let crop_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::K);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    app.open_image();
                }

                let can_crop = app.session.has_image();
                if ui
                    .add_enabled(
                        can_crop,
                        egui::Button::new("Crop").shortcut_text(ctx.format_shortcut(&crop_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.crop(ctx);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(app.session.visible_rect().is_some(), egui::Button::new("Clear Selection"))
                    .clicked()
                {
                    ui.close();
                    app.session.discard_selection();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus)
    if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
        app.open_image();
    }
    if ctx.input_mut(|i| i.consume_shortcut(&crop_shortcut)) && app.session.has_image() {
        app.crop(ctx);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && app.review.is_none() {
        app.session.discard_selection();
    }
}
