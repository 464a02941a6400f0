//! The drawing surface: preview image, pointer handling and selection outline.

use cropper_core::geometry::{Point, Size};
use cropper_core::selection::SelectionRect;
use cropper_core::transform::DisplayTransform;

use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);
            report_surface_size(app, rect);

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            if app.review.is_none() {
                handle_pointer(ui, &response, app, rect.min);
            }

            let transform = app.session.transform().copied();
            match (app.viewport.texture.as_ref(), transform) {
                (Some(texture), Some(t)) => {
                    draw_image(ui, texture.id(), preview_rect(rect.min, &t));
                    if let Some(sel) = app.session.visible_rect() {
                        draw_selection(ui, sel, rect.min);
                    }
                    if response.hovered() && app.review.is_none() {
                        ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
                    }
                }
                _ => show_placeholder(ui),
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Forward surface size changes to the session.
fn report_surface_size(app: &mut CropperApp, rect: egui::Rect) {
    let surface = Size::new(
        rect.width().max(0.0).round() as u32,
        rect.height().max(0.0).round() as u32,
    );
    if app.session.surface() != Some(surface) {
        app.session.on_resize(surface);
    }
}

fn to_surface(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut CropperApp,
    origin: egui::Pos2,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        // The drag is recognised after some movement; anchor at the press.
        let press = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = press {
            app.session.on_press(to_surface(pos, origin));
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.session.on_drag(to_surface(pos, origin));
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        app.session.on_release();
    }

    // Press and release without movement: a zero-size selection.
    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.session.on_press(to_surface(pos, origin));
            app.session.on_release();
        }
    }
}

fn preview_rect(origin: egui::Pos2, t: &DisplayTransform) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(t.offset_x as f32, t.offset_y as f32),
        egui::vec2(t.display_width as f32, t.display_height as f32),
    )
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_selection(ui: &egui::Ui, sel: &SelectionRect, origin: egui::Pos2) {
    let a = origin + egui::vec2(sel.anchor.x as f32, sel.anchor.y as f32);
    let b = origin + egui::vec2(sel.end.x as f32, sel.end.y as f32);
    ui.painter().rect_stroke(
        egui::Rect::from_two_pos(a, b),
        0.0,
        egui::Stroke::new(1.5, egui::Color32::RED),
        egui::epaint::StrokeKind::Outside,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Load an image of at least 6000x4000 to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
