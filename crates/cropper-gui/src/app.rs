use std::path::PathBuf;

use cropper_core::consts::{
    FALLBACK_DISPLAY_HEIGHT, FALLBACK_DISPLAY_WIDTH, SUPPORTED_INPUT_EXTENSIONS,
};
use cropper_core::error::CropperError;
use cropper_core::export::{export_crop, review_preview, ExportOptions, ExportOutcome};
use cropper_core::geometry::{Size, Viewport};
use cropper_core::session::CropSession;
use tracing::{info, warn};

use crate::convert::rgb_to_color_image;
use crate::panels;
use crate::states::{ReviewState, UIState, ViewportState};

pub struct CropperApp {
    pub session: CropSession,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub review: Option<ReviewState>,
    pub export_options: ExportOptions,
}

impl CropperApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let fallback = Size::new(FALLBACK_DISPLAY_WIDTH, FALLBACK_DISPLAY_HEIGHT);
        let mut app = Self {
            session: CropSession::new(Viewport::from_display(fallback)),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            review: None,
            export_options: ExportOptions::default(),
        };
        app.resolve_display(ctx);
        app
    }

    /// Read the primary display size into the session, once.
    fn resolve_display(&mut self, ctx: &egui::Context) {
        if self.ui_state.display_resolved {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            let monitor = Size::new(monitor.x as u32, monitor.y as u32);
            if !monitor.is_empty() {
                self.session.set_viewport(Viewport::from_display(monitor));
                self.ui_state.display_resolved = true;
                info!(display = %monitor, "Primary display resolved");
            }
        }
    }

    /// Ask for a file and load it into the session.
    pub fn open_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", SUPPORTED_INPUT_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        self.load_image(path);
    }

    pub fn load_image(&mut self, path: PathBuf) {
        if !self.ui_state.display_resolved {
            warn!("Primary display size unavailable, using fallback viewport");
            self.ui_state.display_resolved = true;
        }

        match self.session.load_path(&path) {
            Ok(()) => {
                if let Some(source) = self.session.source() {
                    self.ui_state
                        .add_log(format!("Opened: {} ({})", path.display(), source.size()));
                }
                self.ui_state.file_path = Some(path);
                self.viewport.clear_texture();
                self.review = None;
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Cut the committed selection from the source and open the review window.
    pub fn crop(&mut self, ctx: &egui::Context) {
        match self.session.commit_crop() {
            Ok(crop) => {
                let preview = review_preview(&crop, self.session.viewport());
                let texture = ctx.load_texture(
                    "review",
                    rgb_to_color_image(&preview),
                    egui::TextureOptions::LINEAR,
                );
                self.ui_state
                    .add_log(format!("Cropped {} from source", crop.size()));
                self.review = Some(ReviewState { crop, texture });
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Ask for a destination and export the reviewed crop.
    pub fn save_review(&mut self) {
        let Some(review) = &self.review else {
            return;
        };
        let path = rfd::FileDialog::new()
            .add_filter("JPEG files", &["jpg"])
            .add_filter("All files", &["*"])
            .set_file_name("cropped_image.jpg")
            .save_file();

        match export_crop(&review.crop, path.as_deref(), &self.export_options) {
            Ok(ExportOutcome::Saved(path)) => {
                self.ui_state.add_log(format!("Saved: {}", path.display()));
                self.ui_state
                    .show_dialog("Success", "Image saved successfully!");
            }
            Ok(ExportOutcome::Cancelled) => {}
            Err(e) => self.report_error(&e),
        }
    }

    /// Discard the reviewed crop. The selection stays.
    pub fn undo_review(&mut self) {
        self.review = None;
    }

    pub fn report_error(&mut self, e: &CropperError) {
        warn!(error = %e, "Operation failed");
        self.ui_state.add_log(format!("ERROR: {e}"));
        self.ui_state.show_dialog(e.title(), e.to_string());
    }

    /// Re-render the preview texture when the display size changed.
    fn sync_preview(&mut self, ctx: &egui::Context) {
        let wanted = self.session.transform().map(|t| t.display_size());
        if wanted == self.viewport.texture_size {
            return;
        }
        match self.session.preview() {
            Some(preview) => {
                let texture = ctx.load_texture(
                    "preview",
                    rgb_to_color_image(&preview),
                    egui::TextureOptions::LINEAR,
                );
                self.viewport.texture = Some(texture);
                self.viewport.texture_size = wanted;
            }
            None => self.viewport.clear_texture(),
        }
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.resolve_display(ctx);
        self.sync_preview(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::review::show(ctx, self);
        panels::dialogs::show(ctx, self);
    }
}
