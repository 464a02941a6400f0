//! The interactive cropping session: one source, its layout, one selection.

use std::path::Path;

use image::RgbImage;
use tracing::{debug, info};

use crate::config::CropJob;
use crate::error::{CropperError, Result};
use crate::export::{export_crop, ExportOutcome};
use crate::gate::check_resolution;
use crate::geometry::{PixelRect, Point, Size, Viewport};
use crate::io::crop::{crop_display_rect, CropResult};
use crate::io::image_io::load_source;
use crate::resample::resize_area;
use crate::selection::{Selection, SelectionRect};
use crate::source::SourceImage;
use crate::transform::DisplayTransform;

/// State owned by whichever front end drives the cropper.
///
/// Every event handler recomputes what it affects before returning, so the
/// transform always matches what is on screen.
pub struct CropSession {
    viewport: Viewport,
    surface: Option<Size>,
    source: Option<SourceImage>,
    transform: Option<DisplayTransform>,
    selection: Selection,
}

impl CropSession {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface: None,
            source: None,
            transform: None,
            selection: Selection::Idle,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn transform(&self) -> Option<&DisplayTransform> {
        self.transform.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn surface(&self) -> Option<Size> {
        self.surface
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// Decode and install an image file. See [`CropSession::load_image`].
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let source = load_source(path)?;
        self.load_image(source)
    }

    /// Install a new source if it passes the resolution gate.
    ///
    /// On rejection the previous source, transform and selection stay as they were.
    pub fn load_image(&mut self, source: SourceImage) -> Result<()> {
        check_resolution(source.size())?;

        info!(
            width = source.width(),
            height = source.height(),
            path = ?source.path,
            "Source loaded"
        );
        self.source = Some(source);
        self.selection.clear();
        self.relayout();
        Ok(())
    }

    /// Replace the viewport, e.g. when the primary display becomes known.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout();
    }

    /// The drawing surface changed size.
    pub fn on_resize(&mut self, surface: Size) -> Option<&DisplayTransform> {
        self.surface = Some(surface);
        self.relayout();
        self.transform.as_ref()
    }

    pub fn on_press(&mut self, pointer: Point) {
        if !self.has_image() {
            debug!("Press ignored: no image loaded");
            return;
        }
        self.selection.press(pointer);
    }

    pub fn on_drag(&mut self, pointer: Point) {
        self.selection.drag(pointer);
    }

    pub fn on_release(&mut self) {
        self.selection.release();
    }

    /// Drop the current rectangle.
    pub fn discard_selection(&mut self) {
        self.selection.clear();
    }

    /// Extract the committed selection from the full-resolution source.
    pub fn commit_crop(&self) -> Result<CropResult> {
        let (source, transform) = match (&self.source, &self.transform) {
            (Some(s), Some(t)) => (s, t),
            _ => return Err(CropperError::NoImage),
        };
        let rect = self
            .selection
            .committed()
            .filter(|r| !r.is_degenerate())
            .ok_or(CropperError::EmptySelection)?;

        let display_rect = transform.surface_to_display(rect.normalized());
        crop_display_rect(source, display_rect, transform.display_size())
    }

    /// The source resampled to the current display size.
    pub fn preview(&self) -> Option<RgbImage> {
        let source = self.source.as_ref()?;
        let transform = self.transform.as_ref()?;
        Some(resize_area(&source.pixels, transform.display_size()))
    }

    /// The rectangle to draw, live or committed.
    pub fn visible_rect(&self) -> Option<&SelectionRect> {
        self.selection.rect()
    }

    fn relayout(&mut self) {
        self.transform = self
            .source
            .as_ref()
            .map(|s| DisplayTransform::compute(s.size(), self.viewport, self.surface));
    }
}

/// Summary of a finished headless job.
#[derive(Clone, Debug)]
pub struct JobReport {
    pub source: Size,
    pub transform: DisplayTransform,
    pub crop: PixelRect,
    pub outcome: ExportOutcome,
}

/// Replay a job's press/drag/release through a fresh session and export the crop.
pub fn run_job(job: &CropJob) -> Result<JobReport> {
    job.validate()?;
    let mut session = CropSession::new(job.viewport());
    session.load_path(&job.input)?;
    if let Some(surface) = job.surface {
        session.on_resize(surface);
    }

    session.on_press(job.selection.press_point());
    session.on_drag(job.selection.release_point());
    session.on_release();

    let crop = session.commit_crop()?;
    let outcome = export_crop(&crop, Some(&job.output), &job.export)?;

    let (source, transform) = match (session.source(), session.transform()) {
        (Some(s), Some(t)) => (s.size(), *t),
        _ => return Err(CropperError::NoImage),
    };
    Ok(JobReport {
        source,
        transform,
        crop: crop.rect,
        outcome,
    })
}
