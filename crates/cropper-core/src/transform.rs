//! Source-to-display scaling and placement of the preview on the drawing surface.

use tracing::debug;

use crate::geometry::{NormalizedRect, Size, Viewport};

/// How the preview of the current source is laid out on the drawing surface.
///
/// Derived state: rebuild it whenever the source, the viewport or the
/// surface size changes. The inverse mapping in [`crate::io::crop`] is only
/// correct against the transform that is currently on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransform {
    /// Uniform source-to-display factor, never above 1.
    pub scale: f64,
    pub display_width: u32,
    pub display_height: u32,
    /// Top-left of the preview inside the drawing surface. Negative when the
    /// surface is smaller than the preview.
    pub offset_x: i32,
    pub offset_y: i32,
}

impl DisplayTransform {
    /// Lay out `source` inside `viewport`, centered on `surface`.
    ///
    /// With no surface yet the surface is taken to be the preview itself.
    pub fn compute(source: Size, viewport: Viewport, surface: Option<Size>) -> Self {
        let scale = display_scale(source, viewport);
        let dims = display_size(source, scale);
        let (offset_x, offset_y) = surface
            .map(|s| centering_offset(s, dims))
            .unwrap_or((0, 0));

        debug!(
            scale,
            display = %dims,
            offset_x,
            offset_y,
            "Display transform computed"
        );

        Self {
            scale,
            display_width: dims.width,
            display_height: dims.height,
            offset_x,
            offset_y,
        }
    }

    pub fn display_size(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }

    /// Shift a drawing-surface rectangle into display space.
    pub fn surface_to_display(&self, rect: NormalizedRect) -> NormalizedRect {
        rect.translated(-(self.offset_x as f64), -(self.offset_y as f64))
    }
}

/// Shrink-only factor fitting `source` into `viewport`: `min(1, maxW/w, maxH/h)`.
pub fn display_scale(source: Size, viewport: Viewport) -> f64 {
    if source.is_empty() {
        return 1.0;
    }
    let fit_x = viewport.max_width as f64 / source.width as f64;
    let fit_y = viewport.max_height as f64 / source.height as f64;
    fit_x.min(fit_y).min(1.0)
}

/// Rounded preview dimensions for `scale`, at least one pixel per axis.
pub fn display_size(source: Size, scale: f64) -> Size {
    Size::new(
        ((source.width as f64 * scale).round() as u32).max(1),
        ((source.height as f64 * scale).round() as u32).max(1),
    )
}

/// Floor-divided offset that centers `display` on `surface`.
pub fn centering_offset(surface: Size, display: Size) -> (i32, i32) {
    let dx = surface.width as i64 - display.width as i64;
    let dy = surface.height as i64 - display.height as i64;
    (dx.div_euclid(2) as i32, dy.div_euclid(2) as i32)
}

/// Size of the review preview for a crop: fit into `viewport`, enlarging if needed.
pub fn review_size(crop: Size, viewport: Viewport) -> Size {
    if crop.is_empty() {
        return crop;
    }
    let fit_x = viewport.max_width as f64 / crop.width as f64;
    let fit_y = viewport.max_height as f64 / crop.height as f64;
    let scale = fit_x.min(fit_y);
    Size::new(
        ((crop.width as f64 * scale) as u32).max(1),
        ((crop.height as f64 * scale) as u32).max(1),
    )
}
