//! Aspect-locked selection driven by pointer press, drag and release.

use tracing::debug;

use crate::consts::ASPECT_HEIGHT_PER_WIDTH;
use crate::geometry::{NormalizedRect, Point};

/// A selection rectangle in drawing-surface coordinates.
///
/// `end` is derived from the pointer under the 4:5 lock, so it is generally
/// not where the pointer is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRect {
    pub anchor: Point,
    pub end: Point,
}

impl SelectionRect {
    /// A zero-size rectangle at `anchor`.
    pub fn at(anchor: Point) -> Self {
        Self { anchor, end: anchor }
    }

    /// Apply the aspect lock to a drag from `anchor` to `pointer`.
    ///
    /// Width follows the horizontal drag. Height is 5/4 of the width,
    /// negated when the pointer is above the anchor: the sign tracks the
    /// vertical drag direction, not the horizontal one.
    pub fn from_drag(anchor: Point, pointer: Point) -> Self {
        let width = pointer.x - anchor.x;
        let mut height = width * ASPECT_HEIGHT_PER_WIDTH;
        if pointer.y < anchor.y {
            height = -height;
        }
        Self {
            anchor,
            end: Point::new(anchor.x + width, anchor.y + height),
        }
    }

    /// Signed horizontal extent.
    pub fn width(&self) -> f64 {
        self.end.x - self.anchor.x
    }

    /// Signed vertical extent.
    pub fn height(&self) -> f64 {
        self.end.y - self.anchor.y
    }

    pub fn normalized(&self) -> NormalizedRect {
        NormalizedRect::from_corners(self.anchor, self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// Selection lifecycle: `Idle -> Dragging -> Committed`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    Idle,
    Dragging(SelectionRect),
    Committed(SelectionRect),
}

impl Selection {
    /// Start a new rectangle, discarding any previous one.
    pub fn press(&mut self, pointer: Point) {
        debug!(x = pointer.x, y = pointer.y, "Selection started");
        *self = Self::Dragging(SelectionRect::at(pointer));
    }

    /// Update the live rectangle. Ignored unless dragging.
    pub fn drag(&mut self, pointer: Point) {
        if let Self::Dragging(rect) = self {
            *rect = SelectionRect::from_drag(rect.anchor, pointer);
        }
    }

    /// Freeze the live rectangle. Ignored unless dragging.
    pub fn release(&mut self) {
        if let Self::Dragging(rect) = *self {
            debug!(
                width = rect.width(),
                height = rect.height(),
                "Selection committed"
            );
            *self = Self::Committed(rect);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// The rectangle currently shown, live or committed.
    pub fn rect(&self) -> Option<&SelectionRect> {
        match self {
            Self::Idle => None,
            Self::Dragging(rect) | Self::Committed(rect) => Some(rect),
        }
    }

    /// The rectangle eligible for cropping.
    pub fn committed(&self) -> Option<&SelectionRect> {
        match self {
            Self::Committed(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
