use approx::assert_relative_eq;

use cropper_core::geometry::{NormalizedRect, Size, Viewport};
use cropper_core::transform::{
    centering_offset, display_scale, display_size, review_size, DisplayTransform,
};

#[test]
fn test_scale_for_oversized_source() {
    // 8000x6000 into 1000x800: min(1, 0.125, 0.1333) = 0.125
    let scale = display_scale(Size::new(8000, 6000), Viewport::new(1000, 800));
    assert_relative_eq!(scale, 0.125);
    assert_eq!(display_size(Size::new(8000, 6000), scale), Size::new(1000, 750));
}

#[test]
fn test_scale_limited_by_height() {
    let scale = display_scale(Size::new(6000, 6000), Viewport::new(960, 540));
    assert_relative_eq!(scale, 540.0 / 6000.0);
    assert_eq!(display_size(Size::new(6000, 6000), scale), Size::new(540, 540));
}

#[test]
fn test_scale_never_upscales() {
    let scale = display_scale(Size::new(6000, 4000), Viewport::new(20_000, 20_000));
    assert_relative_eq!(scale, 1.0);
    assert_eq!(display_size(Size::new(6000, 4000), scale), Size::new(6000, 4000));
}

#[test]
fn test_display_fits_viewport() {
    let viewports = [(960, 540), (1280, 720), (1000, 800), (640, 1200), (1719, 1079)];
    let sources = [(6000, 4000), (8000, 6000), (7952, 5304), (6000, 9000), (10_001, 4000)];
    for &(vw, vh) in &viewports {
        for &(sw, sh) in &sources {
            let viewport = Viewport::new(vw, vh);
            let source = Size::new(sw, sh);
            let scale = display_scale(source, viewport);
            let expected = (vw as f64 / sw as f64).min(vh as f64 / sh as f64).min(1.0);
            assert_relative_eq!(scale, expected);
            assert!(scale <= 1.0);

            let display = display_size(source, scale);
            assert!(display.width <= vw, "{display} wider than {vw}");
            assert!(display.height <= vh, "{display} taller than {vh}");
        }
    }
}

#[test]
fn test_viewport_is_half_the_display() {
    assert_eq!(Viewport::from_display(Size::new(1920, 1080)), Viewport::new(960, 540));
    assert_eq!(Viewport::from_display(Size::new(2561, 1441)), Viewport::new(1280, 720));
}

#[test]
fn test_centering_offset_larger_surface() {
    assert_eq!(centering_offset(Size::new(1200, 900), Size::new(1000, 750)), (100, 75));
    // Odd slack floors
    assert_eq!(centering_offset(Size::new(1001, 751), Size::new(1000, 750)), (0, 0));
}

#[test]
fn test_centering_offset_smaller_surface_floors_down() {
    // (800-1000)/2 = -100, (749-750)/2 floors to -1
    assert_eq!(centering_offset(Size::new(800, 749), Size::new(1000, 750)), (-100, -1));
}

#[test]
fn test_transform_without_surface_has_no_offset() {
    let t = DisplayTransform::compute(Size::new(8000, 6000), Viewport::new(1000, 800), None);
    assert_eq!(t.display_size(), Size::new(1000, 750));
    assert_eq!((t.offset_x, t.offset_y), (0, 0));
}

#[test]
fn test_transform_is_idempotent_for_same_surface() {
    let source = Size::new(8000, 6000);
    let viewport = Viewport::new(1000, 800);
    let surface = Some(Size::new(1280, 900));
    let a = DisplayTransform::compute(source, viewport, surface);
    let b = DisplayTransform::compute(source, viewport, surface);
    assert_eq!(a, b);
    assert_eq!((a.offset_x, a.offset_y), (140, 75));
}

#[test]
fn test_surface_to_display_removes_offset() {
    let t = DisplayTransform::compute(
        Size::new(8000, 6000),
        Viewport::new(1000, 800),
        Some(Size::new(1200, 850)),
    );
    let rect = NormalizedRect {
        x1: 200.0,
        y1: 150.0,
        x2: 280.0,
        y2: 250.0,
    };
    let shifted = t.surface_to_display(rect);
    assert_relative_eq!(shifted.x1, 100.0);
    assert_relative_eq!(shifted.y1, 100.0);
    assert_relative_eq!(shifted.x2, 180.0);
    assert_relative_eq!(shifted.y2, 200.0);
}

#[test]
fn test_review_size_fits_and_may_enlarge() {
    // 640x800 crop in 960x540: scale 0.675
    assert_eq!(review_size(Size::new(640, 800), Viewport::new(960, 540)), Size::new(432, 540));
    // Small crop is enlarged to fill the viewport height
    assert_eq!(review_size(Size::new(40, 50), Viewport::new(960, 540)), Size::new(432, 540));
}
