mod common;

use approx::assert_relative_eq;
use image::{Rgb, RgbImage};

use cropper_core::config::{CropJob, SelectionConfig};
use cropper_core::error::CropperError;
use cropper_core::export::{export_crop, ExportOptions, ExportOutcome};
use cropper_core::geometry::{PixelRect, Point, Size, Viewport};
use cropper_core::selection::Selection;
use cropper_core::session::{run_job, CropSession};
use cropper_core::source::SourceImage;

use common::blank_source;

/// 8000x6000 source in a 1000x800 viewport: scale 0.125, display 1000x750.
fn scenario_session() -> CropSession {
    let mut session = CropSession::new(Viewport::new(1000, 800));
    session.load_image(blank_source(8000, 6000)).unwrap();
    session
}

fn drag(session: &mut CropSession, from: (f64, f64), to: (f64, f64)) {
    session.on_press(Point::new(from.0, from.1));
    session.on_drag(Point::new(to.0, to.1));
    session.on_release();
}

#[test]
fn test_load_computes_display_transform() {
    let session = scenario_session();
    let t = session.transform().copied().unwrap();
    assert_relative_eq!(t.scale, 0.125);
    assert_eq!(t.display_size(), Size::new(1000, 750));
    assert_eq!((t.offset_x, t.offset_y), (0, 0));
    assert_eq!(session.selection(), &Selection::Idle);
}

#[test]
fn test_horizontal_drag_crop() {
    let mut session = scenario_session();
    drag(&mut session, (100.0, 100.0), (180.0, 100.0));

    let rect = session.selection().committed().copied().unwrap();
    assert_eq!(rect.anchor, Point::new(100.0, 100.0));
    assert_eq!(rect.end, Point::new(180.0, 200.0));

    let crop = session.commit_crop().unwrap();
    assert_eq!(crop.rect, PixelRect { x: 800, y: 800, width: 640, height: 800 });
    assert_eq!(crop.size(), Size::new(640, 800));
}

#[test]
fn test_upward_drag_crop_is_normalized() {
    let mut session = scenario_session();
    drag(&mut session, (100.0, 100.0), (180.0, 40.0));

    let crop = session.commit_crop().unwrap();
    // Display rect (100,0)-(180,100)
    assert_eq!(crop.rect, PixelRect { x: 800, y: 0, width: 640, height: 800 });
}

#[test]
fn test_zero_drag_is_empty_selection() {
    let mut session = scenario_session();
    session.on_press(Point::new(100.0, 100.0));
    session.on_release();

    let err = session.commit_crop().unwrap_err();
    assert!(matches!(err, CropperError::EmptySelection));
}

#[test]
fn test_crop_without_selection_is_empty_selection() {
    let session = scenario_session();
    assert!(matches!(session.commit_crop(), Err(CropperError::EmptySelection)));
}

#[test]
fn test_crop_while_dragging_is_empty_selection() {
    let mut session = scenario_session();
    session.on_press(Point::new(100.0, 100.0));
    session.on_drag(Point::new(180.0, 100.0));
    assert!(matches!(session.commit_crop(), Err(CropperError::EmptySelection)));
}

#[test]
fn test_crop_without_image_is_no_image() {
    let mut session = CropSession::new(Viewport::new(1000, 800));
    drag(&mut session, (0.0, 0.0), (50.0, 50.0));
    assert_eq!(session.selection(), &Selection::Idle);
    assert!(matches!(session.commit_crop(), Err(CropperError::NoImage)));
}

#[test]
fn test_rejected_load_keeps_previous_state() {
    let mut session = scenario_session();
    session.on_resize(Size::new(1200, 900));
    drag(&mut session, (200.0, 175.0), (280.0, 175.0));
    let transform = session.transform().copied();
    let selection = *session.selection();

    let err = session.load_image(blank_source(5999, 4000)).unwrap_err();
    assert!(matches!(err, CropperError::Resolution { width: 5999, height: 4000 }));
    assert_eq!(session.transform().copied(), transform);
    assert_eq!(session.selection(), &selection);
    assert_eq!(session.source().unwrap().size(), Size::new(8000, 6000));
}

#[test]
fn test_rejected_first_load_leaves_session_empty() {
    let mut session = CropSession::new(Viewport::new(960, 540));
    assert!(session.load_image(blank_source(6000, 3999)).is_err());
    assert!(!session.has_image());
    assert!(session.transform().is_none());
}

#[test]
fn test_new_load_discards_selection() {
    let mut session = scenario_session();
    drag(&mut session, (100.0, 100.0), (180.0, 100.0));
    session.load_image(blank_source(6000, 4000)).unwrap();
    assert_eq!(session.selection(), &Selection::Idle);
    assert_relative_eq!(session.transform().unwrap().scale, 1000.0 / 6000.0);
}

#[test]
fn test_resize_recenters_and_crop_follows() {
    let mut session = scenario_session();
    let t = *session.on_resize(Size::new(1200, 850)).unwrap();
    assert_eq!((t.offset_x, t.offset_y), (100, 50));

    // Same display rect as the horizontal scenario, shifted by the offset.
    drag(&mut session, (200.0, 150.0), (280.0, 150.0));
    let crop = session.commit_crop().unwrap();
    assert_eq!(crop.rect, PixelRect { x: 800, y: 800, width: 640, height: 800 });
}

#[test]
fn test_resize_twice_is_idempotent() {
    let mut session = scenario_session();
    let a = *session.on_resize(Size::new(1333, 777)).unwrap();
    let b = *session.on_resize(Size::new(1333, 777)).unwrap();
    assert_eq!(a, b);
    assert_eq!(session.surface(), Some(Size::new(1333, 777)));
}

#[test]
fn test_viewport_change_rescales() {
    let mut session = scenario_session();
    session.set_viewport(Viewport::new(500, 500));
    let t = session.transform().unwrap();
    assert_relative_eq!(t.scale, 0.0625);
    assert_eq!(t.display_size(), Size::new(500, 375));
}

#[test]
fn test_crop_uses_current_transform_after_viewport_change() {
    let mut session = scenario_session();
    drag(&mut session, (50.0, 50.0), (90.0, 50.0));
    session.set_viewport(Viewport::new(500, 500));
    // Factor is now 16 rather than 8.
    let crop = session.commit_crop().unwrap();
    assert_eq!(crop.rect, PixelRect { x: 800, y: 800, width: 640, height: 800 });
}

#[test]
fn test_preview_matches_display_size() {
    let session = scenario_session();
    let preview = session.preview().unwrap();
    assert_eq!(preview.dimensions(), (1000, 750));
}

#[test]
fn test_crop_content_comes_from_full_resolution_source() {
    let mut session = CropSession::new(Viewport::new(1000, 800));
    let pixels = RgbImage::from_fn(8000, 6000, |x, y| {
        if (800..1440).contains(&x) && (800..1600).contains(&y) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    session.load_image(SourceImage::new(pixels)).unwrap();
    drag(&mut session, (100.0, 100.0), (180.0, 100.0));

    let crop = session.commit_crop().unwrap();
    assert!(crop.pixels.pixels().all(|p| p.0 == [255, 255, 255]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let outcome = export_crop(&crop, Some(&path), &ExportOptions::default()).unwrap();
    assert_eq!(outcome, ExportOutcome::Saved(path.clone()));
    let written = image::open(&path).unwrap().to_rgb8();
    assert_eq!(written.dimensions(), (1080, 1350));
    assert!(written.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn test_run_job_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bmp");
    RgbImage::new(6000, 4000).save(&input).unwrap();

    let job = CropJob {
        input,
        output: dir.path().join("result"),
        display: Size::new(1920, 1080),
        surface: None,
        selection: SelectionConfig {
            press: [100.0, 100.0],
            release: [180.0, 40.0],
        },
        export: ExportOptions::default(),
    };
    let report = run_job(&job).unwrap();

    // 6000x4000 in 960x540: scale 0.135, display 810x540
    assert_eq!(report.transform.display_size(), Size::new(810, 540));
    assert_eq!(report.source, Size::new(6000, 4000));
    let expected = dir.path().join("result.jpg");
    assert_eq!(report.outcome, ExportOutcome::Saved(expected.clone()));
    let written = image::open(&expected).unwrap();
    assert_eq!((written.width(), written.height()), (1080, 1350));
}

#[test]
fn test_run_job_rejects_low_resolution_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("small.png");
    RgbImage::new(600, 400).save(&input).unwrap();

    let mut job = CropJob::example();
    job.input = input;
    job.output = dir.path().join("never.jpg");

    let err = run_job(&job).unwrap_err();
    assert!(matches!(err, CropperError::Resolution { .. }));
    assert!(!job.output.exists());
}

#[test]
fn test_run_job_reports_decode_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("not_an_image.jpg");
    std::fs::write(&input, b"definitely not a jpeg").unwrap();

    let mut job = CropJob::example();
    job.input = input;
    job.output = dir.path().join("never.jpg");

    let err = run_job(&job).unwrap_err();
    assert!(matches!(err, CropperError::Decode(_)));
    assert_eq!(err.title(), "Load Error");
}
