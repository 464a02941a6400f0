use cropper_core::config::CropJob;
use cropper_core::error::CropperError;
use cropper_core::geometry::{Point, Size, Viewport};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn test_minimal_job_uses_defaults() {
    let job = CropJob::from_toml_str(
        r#"
input = "in.jpg"
output = "out.jpg"

[selection]
press = [100.0, 100.0]
release = [180.0, 40.0]
"#,
    )
    .unwrap();

    assert_eq!(job.display, Size::new(1920, 1080));
    assert_eq!(job.viewport(), Viewport::new(960, 540));
    assert_eq!(job.surface, None);
    assert_eq!(job.export.jpeg_quality, 95);
    assert_eq!(job.selection.press_point(), Point::new(100.0, 100.0));
    assert_eq!(job.selection.release_point(), Point::new(180.0, 40.0));
}

#[test]
fn test_full_job() {
    let job = CropJob::from_toml_str(
        r#"
input = "in.jpg"
output = "out.png"

[display]
width = 2560
height = 1440

[surface]
width = 1400
height = 800

[selection]
press = [10.0, 20.0]
release = [50.0, 20.0]

[export]
jpeg_quality = 80
"#,
    )
    .unwrap();

    assert_eq!(job.viewport(), Viewport::new(1280, 720));
    assert_eq!(job.surface, Some(Size::new(1400, 800)));
    assert_eq!(job.export.jpeg_quality, 80);
}

#[test]
fn test_missing_selection_is_config_error() {
    let err = CropJob::from_toml_str("input = \"a.jpg\"\noutput = \"b.jpg\"\n").unwrap_err();
    assert!(matches!(err, CropperError::Config(_)));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_zero_quality_rejected() {
    let mut job = CropJob::example();
    job.export.jpeg_quality = 0;
    assert!(matches!(job.validate(), Err(CropperError::Config(_))));
}

#[test]
fn test_quality_above_100_rejected() {
    let mut job = CropJob::example();
    job.export.jpeg_quality = 101;
    assert!(job.validate().is_err());
}

#[test]
fn test_zero_display_rejected() {
    let mut job = CropJob::example();
    job.display = Size::new(0, 1080);
    assert!(matches!(job.validate(), Err(CropperError::Config(_))));
}

#[test]
fn test_zero_surface_rejected() {
    let mut job = CropJob::example();
    job.surface = Some(Size::new(800, 0));
    assert!(job.validate().is_err());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_example_job_serializes_to_parsable_toml() {
    let job = CropJob::example();
    let text = job.to_toml_string().unwrap();
    assert!(text.contains("input = \"photo.jpg\""), "{text}");
    assert!(text.contains("jpeg_quality = 95"), "{text}");

    let parsed = CropJob::from_toml_str(&text).unwrap();
    assert_eq!(parsed, job);
}

#[test]
fn test_job_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.toml");
    std::fs::write(&path, CropJob::example().to_toml_string().unwrap()).unwrap();

    let job = CropJob::from_file(&path).unwrap();
    assert_eq!(job.input, std::path::PathBuf::from("photo.jpg"));
}

#[test]
fn test_job_from_missing_file_is_io_error() {
    let err = CropJob::from_file(std::path::Path::new("/nonexistent/job.toml")).unwrap_err();
    assert!(matches!(err, CropperError::Io(_)));
}
