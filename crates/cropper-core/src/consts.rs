/// Minimum accepted source width in pixels.
pub const MIN_SOURCE_WIDTH: u32 = 6000;

/// Minimum accepted source height in pixels.
pub const MIN_SOURCE_HEIGHT: u32 = 4000;

/// Width of every exported file.
pub const EXPORT_WIDTH: u32 = 1080;

/// Height of every exported file.
pub const EXPORT_HEIGHT: u32 = 1350;

/// Selection height per unit of selection width (4:5 portrait).
pub const ASPECT_HEIGHT_PER_WIDTH: f64 = 5.0 / 4.0;

/// Display size assumed when the primary monitor cannot be queried.
pub const FALLBACK_DISPLAY_WIDTH: u32 = 1920;

/// See [`FALLBACK_DISPLAY_WIDTH`].
pub const FALLBACK_DISPLAY_HEIGHT: u32 = 1080;

/// Extension appended to export paths that have none.
pub const DEFAULT_EXPORT_EXTENSION: &str = "jpg";

/// JPEG quality used for exports unless configured otherwise.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Minimum output pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Extensions offered by the open dialog.
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];
