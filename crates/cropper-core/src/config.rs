//! TOML description of a headless crop job.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FALLBACK_DISPLAY_HEIGHT, FALLBACK_DISPLAY_WIDTH};
use crate::error::{CropperError, Result};
use crate::export::ExportOptions;
use crate::geometry::{Point, Size, Viewport};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Primary display the selection was made on. The viewport is half of it.
    #[serde(default = "default_display")]
    pub display: Size,
    /// Drawing surface; defaults to the preview's own size.
    #[serde(default)]
    pub surface: Option<Size>,
    pub selection: SelectionConfig,
    #[serde(default)]
    pub export: ExportOptions,
}

/// Press and release points of the selection drag, in surface coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub press: [f64; 2],
    pub release: [f64; 2],
}

impl SelectionConfig {
    pub fn press_point(&self) -> Point {
        self.press.into()
    }

    pub fn release_point(&self) -> Point {
        self.release.into()
    }
}

fn default_display() -> Size {
    Size::new(FALLBACK_DISPLAY_WIDTH, FALLBACK_DISPLAY_HEIGHT)
}

impl CropJob {
    /// A job with example values, for `cropper config`.
    pub fn example() -> Self {
        Self {
            input: PathBuf::from("photo.jpg"),
            output: PathBuf::from("photo_1080x1350.jpg"),
            display: default_display(),
            surface: None,
            selection: SelectionConfig {
                press: [100.0, 100.0],
                release: [180.0, 200.0],
            },
            export: ExportOptions::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let job: Self = toml::from_str(content).map_err(|e| CropperError::Config(e.to_string()))?;
        job.validate()?;
        Ok(job)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CropperError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.is_empty() {
            return Err(CropperError::Config(format!(
                "display size must be non-zero, got {}",
                self.display
            )));
        }
        if self.surface.is_some_and(|s| s.is_empty()) {
            return Err(CropperError::Config("surface size must be non-zero".into()));
        }
        self.export.validate()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::from_display(self.display)
    }
}
