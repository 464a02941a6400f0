use std::path::PathBuf;

use thiserror::Error;

use crate::consts::{MIN_SOURCE_HEIGHT, MIN_SOURCE_WIDTH};

#[derive(Error, Debug)]
pub enum CropperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not open or decode the image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Could not save the image to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(
        "The selected image has insufficient resolution ({width}x{height}). \
         Please select an image with at least {min_w}x{min_h} pixels.",
        min_w = MIN_SOURCE_WIDTH,
        min_h = MIN_SOURCE_HEIGHT
    )]
    Resolution { width: u32, height: u32 },

    #[error("No image is loaded")]
    NoImage,

    #[error("No crop area selected")]
    EmptySelection,

    #[error("Failed to crop image: {0}")]
    Extraction(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CropperError {
    /// Short title for an error dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Io(_) | Self::Decode(_) => "Load Error",
            Self::Encode { .. } => "Save Error",
            Self::Resolution { .. } => "Resolution Error",
            Self::NoImage | Self::EmptySelection => "No Selection",
            Self::Extraction(_) => "Crop Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CropperError>;
