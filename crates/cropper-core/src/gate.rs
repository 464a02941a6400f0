use tracing::warn;

use crate::consts::{MIN_SOURCE_HEIGHT, MIN_SOURCE_WIDTH};
use crate::error::{CropperError, Result};
use crate::geometry::Size;

/// Reject sources smaller than the minimum resolution.
pub fn check_resolution(size: Size) -> Result<()> {
    if size.width < MIN_SOURCE_WIDTH || size.height < MIN_SOURCE_HEIGHT {
        warn!(
            width = size.width,
            height = size.height,
            "Source below minimum resolution"
        );
        return Err(CropperError::Resolution {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}
