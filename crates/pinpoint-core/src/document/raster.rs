use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::Result;

/// Decode a raster image file to RGBA.
pub fn decode(path: &Path) -> Result<RgbaImage> {
    let image = ImageReader::open(path)?.decode()?;
    Ok(image.to_rgba8())
}
