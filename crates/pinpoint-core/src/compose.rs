use image::{imageops, Rgba, RgbaImage};

/// Width in pixels of the frame composited around every decoded bitmap.
pub const BORDER_WIDTH: u32 = 2;

const BORDER_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Composite the red frame around `bitmap`, growing each dimension by
/// `2 * BORDER_WIDTH`. Displayed coordinates are measured against the framed
/// result, so the frame is part of the scene.
pub fn with_border(bitmap: &RgbaImage) -> RgbaImage {
    let (w, h) = bitmap.dimensions();
    let mut framed =
        RgbaImage::from_pixel(w + 2 * BORDER_WIDTH, h + 2 * BORDER_WIDTH, BORDER_COLOR);
    imageops::overlay(
        &mut framed,
        bitmap,
        i64::from(BORDER_WIDTH),
        i64::from(BORDER_WIDTH),
    );
    framed
}
