use image::RgbaImage;

/// Convert a bordered RGBA bitmap to an egui ColorImage.
pub fn bitmap_to_color_image(bitmap: &RgbaImage) -> egui::ColorImage {
    let size = [bitmap.width() as usize, bitmap.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw())
}
