use std::path::Path;

use image::RgbaImage;
use pdfium_render::prelude::{PdfRenderConfig, Pdfium};
use tracing::debug;

use super::PDF_RENDER_SCALE;
use crate::error::{PinpointError, Result};

/// Rasterize one page of a PDF at the fixed scale.
/// Returns the page bitmap and the document's total page count.
///
/// The pdfium library is bound per call and torn down when the call returns;
/// loads are sequential on the caller's thread, so no binding is held across
/// frames.
pub fn render_page(path: &Path, index: usize) -> Result<(RgbaImage, usize)> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| PinpointError::Pdf(e.to_string()))?;
    let pdfium = Pdfium::new(bindings);

    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| PinpointError::Pdf(e.to_string()))?;

    let pages = document.pages();
    let page_count = pages.len() as usize;
    if page_count == 0 {
        return Err(PinpointError::EmptyDocument);
    }
    if index >= page_count {
        return Err(PinpointError::PageOutOfRange {
            index,
            total: page_count,
        });
    }

    let page = pages
        .get(index as u16)
        .map_err(|e| PinpointError::Pdf(e.to_string()))?;
    let bitmap = page
        .render_with_config(&PdfRenderConfig::new().scale_page_by_factor(PDF_RENDER_SCALE))
        .map_err(|e| PinpointError::Pdf(e.to_string()))?;

    debug!(
        "Rasterized page {index} of {} at {PDF_RENDER_SCALE}x",
        path.display()
    );
    Ok((bitmap.as_image().to_rgba8(), page_count))
}
