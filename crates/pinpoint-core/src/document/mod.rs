pub mod portable;
pub mod raster;

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::compose;
use crate::error::{PinpointError, Result};

/// Extensions accepted as raster images, by the loader and the open dialog.
pub const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Fixed multiplier applied when rasterizing a PDF page. Displayed
/// coordinates for PDF sources divide this back out to recover page space.
pub const PDF_RENDER_SCALE: f32 = 2.0;

/// High-level classification of a document source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Raster,
    Portable,
}

impl SourceKind {
    /// Derive the source kind from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| PinpointError::UnsupportedExtension(path.display().to_string()))?;
        match ext.as_str() {
            "pdf" => Ok(Self::Portable),
            _ if RASTER_EXTENSIONS.contains(&ext.as_str()) => Ok(Self::Raster),
            _ => Err(PinpointError::UnsupportedExtension(path.display().to_string())),
        }
    }

    /// Convert a bordered-bitmap coordinate to page space: identity for
    /// raster sources; for PDFs, divide out the rasterization scale and floor.
    pub fn page_space(self, xy: [f32; 2]) -> [f32; 2] {
        match self {
            Self::Raster => xy,
            Self::Portable => [
                (xy[0] / PDF_RENDER_SCALE).floor(),
                (xy[1] / PDF_RENDER_SCALE).floor(),
            ],
        }
    }
}

/// A loaded document: the bordered bitmap plus enough source information to
/// rasterize other pages on demand.
#[derive(Debug)]
pub struct Document {
    /// Decoded page with the red frame composited around it.
    pub bitmap: RgbaImage,
    pub kind: SourceKind,
    pub path: PathBuf,
    /// Current page, always 0 for raster sources.
    pub page_index: usize,
    pub page_count: usize,
}

impl Document {
    /// Open a document, dispatching on the file extension. Raster files are
    /// decoded whole; PDFs are rasterized at page 0.
    pub fn open(path: &Path) -> Result<Self> {
        let kind = SourceKind::from_path(path)?;
        let (bitmap, page_count) = match kind {
            SourceKind::Raster => (raster::decode(path)?, 1),
            SourceKind::Portable => portable::render_page(path, 0)?,
        };
        info!(
            "Opened {} ({:?}, {} page(s))",
            path.display(),
            kind,
            page_count
        );
        Ok(Self {
            bitmap: compose::with_border(&bitmap),
            kind,
            path: path.to_path_buf(),
            page_index: 0,
            page_count,
        })
    }

    /// Rasterize another page of a PDF document.
    pub fn goto_page(&mut self, index: usize) -> Result<()> {
        if index >= self.page_count {
            return Err(PinpointError::PageOutOfRange {
                index,
                total: self.page_count,
            });
        }
        if index == self.page_index {
            return Ok(());
        }
        let (bitmap, page_count) = portable::render_page(&self.path, index)?;
        self.replace_page(bitmap, index, page_count);
        Ok(())
    }

    /// Install a freshly rasterized page. The page count is taken from the
    /// load, so navigation bounds track the file on disk.
    fn replace_page(&mut self, bitmap: RgbaImage, index: usize, page_count: usize) {
        self.bitmap = compose::with_border(&bitmap);
        self.page_index = index;
        self.page_count = page_count;
    }

    /// Bordered bitmap dimensions in pixels.
    pub fn size(&self) -> [u32; 2] {
        let (w, h) = self.bitmap.dimensions();
        [w, h]
    }

    /// Convert a bordered-bitmap coordinate to page space for this source.
    pub fn page_space(&self, xy: [f32; 2]) -> [f32; 2] {
        self.kind.page_space(xy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgba;

    #[test]
    fn test_replace_page_refreshes_count_and_border() {
        let mut document = Document {
            bitmap: RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])),
            kind: SourceKind::Portable,
            path: PathBuf::from("stale.pdf"),
            page_index: 0,
            page_count: 3,
        };

        document.replace_page(RgbaImage::from_pixel(5, 2, Rgba([7, 7, 7, 255])), 1, 5);

        assert_eq!(document.page_index, 1);
        assert_eq!(document.page_count, 5);
        assert_eq!(
            document.size(),
            [5 + 2 * compose::BORDER_WIDTH, 2 + 2 * compose::BORDER_WIDTH]
        );
    }
}
