use std::path::Path;

use image::{Rgba, RgbaImage};

use pinpoint_core::compose::BORDER_WIDTH;
use pinpoint_core::document::{Document, SourceKind, PDF_RENDER_SCALE, RASTER_EXTENSIONS};
use pinpoint_core::error::PinpointError;
use pinpoint_core::origin::OriginCorner;

#[test]
fn test_extension_dispatch_is_case_insensitive() {
    assert_eq!(
        SourceKind::from_path(Path::new("scan.PDF")).unwrap(),
        SourceKind::Portable
    );
    assert_eq!(
        SourceKind::from_path(Path::new("photo.Png")).unwrap(),
        SourceKind::Raster
    );
    assert_eq!(
        SourceKind::from_path(Path::new("photo.JPEG")).unwrap(),
        SourceKind::Raster
    );
}

#[test]
fn test_every_dialog_extension_is_accepted() {
    for ext in RASTER_EXTENSIONS {
        let path = format!("sample.{ext}");
        assert_eq!(
            SourceKind::from_path(Path::new(&path)).unwrap(),
            SourceKind::Raster
        );
    }
}

#[test]
fn test_unknown_extension_is_rejected() {
    // The error carries the full path, not just the extension, so the
    // status bar can show which file was refused.
    let err = SourceKind::from_path(Path::new("docs/notes.txt")).unwrap_err();
    assert!(matches!(
        err,
        PinpointError::UnsupportedExtension(path) if path == "docs/notes.txt"
    ));
}

#[test]
fn test_missing_extension_is_rejected() {
    let err = SourceKind::from_path(Path::new("docs/README")).unwrap_err();
    assert!(matches!(
        err,
        PinpointError::UnsupportedExtension(path) if path == "docs/README"
    ));
}

#[test]
fn test_page_space_is_identity_for_raster() {
    assert_eq!(SourceKind::Raster.page_space([13.5, 7.25]), [13.5, 7.25]);
}

#[test]
fn test_page_space_divides_and_floors_for_pdf() {
    assert_eq!(SourceKind::Portable.page_space([13.0, 7.0]), [6.0, 3.0]);
    assert_eq!(SourceKind::Portable.page_space([12.0, 8.0]), [6.0, 4.0]);
    assert_eq!(SourceKind::Portable.page_space([-3.0, 0.5]), [-2.0, 0.0]);
}

#[test]
fn test_pdf_coordinates_are_raster_coordinates_divided_by_the_scale() {
    // The same pointer position mapped against each corner must read the
    // raster value divided by the rasterization scale and floored.
    let size = [208.0, 294.0];
    let scene = [41.5, 133.0];
    for &corner in OriginCorner::ALL {
        let raster = SourceKind::Raster.page_space(corner.map(scene, size));
        let portable = SourceKind::Portable.page_space(corner.map(scene, size));
        assert_eq!(portable[0], (raster[0] / PDF_RENDER_SCALE).floor());
        assert_eq!(portable[1], (raster[1] / PDF_RENDER_SCALE).floor());
    }
}

#[test]
fn test_open_png_produces_bordered_single_page_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    let bitmap = RgbaImage::from_pixel(6, 4, Rgba([90, 120, 200, 255]));
    bitmap.save(&path).unwrap();

    let document = Document::open(&path).unwrap();
    assert_eq!(document.kind, SourceKind::Raster);
    assert_eq!(document.page_count, 1);
    assert_eq!(document.page_index, 0);
    assert_eq!(document.size(), [6 + 2 * BORDER_WIDTH, 4 + 2 * BORDER_WIDTH]);
    assert_eq!(document.bitmap.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    assert_eq!(
        document.bitmap.get_pixel(BORDER_WIDTH, BORDER_WIDTH),
        &Rgba([90, 120, 200, 255])
    );
}

#[test]
fn test_goto_page_rejects_out_of_range_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let mut document = Document::open(&path).unwrap();
    assert!(document.goto_page(0).is_ok());

    let err = document.goto_page(1).unwrap_err();
    assert!(matches!(
        err,
        PinpointError::PageOutOfRange { index: 1, total: 1 }
    ));
}

#[test]
fn test_open_missing_file_fails_with_io_error() {
    let err = Document::open(Path::new("/nonexistent/whatever.png")).unwrap_err();
    assert!(matches!(err, PinpointError::Io(_)));
}
