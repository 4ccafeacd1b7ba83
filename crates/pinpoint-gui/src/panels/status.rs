use pinpoint_core::document::SourceKind;

use crate::app::PinpointApp;

pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if let Some(text) = coordinate_text(app) {
                ui.label(text);
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.view.zoom * 100.0));
            if let Some(size) = app.viewport.image_size {
                ui.separator();
                ui.label(format!("{}x{}", size[0], size[1]));
            }
            if let Some(document) = &app.ui_state.document {
                if document.kind == SourceKind::Portable {
                    ui.separator();
                    ui.label(format!(
                        "Page {}/{}",
                        document.page_index + 1,
                        document.page_count
                    ));
                }
            }
            if let Some(message) = &app.ui_state.status {
                ui.separator();
                ui.label(message);
            }
        });
        ui.add_space(2.0);
    });
}

/// Corner-relative readout for the last known pointer position. Raster
/// coordinates keep one decimal of scene precision; PDF coordinates are
/// divided down to page space and floored, so they print as integers.
fn coordinate_text(app: &PinpointApp) -> Option<String> {
    let scene = app.viewport.scene_pos?;
    let size = app.viewport.image_size?;
    let document = app.ui_state.document.as_ref()?;

    let mapped = app
        .ui_state
        .origin
        .map(scene, [size[0] as f32, size[1] as f32]);
    let text = match document.kind {
        SourceKind::Raster => format!("Mouse at: ({:.1}, {:.1})", mapped[0], mapped[1]),
        SourceKind::Portable => {
            let [x, y] = document.page_space(mapped);
            format!("Mouse at: ({x:.0}, {y:.0})")
        }
    };
    Some(text)
}
