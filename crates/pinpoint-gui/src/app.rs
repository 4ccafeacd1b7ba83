use std::path::{Path, PathBuf};

use pinpoint_core::document::Document;

use crate::convert::bitmap_to_color_image;
use crate::panels;
use crate::state::{UIState, ViewportState};

pub struct PinpointApp {
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl PinpointApp {
    pub fn new(ctx: &egui::Context, startup_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        };
        if let Some(path) = startup_path {
            app.open_document(ctx, &path);
        }
        app
    }

    /// Open a document and make it the displayed one. Failures stay in the
    /// status bar; the previous document keeps showing.
    pub fn open_document(&mut self, ctx: &egui::Context, path: &Path) {
        match Document::open(path) {
            Ok(document) => {
                let [w, h] = document.size();
                self.ui_state.set_status(format!(
                    "Opened: {} ({}x{}, {} page(s))",
                    path.display(),
                    w,
                    h,
                    document.page_count
                ));
                self.ui_state.document = Some(document);
                // Readout is re-seeded from the panel center next frame.
                self.viewport.scene_pos = None;
                self.refresh_texture(ctx);
            }
            Err(err) => {
                tracing::error!("Failed to open {}: {err}", path.display());
                self.ui_state.set_status(format!("ERROR: {err}"));
            }
        }
    }

    /// Switch the displayed PDF page.
    pub fn goto_page(&mut self, ctx: &egui::Context, index: usize) {
        let Some(document) = self.ui_state.document.as_mut() else {
            return;
        };
        match document.goto_page(index) {
            Ok(()) => self.refresh_texture(ctx),
            Err(err) => {
                self.ui_state.set_status(format!("ERROR: {err}"));
            }
        }
    }

    /// Upload the current document's bordered bitmap as the viewport texture.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Some(document) = self.ui_state.document.as_ref() else {
            return;
        };
        let image = bitmap_to_color_image(&document.bitmap);
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = document
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
    }
}

impl eframe::App for PinpointApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Pinpoint")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Pinpoint");
                        ui.label("Image and PDF coordinate viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
