//! Version 2 of the viewer: version 1 plus an origin-corner selector.
//!
//! The coordinate readout is measured against the corner picked in the top
//! panel; everything else is version 1 unchanged.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

use pinpoint_core::document::Document;
use pinpoint_core::origin::OriginCorner;
use pinpoint_core::viewport::Viewport;

#[derive(Parser)]
#[command(name = "pinpoint-v2", about = "Image/PDF viewer with selectable origin corner")]
#[command(version)]
struct Cli {
    /// Image (.png/.jpg/.jpeg/.bmp) or PDF file to display
    file: PathBuf,
}

struct ViewerApp {
    texture: egui::TextureHandle,
    image_size: [usize; 2],
    view: Viewport,
    scene_pos: Option<[f32; 2]>,
    origin: OriginCorner,
}

impl ViewerApp {
    fn new(ctx: &egui::Context, path: &Path) -> anyhow::Result<Self> {
        let document = Document::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [
                document.bitmap.width() as usize,
                document.bitmap.height() as usize,
            ],
            document.bitmap.as_raw(),
        );
        let image_size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        Ok(Self {
            texture,
            image_size,
            view: Viewport::default(),
            scene_pos: None,
            origin: OriginCorner::default(),
        })
    }

    fn bitmap_size(&self) -> [f32; 2] {
        [self.image_size[0] as f32, self.image_size[1] as f32]
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("origin").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                egui::ComboBox::from_label("Origin")
                    .selected_text(self.origin.to_string())
                    .show_ui(ui, |ui| {
                        for &corner in OriginCorner::ALL {
                            ui.selectable_value(&mut self.origin, corner, corner.to_string());
                        }
                    });
            });
            ui.add_space(2.0);
        });

        egui::TopBottomPanel::bottom("coordinates").show(ctx, |ui| {
            let text = match self.scene_pos {
                Some(scene) => {
                    let [x, y] = self.origin.map(scene, self.bitmap_size());
                    format!("Mouse at: ({x:.1}, {y:.1})")
                }
                None => "Mouse at: (-, -)".to_string(),
            };
            ui.label(text);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_gray(30));

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            let size = self.bitmap_size();
            let center = [rect.center().x, rect.center().y];

            // One discrete zoom step per wheel event.
            let steps = wheel_steps(ui);
            if steps != 0 && response.hovered() {
                if let Some(pointer) = ui.input(|i| i.pointer.hover_pos()) {
                    self.view.wheel_zoom(steps, [pointer.x, pointer.y], center);
                }
            }

            if response.dragged_by(egui::PointerButton::Middle)
                || (response.dragged_by(egui::PointerButton::Primary)
                    && ui.input(|i| i.modifiers.command))
            {
                let delta = response.drag_delta();
                self.view.pan_by([delta.x, delta.y]);
            }

            if response.double_clicked() {
                self.view.fit(size, [rect.width(), rect.height()]);
            }

            match ui.input(|i| i.pointer.hover_pos()).filter(|p| rect.contains(*p)) {
                Some(pos) => {
                    self.scene_pos =
                        Some(self.view.scene_from_screen([pos.x, pos.y], center, size));
                }
                None if self.scene_pos.is_none() => {
                    // Seed the readout from the panel center on the first frame.
                    self.scene_pos = Some(self.view.scene_from_screen(center, center, size));
                }
                None => {}
            }

            let scaled = egui::vec2(size[0], size[1]) * self.view.zoom;
            let img_center = rect.center() + egui::vec2(self.view.pan[0], self.view.pan[1]);
            ui.painter().image(
                self.texture.id(),
                egui::Rect::from_center_size(img_center, scaled),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
    }
}

fn wheel_steps(ui: &egui::Ui) -> i32 {
    ui.input(|i| {
        i.events
            .iter()
            .map(|event| match event {
                egui::Event::MouseWheel { delta, .. } if delta.y > 0.0 => 1,
                egui::Event::MouseWheel { delta, .. } if delta.y < 0.0 => -1,
                _ => 0,
            })
            .sum()
    })
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Pinpoint v2"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinpoint v2",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(&cc.egui_ctx, &cli.file)?))),
    )
}
