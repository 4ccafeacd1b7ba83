use pinpoint_core::origin::OriginCorner;

use crate::app::PinpointApp;
use crate::panels::{helpers, menu_bar};

pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui.button("Open...").clicked() {
                menu_bar::open_file(app, ui.ctx());
            }

            ui.separator();
            helpers::enum_combo(ui, "Origin", &mut app.ui_state.origin, OriginCorner::ALL);

            let pages = app
                .ui_state
                .document
                .as_ref()
                .filter(|d| d.page_count > 1)
                .map(|d| (d.page_index, d.page_count));
            if let Some((index, count)) = pages {
                ui.separator();
                if ui
                    .add_enabled(index > 0, egui::Button::new("Prev"))
                    .clicked()
                {
                    app.goto_page(ui.ctx(), index - 1);
                }
                ui.label(format!("Page {}/{}", index + 1, count));
                if ui
                    .add_enabled(index + 1 < count, egui::Button::new("Next"))
                    .clicked()
                {
                    app.goto_page(ui.ctx(), index + 1);
                }
            }
        });
        ui.add_space(2.0);
    });
}
