use crate::app::PinpointApp;

pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let image_size = resolve_image_size(app, tex_size);
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_zoom(ui, &response, app, rect);
            handle_pan(ui, &response, app);

            if response.double_clicked() {
                app.viewport
                    .view
                    .fit([image_size.x, image_size.y], [rect.width(), rect.height()]);
            }

            track_pointer(ui, app, rect, image_size);

            let img_rect = compute_img_rect(rect, image_size, app);
            draw_image(ui, texture_id, img_rect);
            draw_viewing_label(ui, rect, &app.viewport.viewing_label);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn resolve_image_size(app: &PinpointApp, tex_size: [f32; 2]) -> egui::Vec2 {
    if let Some(size) = app.viewport.image_size {
        egui::vec2(size[0] as f32, size[1] as f32)
    } else {
        egui::vec2(tex_size[0], tex_size[1])
    }
}

/// One discrete zoom step per wheel event: a step in multiplies the factor,
/// a step out divides it.
fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut PinpointApp, rect: egui::Rect) {
    if !response.hovered() {
        return;
    }
    let steps: i32 = ui.input(|i| {
        i.events
            .iter()
            .map(|event| match event {
                egui::Event::MouseWheel { delta, .. } if delta.y > 0.0 => 1,
                egui::Event::MouseWheel { delta, .. } if delta.y < 0.0 => -1,
                _ => 0,
            })
            .sum()
    });
    if steps == 0 {
        return;
    }

    if let Some(pointer) = ui.input(|i| i.pointer.hover_pos()) {
        app.viewport.view.wheel_zoom(
            steps,
            [pointer.x, pointer.y],
            [rect.center().x, rect.center().y],
        );
    }
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut PinpointApp) {
    if response.dragged_by(egui::PointerButton::Middle)
        || (response.dragged_by(egui::PointerButton::Primary) && ui.input(|i| i.modifiers.command))
    {
        let delta = response.drag_delta();
        app.viewport.view.pan_by([delta.x, delta.y]);
    }
}

/// Record the pointer's scene position for the coordinate readout. Right
/// after a document is opened there is no position yet, so seed it from the
/// panel center; afterwards the last known position persists when the pointer
/// leaves the panel.
fn track_pointer(ui: &egui::Ui, app: &mut PinpointApp, rect: egui::Rect, image_size: egui::Vec2) {
    let center = [rect.center().x, rect.center().y];
    let size = [image_size.x, image_size.y];
    match ui.input(|i| i.pointer.hover_pos()).filter(|p| rect.contains(*p)) {
        Some(pos) => {
            app.viewport.scene_pos =
                Some(app.viewport.view.scene_from_screen([pos.x, pos.y], center, size));
        }
        None if app.viewport.scene_pos.is_none() => {
            app.viewport.scene_pos =
                Some(app.viewport.view.scene_from_screen(center, center, size));
        }
        None => {}
    }
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &PinpointApp) -> egui::Rect {
    let scaled = image_size * app.viewport.view.zoom;
    let center = rect.center() + egui::vec2(app.viewport.view.pan[0], app.viewport.view.pan[1]);
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image or PDF to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
