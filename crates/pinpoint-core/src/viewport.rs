/// Multiplier applied per wheel step: zoom in multiplies the accumulated
/// factor, zoom out divides it.
pub const ZOOM_STEP: f32 = 1.2;

/// Pan/zoom state for a bitmap drawn centered in a panel.
///
/// The bitmap's center maps to `panel_center + pan` on screen and scene-space
/// distances are scaled by `zoom`. The factor is deliberately unclamped.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub zoom: f32,
    /// Offset of the bitmap center from the panel center, in screen pixels.
    pub pan: [f32; 2],
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: [0.0, 0.0],
        }
    }
}

impl Viewport {
    /// Apply `steps` discrete wheel steps (positive zooms in), keeping the
    /// scene point under `pointer` stationary on screen.
    pub fn wheel_zoom(&mut self, steps: i32, pointer: [f32; 2], panel_center: [f32; 2]) {
        if steps == 0 {
            return;
        }
        let new_zoom = self.zoom * ZOOM_STEP.powi(steps);

        // Zoom toward the pointer: correct pan so the point under it stays put.
        let scale_change = new_zoom / self.zoom;
        self.pan[0] += (pointer[0] - panel_center[0] - self.pan[0]) * (1.0 - scale_change);
        self.pan[1] += (pointer[1] - panel_center[1] - self.pan[1]) * (1.0 - scale_change);

        self.zoom = new_zoom;
    }

    /// Accumulate a drag delta in screen pixels.
    pub fn pan_by(&mut self, delta: [f32; 2]) {
        self.pan[0] += delta[0];
        self.pan[1] += delta[1];
    }

    /// Zoom so the bitmap fits the panel, centered.
    pub fn fit(&mut self, bitmap_size: [f32; 2], panel_size: [f32; 2]) {
        let fit_x = panel_size[0] / bitmap_size[0];
        let fit_y = panel_size[1] / bitmap_size[1];
        self.zoom = fit_x.min(fit_y);
        self.pan = [0.0, 0.0];
    }

    /// Scene-space position under a screen point.
    pub fn scene_from_screen(
        &self,
        screen: [f32; 2],
        panel_center: [f32; 2],
        bitmap_size: [f32; 2],
    ) -> [f32; 2] {
        [
            (screen[0] - panel_center[0] - self.pan[0]) / self.zoom + bitmap_size[0] / 2.0,
            (screen[1] - panel_center[1] - self.pan[1]) / self.zoom + bitmap_size[1] / 2.0,
        ]
    }

    /// Screen position of a scene-space point.
    pub fn screen_from_scene(
        &self,
        scene: [f32; 2],
        panel_center: [f32; 2],
        bitmap_size: [f32; 2],
    ) -> [f32; 2] {
        [
            (scene[0] - bitmap_size[0] / 2.0) * self.zoom + panel_center[0] + self.pan[0],
            (scene[1] - bitmap_size[1] / 2.0) * self.zoom + panel_center[1] + self.pan[1],
        ]
    }
}
