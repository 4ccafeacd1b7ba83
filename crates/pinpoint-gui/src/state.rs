use pinpoint_core::document::Document;
use pinpoint_core::origin::OriginCorner;
use pinpoint_core::viewport::Viewport;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub document: Option<Document>,
    pub origin: OriginCorner,
    /// Last status or error message, shown in the status bar.
    pub status: Option<String>,
}

impl UIState {
    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }
}

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Bordered bitmap size in pixels.
    pub image_size: Option<[usize; 2]>,
    /// Pan/zoom state, in core's panel-centered model.
    pub view: Viewport,
    /// Last pointer position in scene (bordered bitmap) space. `None` until
    /// the first frame after a document is opened; the viewport panel then
    /// seeds it from the panel center so the readout starts populated.
    pub scene_pos: Option<[f32; 2]>,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            view: Viewport::default(),
            scene_pos: None,
            viewing_label: String::new(),
        }
    }
}
