use std::fmt;

/// The reference corner displayed pointer coordinates are computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OriginCorner {
    TopLeft,
    #[default]
    BottomLeft,
    TopRight,
    BottomRight,
}

impl OriginCorner {
    pub const ALL: &'static [Self] = &[
        Self::TopLeft,
        Self::BottomLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// Map a scene-space position to a coordinate measured from this corner
    /// of a `bitmap_size` bitmap.
    ///
    /// Pure corner arithmetic, no clamping: positions outside the bitmap
    /// yield negative or out-of-range values and are displayed as such.
    pub fn map(self, scene: [f32; 2], bitmap_size: [f32; 2]) -> [f32; 2] {
        let [x, y] = scene;
        let [w, h] = bitmap_size;
        match self {
            Self::TopLeft => [x, y],
            Self::BottomLeft => [x, h - y],
            Self::TopRight => [w - x, y],
            Self::BottomRight => [w - x, h - y],
        }
    }
}

impl fmt::Display for OriginCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLeft => write!(f, "Top Left"),
            Self::BottomLeft => write!(f, "Bottom Left"),
            Self::TopRight => write!(f, "Top Right"),
            Self::BottomRight => write!(f, "Bottom Right"),
        }
    }
}
