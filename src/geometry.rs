use egui::Pos2;

/// A position in canvas pixel coordinates.
///
/// Points may lie outside the canvas; raster operations clip per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a canvas-relative egui position by flooring each component.
    pub fn from_canvas_pos(pos: Pos2) -> Self {
        Self::new(pos.x.floor() as i32, pos.y.floor() as i32)
    }

    pub fn to_pos2(self) -> Pos2 {
        egui::pos2(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for PixelPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned box given by its min corner and non-negative extent.
///
/// The box spans `x..=x + width` and `y..=y + height`, so two equal corners
/// give a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Normalizes two arbitrary corners into a min corner plus absolute size.
    pub fn from_corners(a: PixelPos, b: PixelPos) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn min(&self) -> PixelPos {
        PixelPos::new(self.x, self.y)
    }

    pub fn max(&self) -> PixelPos {
        PixelPos::new(self.x + self.width, self.y + self.height)
    }
}
