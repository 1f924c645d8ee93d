use egui::{Color32, ColorImage};
use image::{Rgba, RgbaImage, imageops};

use crate::geometry::PixelPos;
use crate::stroke::{Shape, StrokeStyle};

/// The raster buffer behind the drawing surface.
///
/// The size is fixed at construction. Every mutation bumps `revision` so the
/// renderer can tell when the GPU copy is stale.
#[derive(Clone)]
pub struct Canvas {
    buffer: RgbaImage,
    background: Color32,
    revision: u64,
}

// RgbaImage would dump every pixel
impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.buffer.width())
            .field("height", &self.buffer.height())
            .field("background", &self.background)
            .field("revision", &self.revision)
            .finish()
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

impl Canvas {
    /// Allocates a buffer of the given size filled with `background`.
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width.max(1), height.max(1), to_rgba(background)),
            background,
            revision: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn size(&self) -> [usize; 2] {
        [self.buffer.width() as usize, self.buffer.height() as usize]
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Color at `pos`, or `None` outside the buffer.
    pub fn pixel(&self, pos: PixelPos) -> Option<Color32> {
        if !self.contains(pos) {
            return None;
        }
        let [r, g, b, a] = self.buffer.get_pixel(pos.x as u32, pos.y as u32).0;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    pub fn contains(&self, pos: PixelPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.buffer.width()
            && (pos.y as u32) < self.buffer.height()
    }

    /// Fills the whole buffer with the background color.
    pub fn clear(&mut self) {
        let fill = to_rgba(self.background);
        for pixel in self.buffer.pixels_mut() {
            *pixel = fill;
        }
        self.touch();
    }

    /// Draws a straight pen segment. Equal endpoints draw a single stamp.
    pub fn draw_segment(&mut self, from: PixelPos, to: PixelPos, style: StrokeStyle) {
        self.plot_line(from, to, style);
        self.touch();
    }

    /// Draws the outline through [`Shape::vertices`], stamping every step.
    pub fn draw_shape(&mut self, shape: &Shape, style: StrokeStyle) {
        for pair in shape.vertices().windows(2) {
            self.plot_line(pair[0], pair[1], style);
        }
        self.touch();
    }

    /// Alpha-composites `image` with its top-left corner at `at`, clipping to
    /// the buffer.
    pub fn composite(&mut self, image: &RgbaImage, at: PixelPos) {
        imageops::overlay(&mut self.buffer, image, i64::from(at.x), i64::from(at.y));
        self.touch();
    }

    /// Copy of the buffer in egui's texture format.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(self.size(), self.buffer.as_raw())
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn stamp(&mut self, center: PixelPos, style: StrokeStyle) {
        let (lo, hi) = style.stamp_extent();
        let color = to_rgba(style.color());
        for dy in lo..=hi {
            for dx in lo..=hi {
                let p = PixelPos::new(center.x + dx, center.y + dy);
                if self.contains(p) {
                    self.buffer.put_pixel(p.x as u32, p.y as u32, color);
                }
            }
        }
    }

    // Bresenham, stamping at every step
    fn plot_line(&mut self, from: PixelPos, to: PixelPos, style: StrokeStyle) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.stamp(PixelPos::new(x, y), style);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
