use egui::Color32;

use crate::geometry::{PixelPos, PixelRect};

/// Pen color and width captured when a gesture starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    color: Color32,
    width: u32,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: u32) -> Self {
        Self {
            color,
            width: width.max(1),
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Offsets of a `width × width` square stamp relative to its center pixel.
    ///
    /// Even widths lean towards the min side: width 2 covers `-1..=0`.
    pub fn stamp_extent(&self) -> (i32, i32) {
        let width = self.width as i32;
        let lo = -(width / 2);
        (lo, lo + width - 1)
    }
}

/// The outline committed by a shape tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Line { from: PixelPos, to: PixelPos },
    Rectangle(PixelRect),
    Oval(PixelRect),
}

impl Shape {
    /// Corner points of the outline as an open polyline; closed outlines
    /// repeat their first point at the end.
    ///
    /// The oval is the ellipse inscribed in its box, sampled a multiple of four
    /// times so the four extreme points are hit exactly.
    pub fn vertices(&self) -> Vec<PixelPos> {
        match self {
            Shape::Line { from, to } => vec![*from, *to],
            Shape::Rectangle(rect) => {
                let min = rect.min();
                let max = rect.max();
                vec![
                    min,
                    PixelPos::new(max.x, min.y),
                    max,
                    PixelPos::new(min.x, max.y),
                    min,
                ]
            }
            Shape::Oval(rect) => oval_vertices(rect),
        }
    }
}

fn oval_vertices(rect: &PixelRect) -> Vec<PixelPos> {
    let rx = rect.width as f32 / 2.0;
    let ry = rect.height as f32 / 2.0;
    let cx = rect.x as f32 + rx;
    let cy = rect.y as f32 + ry;
    let steps = (((rx + ry) * 2.0).ceil() as usize).max(2) * 4;

    (0..=steps)
        .map(|i| {
            let angle = std::f32::consts::TAU * (i % steps) as f32 / steps as f32;
            PixelPos::new(
                (cx + rx * angle.cos()).round() as i32,
                (cy + ry * angle.sin()).round() as i32,
            )
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Oval,
}

impl ShapeKind {
    /// Lines keep the raw points; boxes are normalized so point order does not matter.
    pub fn between(self, start: PixelPos, end: PixelPos) -> Shape {
        match self {
            ShapeKind::Line => Shape::Line { from: start, to: end },
            ShapeKind::Rectangle => Shape::Rectangle(PixelRect::from_corners(start, end)),
            ShapeKind::Oval => Shape::Oval(PixelRect::from_corners(start, end)),
        }
    }
}

/// Transient state of one gesture: where it started, where the pointer was
/// last seen, and the style it was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStroke {
    start: PixelPos,
    last: PixelPos,
    style: StrokeStyle,
}

impl ActiveStroke {
    pub fn begin(start: PixelPos, style: StrokeStyle) -> Self {
        Self {
            start,
            last: start,
            style,
        }
    }

    /// Moves the reference point and returns the previous one.
    pub fn advance(&mut self, to: PixelPos) -> PixelPos {
        std::mem::replace(&mut self.last, to)
    }

    pub fn start(&self) -> PixelPos {
        self.start
    }

    pub fn last(&self) -> PixelPos {
        self.last
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}
