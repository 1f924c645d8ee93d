use std::sync::Arc;

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::geometry::PixelPos;
use crate::stroke::{Shape, StrokeStyle};

/// A raster operation produced by a tool or a toolbar action.
///
/// Commands are applied once and forgotten; there is no history.
#[derive(Clone)]
pub enum Command {
    /// One incremental piece of a freehand stroke
    DrawSegment {
        from: PixelPos,
        to: PixelPos,
        style: StrokeStyle,
    },
    /// Final outline of a shape gesture
    DrawShape {
        shape: Shape,
        style: StrokeStyle,
    },
    /// Fill the canvas with its background color
    Clear,
    /// Composite a decoded image (file, drop or clipboard)
    PlaceImage {
        image: Arc<RgbaImage>,
        at: PixelPos,
    },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::DrawSegment { from, to, style } => f
                .debug_struct("DrawSegment")
                .field("from", from)
                .field("to", to)
                .field("style", style)
                .finish(),
            Command::DrawShape { shape, style } => f
                .debug_struct("DrawShape")
                .field("shape", shape)
                .field("style", style)
                .finish(),
            Command::Clear => f.write_str("Clear"),
            Command::PlaceImage { image, at } => f
                .debug_struct("PlaceImage")
                .field("size", &image.dimensions())
                .field("at", at)
                .finish(),
        }
    }
}

impl Command {
    pub fn execute(&self, canvas: &mut Canvas) {
        match self {
            Command::DrawSegment { from, to, style } => canvas.draw_segment(*from, *to, *style),
            Command::DrawShape { shape, style } => canvas.draw_shape(shape, *style),
            Command::Clear => canvas.clear(),
            Command::PlaceImage { image, at } => canvas.composite(image, *at),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::DrawSegment { .. } => "DrawSegment",
            Command::DrawShape { .. } => "DrawShape",
            Command::Clear => "Clear",
            Command::PlaceImage { .. } => "PlaceImage",
        }
    }
}
