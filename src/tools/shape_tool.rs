use log::debug;

use crate::command::Command;
use crate::geometry::PixelPos;
use crate::stroke::{ActiveStroke, Shape, ShapeKind, StrokeStyle};
use crate::tools::Tool;

/// Line, rectangle and oval: preview while dragging, commit on release
#[derive(Debug, Clone)]
pub struct ShapeTool {
    kind: ShapeKind,
    style: StrokeStyle,
    current_stroke: Option<ActiveStroke>,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind, style: StrokeStyle) -> Self {
        Self {
            kind,
            style,
            current_stroke: None,
        }
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
        }
    }

    fn on_pointer_down(&mut self, pos: PixelPos) -> Option<Command> {
        self.current_stroke = Some(ActiveStroke::begin(pos, self.style));
        None
    }

    fn on_pointer_move(&mut self, pos: PixelPos) -> Option<Command> {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.advance(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, pos: PixelPos) -> Option<Command> {
        let stroke = self.current_stroke.take()?;
        let shape = self.kind.between(stroke.start(), pos);
        debug!("Committing {:?} with {:?}", shape, stroke.style());
        Some(Command::DrawShape {
            shape,
            style: stroke.style(),
        })
    }

    fn preview(&self) -> Option<(Shape, StrokeStyle)> {
        self.current_stroke
            .as_ref()
            .map(|stroke| (self.kind.between(stroke.start(), stroke.last()), stroke.style()))
    }
}
