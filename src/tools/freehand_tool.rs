use crate::command::Command;
use crate::geometry::PixelPos;
use crate::stroke::{ActiveStroke, StrokeStyle};
use crate::tools::Tool;

/// Pencil: commits a segment for every pointer move
#[derive(Debug, Clone)]
pub struct FreehandTool {
    style: StrokeStyle,
    // Transient state: the stroke being drawn (if any)
    current_stroke: Option<ActiveStroke>,
}

impl FreehandTool {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            current_stroke: None,
        }
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn on_pointer_down(&mut self, pos: PixelPos) -> Option<Command> {
        self.current_stroke = Some(ActiveStroke::begin(pos, self.style));
        // A press without movement still leaves a dot
        Some(Command::DrawSegment {
            from: pos,
            to: pos,
            style: self.style,
        })
    }

    fn on_pointer_move(&mut self, pos: PixelPos) -> Option<Command> {
        let stroke = self.current_stroke.as_mut()?;
        let from = stroke.advance(pos);
        if from == pos {
            return None;
        }
        Some(Command::DrawSegment {
            from,
            to: pos,
            style: stroke.style(),
        })
    }

    fn on_pointer_up(&mut self, _pos: PixelPos) -> Option<Command> {
        // Everything was committed while dragging
        self.current_stroke = None;
        None
    }
}
