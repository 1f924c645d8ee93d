use crate::command::Command;
use crate::geometry::PixelPos;
use crate::stroke::{Shape, ShapeKind, StrokeStyle};

/// Tool trait defines how a drawing tool turns one gesture into raster commands
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    /// Return a Command to draw immediately, or None.
    fn on_pointer_down(&mut self, pos: PixelPos) -> Option<Command>;

    /// Handle pointer drag while the pointer is held down.
    fn on_pointer_move(&mut self, pos: PixelPos) -> Option<Command>;

    /// Handle pointer release. Return a Command to finalize the gesture.
    fn on_pointer_up(&mut self, pos: PixelPos) -> Option<Command>;

    /// Outline to overlay while the gesture is in progress
    fn preview(&self) -> Option<(Shape, StrokeStyle)> {
        None
    }
}

mod freehand_tool;
pub use freehand_tool::FreehandTool;

mod shape_tool;
pub use shape_tool::ShapeTool;

/// The tools a user can pick from the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Pencil,
    Line,
    Rectangle,
    Oval,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pencil,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Oval,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Oval => "Oval",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Pencil => "✏",
            ToolKind::Line => "╱",
            ToolKind::Rectangle => "⬜",
            ToolKind::Oval => "⭕",
        }
    }

    /// Create a fresh tool instance bound to the style of the gesture being started
    pub fn new_instance(self, style: StrokeStyle) -> ToolType {
        match self {
            ToolKind::Pencil => ToolType::Freehand(FreehandTool::new(style)),
            ToolKind::Line => ToolType::Shape(ShapeTool::new(ShapeKind::Line, style)),
            ToolKind::Rectangle => ToolType::Shape(ShapeTool::new(ShapeKind::Rectangle, style)),
            ToolKind::Oval => ToolType::Shape(ShapeTool::new(ShapeKind::Oval, style)),
        }
    }
}

/// Enum representing all live tool instances, avoiding Box<dyn Tool>
#[derive(Debug, Clone)]
pub enum ToolType {
    Freehand(FreehandTool),
    Shape(ShapeTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Freehand(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: PixelPos) -> Option<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_down(pos),
            Self::Shape(tool) => tool.on_pointer_down(pos),
        }
    }

    fn on_pointer_move(&mut self, pos: PixelPos) -> Option<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_move(pos),
            Self::Shape(tool) => tool.on_pointer_move(pos),
        }
    }

    fn on_pointer_up(&mut self, pos: PixelPos) -> Option<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_up(pos),
            Self::Shape(tool) => tool.on_pointer_up(pos),
        }
    }

    fn preview(&self) -> Option<(Shape, StrokeStyle)> {
        match self {
            Self::Freehand(tool) => tool.preview(),
            Self::Shape(tool) => tool.preview(),
        }
    }
}
