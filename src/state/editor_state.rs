//! The gesture state machine of the drawing surface.
//!
//! ```text
//! ┌──────────┐  pointer down   ┌─────────────┐
//! │          ├────────────────►│             │
//! │   Idle   │                 │  Stroking   ├──┐ pointer move
//! │          │◄────────────────┤             │◄─┘
//! └──────────┘   pointer up    └─────────────┘
//! ```
//!
//! The tool instance is created on pointer down from the toolbar selection
//! at that moment and lives only inside `Stroking`, so toolbar changes made
//! mid-gesture never leak into the gesture in progress.
use log::debug;

use crate::command::Command;
use crate::geometry::PixelPos;
use crate::stroke::StrokeStyle;
use crate::tools::{Tool, ToolKind, ToolType};

#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No pointer held on the canvas
    #[default]
    Idle,
    /// Pointer held; the tool captured at press time receives the gesture
    Stroking { active_tool: ToolType },
}

impl EditorState {
    /// Starts a gesture. A press while already stroking restarts the gesture
    /// and drops the old one without committing it.
    pub fn begin_stroke(&mut self, kind: ToolKind, style: StrokeStyle, pos: PixelPos) -> Option<Command> {
        if let Self::Stroking { active_tool } = self {
            debug!("Dropping unfinished {} gesture", active_tool.name());
        }

        let mut tool = kind.new_instance(style);
        let command = tool.on_pointer_down(pos);
        *self = Self::Stroking { active_tool: tool };
        command
    }

    pub fn continue_stroke(&mut self, pos: PixelPos) -> Option<Command> {
        self.active_tool_mut()?.on_pointer_move(pos)
    }

    /// Ends the gesture and returns to `Idle`.
    pub fn end_stroke(&mut self, pos: PixelPos) -> Option<Command> {
        match std::mem::take(self) {
            Self::Stroking { mut active_tool } => active_tool.on_pointer_up(pos),
            Self::Idle => None,
        }
    }

    /// Drops the gesture in progress without committing anything.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        match self {
            Self::Stroking { active_tool } => Some(active_tool),
            Self::Idle => None,
        }
    }

    pub fn active_tool_mut(&mut self) -> Option<&mut ToolType> {
        match self {
            Self::Stroking { active_tool } => Some(active_tool),
            Self::Idle => None,
        }
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_transitions() {
        let mut state = EditorState::default();
        assert!(!state.is_stroking());
        assert!(state.continue_stroke(PixelPos::new(1, 1)).is_none());
        assert!(state.end_stroke(PixelPos::new(1, 1)).is_none());

        let style = StrokeStyle::new(Color32::BLACK, 2);
        let dot = state.begin_stroke(ToolKind::Pencil, style, PixelPos::new(2, 2));
        assert!(dot.is_some());
        assert!(state.is_stroking());
        assert_eq!(state.active_tool().map(|t| t.name()), Some("Pencil"));

        state.end_stroke(PixelPos::new(2, 2));
        assert!(!state.is_stroking());
    }

    #[test]
    fn test_shape_commits_on_end() {
        let mut state = EditorState::default();
        let style = StrokeStyle::new(Color32::BLACK, 2);
        assert!(state.begin_stroke(ToolKind::Oval, style, PixelPos::new(0, 0)).is_none());
        assert!(state.continue_stroke(PixelPos::new(9, 9)).is_none());
        assert!(matches!(
            state.end_stroke(PixelPos::new(9, 9)),
            Some(Command::DrawShape { .. })
        ));
    }
}
