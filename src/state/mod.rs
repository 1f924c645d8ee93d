mod editor_state;
mod settings;

pub use editor_state::EditorState;
pub use settings::{BrushSize, Theme, ToolSettings};
