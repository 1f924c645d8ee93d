use crate::document::Document;
use crate::state::ToolSettings;

use super::InputEvent;

/// Routes a canvas input event to the document. Tool settings are only read
/// when a gesture starts.
pub fn route_event(event: &InputEvent, document: &mut Document, settings: &ToolSettings) {
    match *event {
        InputEvent::PointerDown { pos } => document.pointer_down(pos, settings),
        InputEvent::PointerMove { pos } => document.pointer_move(pos),
        InputEvent::PointerUp { pos } => document.pointer_up(pos),
    }
}
