use egui::{Context, LayerId, PointerButton, Pos2, Rect};

use crate::geometry::PixelPos;

mod router;
pub use router::route_event;

/// Gesture-level pointer events in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: PixelPos },
    /// Pointer moved while the press is held
    PointerMove { pos: PixelPos },
    /// Primary button released, wherever the pointer is
    PointerUp { pos: PixelPos },
}

/// One frame's worth of primary-button pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    /// Another layer (a popup, a window) sits above the canvas at `pos`
    pub covered: bool,
}

impl PointerSample {
    pub fn from_context(ctx: &Context, canvas_layer: LayerId) -> Self {
        let mut sample = ctx.input(|input| Self {
            pos: input.pointer.interact_pos().or(input.pointer.hover_pos()),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            down: input.pointer.button_down(PointerButton::Primary),
            covered: false,
        });
        // Panels are not areas, so an uncovered canvas has no layer here
        sample.covered = sample
            .pos
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer != canvas_layer);
        sample
    }
}

/// Turns raw egui pointer state into gesture events for the canvas.
///
/// A gesture only starts on a press inside the canvas rect, but once started
/// it follows the pointer anywhere until release.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
    canvas_layer: Option<LayerId>,
    pressing: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update where the canvas sits on screen this frame
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// The layer the canvas is painted on. Presses over any other layer are
    /// left to that layer.
    pub fn set_canvas_layer(&mut self, layer: LayerId) {
        self.canvas_layer = Some(layer);
    }

    fn to_canvas(&self, pos: Pos2) -> PixelPos {
        let origin = self.canvas_rect.map_or(Pos2::ZERO, |rect| rect.min);
        PixelPos::from_canvas_pos((pos - origin).to_pos2())
    }

    fn over_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let canvas_layer = self.canvas_layer.unwrap_or_else(LayerId::background);
        self.process_sample(PointerSample::from_context(ctx, canvas_layer))
    }

    pub fn process_sample(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pos = sample.pos.or(self.last_pointer_pos);

        if let Some(pos) = pos {
            if sample.pressed && !self.pressing && !sample.covered && self.over_canvas(pos) {
                self.pressing = true;
                events.push(InputEvent::PointerDown {
                    pos: self.to_canvas(pos),
                });
            } else if self.pressing && sample.down && Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove {
                    pos: self.to_canvas(pos),
                });
            }

            if sample.released && self.pressing {
                self.pressing = false;
                events.push(InputEvent::PointerUp {
                    pos: self.to_canvas(pos),
                });
            }
        } else if sample.released && self.pressing {
            // No position to report the release at
            self.pressing = false;
        }

        if sample.pos.is_some() {
            self.last_pointer_pos = sample.pos;
        }
        events
    }

    /// Forget a gesture in progress, e.g. when a modal takes over input
    pub fn reset(&mut self) {
        self.pressing = false;
    }
}
