use crate::document::Document;
use crate::input::{InputHandler, route_event};
use crate::renderer::Renderer;
use crate::state::ToolSettings;

/// The drawing surface: allocates the canvas on first paint, feeds pointer
/// input to the document and paints the result.
///
/// With `input_blocked` set (a modal is open) any gesture in progress is
/// abandoned and pointer input is ignored.
pub fn central_panel(
    ctx: &egui::Context,
    document: &mut Document,
    settings: &ToolSettings,
    input: &mut InputHandler,
    renderer: &mut Renderer,
    tint: egui::Color32,
    input_blocked: bool,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(tint))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            if canvas_rect.width() >= 1.0 && canvas_rect.height() >= 1.0 {
                document.ensure_canvas(canvas_rect.width() as u32, canvas_rect.height() as u32);
            }
            input.set_canvas_rect(canvas_rect);
            input.set_canvas_layer(response.layer_id);

            if input_blocked {
                input.reset();
                document.cancel_gesture();
            } else {
                for event in input.process_input(ctx) {
                    route_event(&event, document, settings);
                }
            }

            renderer.render(ctx, &painter, canvas_rect, document, tint);

            if document.canvas().is_some() {
                response.on_hover_cursor(egui::CursorIcon::Crosshair);
            }
        });
}
