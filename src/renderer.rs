// src/renderer.rs
use eframe::egui::{self, Color32, Painter, Pos2, Rect, TextureHandle, TextureOptions, Vec2};

use crate::canvas::Canvas;
use crate::document::Document;
use crate::stroke::{Shape, StrokeStyle};

/// Paints the canvas texture, the tint around it, and the shape preview
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

// TextureHandle has no useful Debug
impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context for the current frame
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The area of the drawing surface
    ///     document (Document): Supplies the canvas and the gesture preview
    ///     tint (Color32): Fill for the area the canvas does not cover
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        document: &Document,
        tint: Color32,
    ) {
        painter.rect_filled(rect, 0.0, tint);

        let Some(canvas) = document.canvas() else {
            return;
        };

        let texture = self.update_texture(ctx, canvas);
        let canvas_rect = Rect::from_min_size(
            rect.min,
            egui::vec2(canvas.width() as f32, canvas.height() as f32),
        );
        painter.image(
            texture.id(),
            canvas_rect,
            Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        if let Some((shape, style)) = document.preview() {
            Self::paint_preview(painter, rect.min, &shape, style);
        }
    }

    /// True when the canvas changed since the last upload
    pub fn needs_upload(&self, canvas: &Canvas) -> bool {
        self.uploaded_revision != Some(canvas.revision()) || self.texture.is_none()
    }

    fn update_texture(&mut self, ctx: &egui::Context, canvas: &Canvas) -> &TextureHandle {
        if self.needs_upload(canvas) {
            let image = canvas.to_color_image();
            if let Some(handle) = self.texture.as_mut() {
                handle.set(image, TextureOptions::NEAREST);
            } else {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
            self.uploaded_revision = Some(canvas.revision());
        }
        self.texture.get_or_insert_with(|| {
            ctx.load_texture("canvas", canvas.to_color_image(), TextureOptions::NEAREST)
        })
    }

    fn paint_preview(painter: &Painter, origin: Pos2, shape: &Shape, style: StrokeStyle) {
        let stroke = egui::Stroke::new(style.width() as f32, style.color());
        let offset = origin.to_vec2();
        for [from, to] in preview_segments(shape, style) {
            painter.line_segment([from + offset, to + offset], stroke);
        }
    }
}

/// Canvas-space segments to stroke with a pen of `style.width()` so the preview
/// covers the pixels the committed outline will.
///
/// A stamp at pixel `p` covers `p + lo ..= p + hi`, so its center sits at
/// `p + lo + width / 2`. Each segment is lengthened by half the width at both
/// ends to give the square caps the stamps produce.
fn preview_segments(shape: &Shape, style: StrokeStyle) -> Vec<[Pos2; 2]> {
    let (lo, _) = style.stamp_extent();
    let half = style.width() as f32 / 2.0;
    let center = Vec2::splat(lo as f32 + half);

    shape
        .vertices()
        .windows(2)
        .map(|pair| {
            let from = pair[0].to_pos2() + center;
            let to = pair[1].to_pos2() + center;
            let dir = if from == to { Vec2::X } else { (to - from).normalized() };
            [from - dir * half, to + dir * half]
        })
        .collect()
}
