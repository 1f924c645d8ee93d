use std::path::Path;
use std::sync::Arc;

use egui::Color32;
use image::RgbaImage;
use log::{debug, info};

use crate::canvas::Canvas;
use crate::clipboard::ImageClipboard;
use crate::command::Command;
use crate::config::AppConfig;
use crate::error::{PaintError, PaintResult};
use crate::file_handler;
use crate::geometry::PixelPos;
use crate::state::{EditorState, ToolSettings};
use crate::stroke::{Shape, StrokeStyle};
use crate::tools::Tool;

/// The drawing surface: the lazily created canvas plus the gesture in progress.
///
/// Pointer events and toolbar actions land here; everything that touches
/// pixels goes through a [`Command`].
#[derive(Debug)]
pub struct Document {
    canvas: Option<Canvas>,
    state: EditorState,
    background: Color32,
    insert_offset: PixelPos,
    paste_offset: PixelPos,
}

impl Document {
    /// A document without a canvas; call [`Document::ensure_canvas`] on first paint.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            canvas: None,
            state: EditorState::default(),
            background: config.canvas_background,
            insert_offset: config.insert_offset,
            paste_offset: config.paste_offset,
        }
    }

    /// Allocates the canvas the first time it is called. Later calls never
    /// resize it.
    pub fn ensure_canvas(&mut self, width: u32, height: u32) -> &Canvas {
        let background = self.background;
        self.canvas.get_or_insert_with(|| {
            info!("Allocating {}x{} canvas", width, height);
            Canvas::new(width, height, background)
        })
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Outline of the shape gesture in progress, if any
    pub fn preview(&self) -> Option<(Shape, StrokeStyle)> {
        self.state.active_tool().and_then(|tool| tool.preview())
    }

    /// Starts a gesture with the toolbar selection as it is right now.
    pub fn pointer_down(&mut self, pos: PixelPos, settings: &ToolSettings) {
        if self.canvas.is_none() {
            return;
        }
        let command = self.state.begin_stroke(settings.tool(), settings.stroke_style(), pos);
        self.apply(command);
    }

    pub fn pointer_move(&mut self, pos: PixelPos) {
        let command = self.state.continue_stroke(pos);
        self.apply(command);
    }

    pub fn pointer_up(&mut self, pos: PixelPos) {
        let command = self.state.end_stroke(pos);
        self.apply(command);
    }

    /// Abandons the gesture in progress; shape tools commit nothing.
    pub fn cancel_gesture(&mut self) {
        if self.state.is_stroking() {
            debug!("Cancelling gesture in progress");
            self.state.cancel();
        }
    }

    fn apply(&mut self, command: Option<Command>) {
        if let (Some(command), Some(canvas)) = (command, self.canvas.as_mut()) {
            debug!("Executing {:?}", command);
            command.execute(canvas);
        }
    }

    fn canvas_mut(&mut self) -> PaintResult<&mut Canvas> {
        self.canvas.as_mut().ok_or(PaintError::CanvasUnavailable)
    }

    /// Fills the canvas with its background color.
    pub fn clear(&mut self) -> PaintResult<()> {
        Command::Clear.execute(self.canvas_mut()?);
        Ok(())
    }

    /// Draws an already decoded image at the insert offset.
    pub fn insert_image(&mut self, image: RgbaImage) -> PaintResult<()> {
        let at = self.insert_offset;
        self.place(image, at)
    }

    /// Decodes `path` and draws it at the insert offset. On failure the
    /// canvas is untouched.
    pub fn insert_file(&mut self, path: &Path) -> PaintResult<()> {
        self.canvas_mut()?;
        let image = file_handler::load_image(path)?;
        self.insert_image(image)
    }

    fn place(&mut self, image: RgbaImage, at: PixelPos) -> PaintResult<()> {
        let canvas = self.canvas_mut()?;
        info!("Placing {}x{} image at ({}, {})", image.width(), image.height(), at.x, at.y);
        Command::PlaceImage {
            image: Arc::new(image),
            at,
        }
        .execute(canvas);
        Ok(())
    }

    /// Writes the canvas to `path` as PNG. The canvas is never modified.
    pub fn save(&self, path: &Path) -> PaintResult<()> {
        let canvas = self.canvas.as_ref().ok_or(PaintError::CanvasUnavailable)?;
        file_handler::save_png(canvas, path)?;
        Ok(())
    }

    /// Puts the whole canvas on the clipboard.
    pub fn copy_to(&self, clipboard: &mut dyn ImageClipboard) -> PaintResult<()> {
        let canvas = self.canvas.as_ref().ok_or(PaintError::CanvasUnavailable)?;
        clipboard.set_image(canvas.buffer())?;
        Ok(())
    }

    /// Draws the clipboard image at the paste offset. On failure the canvas
    /// is untouched.
    pub fn paste_from(&mut self, clipboard: &mut dyn ImageClipboard) -> PaintResult<()> {
        self.canvas_mut()?;
        let image = clipboard.get_image()?;
        let at = self.paste_offset;
        self.place(image, at)
    }

    /// Placeholder until cropping exists
    pub fn crop(&self) -> PaintResult<()> {
        Err(PaintError::NotImplemented("Crop"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, MemoryClipboard};

    impl Document {
        pub(crate) fn with_canvas(config: &AppConfig, width: u32, height: u32) -> Self {
            let mut document = Self::new(config);
            document.ensure_canvas(width, height);
            document
        }
    }

    #[test]
    fn test_canvas_is_allocated_once() {
        let mut document = Document::new(&AppConfig::default());
        assert!(document.canvas().is_none());

        document.ensure_canvas(40, 30);
        document.ensure_canvas(400, 300);
        assert_eq!(document.canvas().map(|c| c.size()), Some([40, 30]));
    }

    #[test]
    fn test_actions_before_first_paint_fail() {
        let mut document = Document::new(&AppConfig::default());
        let mut clipboard = MemoryClipboard::new();

        assert!(matches!(document.clear(), Err(PaintError::CanvasUnavailable)));
        assert!(matches!(
            document.copy_to(&mut clipboard),
            Err(PaintError::CanvasUnavailable)
        ));
        assert!(matches!(clipboard.get_image(), Err(ClipboardError::Empty)));

        document.pointer_down(PixelPos::new(1, 1), &ToolSettings::default());
        assert!(!document.state.is_stroking());
    }

    #[test]
    fn test_crop_is_a_placeholder() {
        let document = Document::with_canvas(&AppConfig::default(), 10, 10);
        assert!(matches!(document.crop(), Err(PaintError::NotImplemented("Crop"))));
    }
}
