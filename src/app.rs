use std::path::Path;

use crate::clipboard::{ImageClipboard, SystemClipboard};
use crate::config::AppConfig;
use crate::document::Document;
use crate::error::PaintError;
use crate::file_handler::{self, FileHandler};
use crate::input::InputHandler;
use crate::notification::{Notification, Notifications};
use crate::panels::{self, ToolbarAction};
use crate::renderer::Renderer;
use crate::state::{Theme, ToolSettings};

/// The application window: toolbar state, the drawing surface and the
/// adapters every toolbar action delegates to.
pub struct PaintApp {
    document: Document,
    settings: ToolSettings,
    theme: Theme,
    renderer: Renderer,
    input: InputHandler,
    file_handler: FileHandler,
    notifications: Notifications,
    clipboard: Box<dyn ImageClipboard>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::with_clipboard(AppConfig::default(), Box::new(SystemClipboard));
        cc.egui_ctx.set_visuals(app.theme.visuals());
        app
    }

    /// Builds the app around any clipboard; no window is needed until `update`.
    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn ImageClipboard>) -> Self {
        Self {
            document: Document::new(&config),
            settings: ToolSettings::default(),
            theme: Theme::new(config.light_tint, config.dark_tint),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            file_handler: FileHandler::new(),
            notifications: Notifications::default(),
            clipboard,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Runs one toolbar action. Actions needing a path open a native dialog
    /// first; cancelling it does nothing.
    pub fn perform(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Save => {
                if let Some(path) = file_handler::pick_save_path() {
                    self.save_to(&path);
                }
            }
            ToolbarAction::InsertImage => {
                if let Some(path) = file_handler::pick_image_path() {
                    self.insert_from(&path);
                }
            }
            ToolbarAction::Copy => self.copy(),
            ToolbarAction::Paste => self.paste(),
            ToolbarAction::Crop => self.crop(),
            ToolbarAction::SelectTool(kind) => self.settings.set_tool(kind),
            ToolbarAction::SetBrushSize(size) => self.settings.set_brush_size(size),
            ToolbarAction::SetColor(color) => self.settings.set_color(color),
            ToolbarAction::Clear => self.clear(),
            ToolbarAction::ToggleDarkMode => self.theme.toggle(),
        }
    }

    fn report(&mut self, headline: &str, result: Result<(), PaintError>) {
        if let Err(err) = result {
            self.notifications.push(Notification::from_error(headline, &err));
        }
    }

    pub fn save_to(&mut self, path: &Path) {
        match self.document.save(path) {
            Ok(()) => self
                .notifications
                .push(Notification::info("Image saved successfully.")),
            Err(err) => self.report("Error while saving.", Err(err)),
        }
    }

    pub fn insert_from(&mut self, path: &Path) {
        let result = self.document.insert_file(path);
        self.report("Could not insert the image.", result);
    }

    pub fn copy(&mut self) {
        let result = self.document.copy_to(self.clipboard.as_mut());
        self.report("Could not copy the canvas to the clipboard.", result);
    }

    pub fn paste(&mut self) {
        let result = self.document.paste_from(self.clipboard.as_mut());
        self.report("Could not paste the image from the clipboard.", result);
    }

    pub fn crop(&mut self) {
        let result = self.document.crop();
        self.report("Crop failed.", result);
    }

    pub fn clear(&mut self) {
        let result = self.document.clear();
        self.report("Could not clear the canvas.", result);
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        for (name, decoded) in self.file_handler.process_dropped_files() {
            let result = decoded
                .map_err(PaintError::from)
                .and_then(|image| self.document.insert_image(image));
            self.report(&format!("Could not insert {name}."), result);
        }
    }

    /// Lays out one frame. Needs only an egui context, so it also runs headless.
    pub fn ui(&mut self, ctx: &egui::Context) {
        if ctx.style().visuals.dark_mode != self.theme.is_dark() {
            ctx.set_visuals(self.theme.visuals());
        }

        self.handle_dropped_files(ctx);

        let actions = panels::toolbar(ctx, &self.settings, &self.theme);
        for action in actions {
            self.perform(action);
        }

        panels::central_panel(
            ctx,
            &mut self.document,
            &self.settings,
            &mut self.input,
            &mut self.renderer,
            self.theme.background_tint(),
            self.notifications.is_blocking(),
        );

        self.file_handler.preview_files_being_dropped(ctx);
        self.notifications.show(ctx);
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
