use egui::{Color32, Vec2};

use crate::geometry::PixelPos;

/// Compile-time defaults for the application window and the canvas.
///
/// Nothing here is read from disk or the environment; `AppConfig::default()`
/// is the only source. Tests construct their own values to move offsets
/// around.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Initial inner size of the window in points
    pub window_size: Vec2,
    /// Where an inserted image file is drawn on the canvas
    pub insert_offset: PixelPos,
    /// Where a pasted clipboard image is drawn on the canvas
    pub paste_offset: PixelPos,
    /// Fill color of a fresh or cleared canvas
    pub canvas_background: Color32,
    /// Tint behind the canvas in light mode
    pub light_tint: Color32,
    /// Tint behind the canvas in dark mode
    pub dark_tint: Color32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "ModernPaint".to_owned(),
            window_size: egui::vec2(1000.0, 650.0),
            insert_offset: PixelPos::new(50, 50),
            paste_offset: PixelPos::new(100, 100),
            canvas_background: Color32::WHITE,
            light_tint: Color32::WHITE,
            dark_tint: Color32::DARK_GRAY,
        }
    }
}
