use egui::Color32;
use log::info;

use crate::stroke::StrokeStyle;
use crate::tools::ToolKind;

/// The fixed set of brush widths offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Pen width in pixels
    pub fn width(self) -> u32 {
        match self {
            BrushSize::Small => 2,
            BrushSize::Medium => 5,
            BrushSize::Large => 10,
        }
    }
}

/// Tool, color and brush width picked in the toolbar.
///
/// Read by the canvas when a gesture starts; written only by toolbar actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    tool: ToolKind,
    color: Color32,
    brush_size: BrushSize,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pencil,
            color: Color32::BLACK,
            brush_size: BrushSize::Small,
        }
    }
}

impl ToolSettings {
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            info!("Tool selected: {}", tool.name());
            self.tool = tool;
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, brush_size: BrushSize) {
        self.brush_size = brush_size;
    }

    /// Style snapshot handed to a new gesture
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.brush_size.width())
    }
}

/// Light/dark switch. Only affects what is painted around the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    dark: bool,
    light_tint: Color32,
    dark_tint: Color32,
}

impl Theme {
    pub fn new(light_tint: Color32, dark_tint: Color32) -> Self {
        Self {
            dark: false,
            light_tint,
            dark_tint,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        info!("Dark mode {}", if self.dark { "on" } else { "off" });
    }

    /// Fill of the window area not covered by the canvas
    pub fn background_tint(&self) -> Color32 {
        if self.dark { self.dark_tint } else { self.light_tint }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}
