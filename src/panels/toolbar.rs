use eframe::egui;

use crate::components::ToolButton;
use crate::state::{BrushSize, Theme, ToolSettings};
use crate::tools::ToolKind;

/// Something the user asked for from the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Save,
    InsertImage,
    Copy,
    Paste,
    Crop,
    SelectTool(ToolKind),
    SetBrushSize(BrushSize),
    SetColor(egui::Color32),
    Clear,
    ToggleDarkMode,
}

fn action_button(
    ui: &mut egui::Ui,
    icon: &'static str,
    tooltip: &'static str,
    action: ToolbarAction,
    actions: &mut Vec<ToolbarAction>,
) {
    if ToolButton::new(icon, tooltip).show(ui).clicked() {
        actions.push(action);
    }
}

/// Shows the toolbar and returns the actions clicked this frame.
pub fn toolbar(ctx: &egui::Context, settings: &ToolSettings, theme: &Theme) -> Vec<ToolbarAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            action_button(ui, "💾", "Save", ToolbarAction::Save, &mut actions);
            action_button(ui, "🖼", "Insert image", ToolbarAction::InsertImage, &mut actions);
            action_button(ui, "📋", "Copy", ToolbarAction::Copy, &mut actions);
            action_button(ui, "📥", "Paste", ToolbarAction::Paste, &mut actions);
            action_button(ui, "✂", "Crop", ToolbarAction::Crop, &mut actions);

            ui.separator();

            for kind in ToolKind::ALL {
                let button = ToolButton::new(kind.icon(), kind.name()).selected(settings.tool() == kind);
                if button.show(ui).clicked() {
                    actions.push(ToolbarAction::SelectTool(kind));
                }
            }

            let mut brush_size = settings.brush_size();
            egui::ComboBox::from_id_salt("brush_size")
                .selected_text(format!("🔧 {} px", brush_size.width()))
                .width(80.0)
                .show_ui(ui, |ui| {
                    for size in BrushSize::ALL {
                        ui.selectable_value(&mut brush_size, size, format!("{} px", size.width()));
                    }
                })
                .response
                .on_hover_text("Brush size");
            if brush_size != settings.brush_size() {
                actions.push(ToolbarAction::SetBrushSize(brush_size));
            }

            let mut color = settings.color();
            egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque)
                .on_hover_text("Color");
            if color != settings.color() {
                actions.push(ToolbarAction::SetColor(color));
            }

            action_button(ui, "🗑", "Clear", ToolbarAction::Clear, &mut actions);

            let theme_icon = if theme.is_dark() { "☀" } else { "🌙" };
            action_button(ui, theme_icon, "Light/dark mode", ToolbarAction::ToggleDarkMode, &mut actions);
        });
    });

    actions
}
