use eframe::egui;
use crate::tools::ActiveTool;

/// Toolbar entry showing a tool's icon and name, highlighted when active
pub struct ToolButton {
    pub tool: ActiveTool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ActiveTool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width().max(96.0), 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(74, 152, 247)
            } else if response.hovered() {
                egui::Color32::from_gray(60)
            } else {
                egui::Color32::from_gray(40)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(220)
            };
            ui.painter().text(
                rect.left_center() + egui::vec2(8.0, 0.0),
                egui::Align2::LEFT_CENTER,
                format!("{}  {}", self.tool.icon(), self.tool.label()),
                egui::FontId::proportional(16.0),
                text_color,
            );
        }

        response.on_hover_text(self.tool.label())
    }
}
