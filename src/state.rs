use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::style::{DrawStyle, ERASER_COLOR};
use crate::tools::ActiveTool;

/// Everything the tool panel controls: the active tool and the stroke style.
///
/// Persisted between runs through eframe storage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSelection {
    pub tool: ActiveTool,
    pub style: DrawStyle,
}

impl ToolSelection {
    pub fn new(tool: ActiveTool, style: DrawStyle) -> Self {
        Self { tool, style }
    }

    pub fn select_tool(&mut self, tool: ActiveTool) {
        if self.tool != tool {
            log::debug!("Tool selected: {} -> {}", self.tool, tool);
            self.tool = tool;
        }
    }

    pub fn select_color(&mut self, color: Color32) {
        self.style.stroke_color = color;
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
    }

    /// Colour actually used for strokes; the eraser ignores the palette.
    pub fn effective_stroke_color(&self) -> Color32 {
        if self.tool == ActiveTool::Eraser {
            ERASER_COLOR
        } else {
            self.style.stroke_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eraser_ignores_selected_color() {
        let mut selection = ToolSelection::default();
        selection.select_color(Color32::RED);
        assert_eq!(selection.effective_stroke_color(), Color32::RED);

        selection.select_tool(ActiveTool::Eraser);
        assert_eq!(selection.effective_stroke_color(), Color32::WHITE);
        assert_eq!(selection.style.stroke_color, Color32::RED);
    }

    #[test]
    fn test_selection_survives_json() {
        let selection = ToolSelection::new(
            ActiveTool::Triangle,
            DrawStyle::new(Color32::from_rgb(1, 2, 3), 12, true),
        );
        let json = serde_json::to_string(&selection).unwrap();
        let restored: ToolSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, selection);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let restored: ToolSelection = serde_json::from_str(r#"{"tool":"Circle"}"#).unwrap();
        assert_eq!(restored.tool, ActiveTool::Circle);
        assert_eq!(restored.style, DrawStyle::default());
    }
}
