use crate::components::{ColorSwatch, ToolButton};
use crate::state::ToolSelection;
use crate::style::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, PALETTE};
use crate::tools::ActiveTool;

/// Buttons in the tool panel that act on the canvas rather than the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Clear,
    Export,
}

pub fn tools_panel(selection: &mut ToolSelection, ctx: &egui::Context) -> Option<PanelAction> {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| tools_panel_ui(ui, selection))
        .inner
}

fn tools_panel_ui(ui: &mut egui::Ui, selection: &mut ToolSelection) -> Option<PanelAction> {
    let mut action = None;

    ui.heading("Shapes");
    tool_group(ui, selection, &ActiveTool::SHAPES);
    let mut filled = selection.style.filled;
    if ui.checkbox(&mut filled, "Fill color").changed() {
        selection.set_filled(filled);
    }

    ui.separator();
    ui.heading("Options");
    tool_group(ui, selection, &ActiveTool::OPTIONS);

    ui.add(
        egui::Slider::new(
            selection.style.stroke_width_mut(),
            MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH,
        )
        .text("Size"),
    );

    ui.separator();
    ui.heading("Colors");
    ui.horizontal_wrapped(|ui| {
        for (name, color) in PALETTE {
            let selected = selection.style.stroke_color == color;
            if ColorSwatch::new(color, name, selected).show(ui).clicked() {
                log::info!("Color selected from palette: {}", name);
                selection.select_color(color);
            }
        }

        let mut picked = selection.style.stroke_color;
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut picked,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            selection.select_color(picked);
        }
    });

    ui.separator();
    ui.vertical_centered_justified(|ui| {
        if ui.button("Clear").clicked() {
            action = Some(PanelAction::Clear);
        }
        if ui.button("Save to image").clicked() {
            action = Some(PanelAction::Export);
        }
    });

    action
}

fn tool_group(ui: &mut egui::Ui, selection: &mut ToolSelection, tools: &[ActiveTool]) {
    for &tool in tools {
        if ToolButton::new(tool, selection.tool == tool).show(ui).clicked() {
            log::info!("Tool selected from UI: {}", tool);
            selection.select_tool(tool);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_renders_without_action() {
        let ctx = egui::Context::default();
        let mut selection = ToolSelection::default();
        let mut action = Some(PanelAction::Clear);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = tools_panel(&mut selection, ctx);
        });

        assert_eq!(action, None);
        assert_eq!(selection, ToolSelection::default());
    }
}
