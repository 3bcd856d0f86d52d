use eframe::egui;

/// Round colour chip; outlined when it is the current stroke colour
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub name: &'static str,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, name: &'static str, selected: bool) -> Self {
        Self {
            color,
            name,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let radius = rect.width() / 2.0 - 2.0;
            painter.circle_filled(rect.center(), radius, self.color);
            painter.circle_stroke(
                rect.center(),
                radius,
                egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            );

            if self.selected {
                painter.circle_stroke(
                    rect.center(),
                    radius + 2.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(74, 152, 247)),
                );
            }
        }

        response.on_hover_text(self.name)
    }
}
