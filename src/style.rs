use egui::Color32;
use serde::{Deserialize, Serialize};

/// Thinnest stroke the width slider allows
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Thickest stroke the width slider allows
pub const MAX_STROKE_WIDTH: u32 = 30;

/// Colour the eraser paints with. Always opaque white, whatever the backdrop.
pub const ERASER_COLOR: Color32 = Color32::WHITE;

/// Preset swatches shown in the colour group, in display order
pub const PALETTE: [(&str, Color32); 4] = [
    ("white", Color32::WHITE),
    ("black", Color32::BLACK),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
];

/// Stroke settings read at draw time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawStyle {
    pub stroke_color: Color32,
    stroke_width: u32,
    pub filled: bool,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color32::BLACK,
            stroke_width: 2,
            filled: false,
        }
    }
}

impl DrawStyle {
    pub fn new(stroke_color: Color32, stroke_width: u32, filled: bool) -> Self {
        Self {
            stroke_color,
            stroke_width: clamp_width(stroke_width),
            filled,
        }
    }

    pub fn stroke_width(&self) -> u32 {
        // Deserialized values bypass the setter
        clamp_width(self.stroke_width)
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = clamp_width(width);
    }

    /// Mutable access for slider bindings; the slider keeps it in range
    pub fn stroke_width_mut(&mut self) -> &mut u32 {
        &mut self.stroke_width
    }
}

fn clamp_width(width: u32) -> u32 {
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}
