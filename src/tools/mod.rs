use serde::{Deserialize, Serialize};

use crate::render::RenderContext;

mod shapes;
pub use shapes::{
    StrokeInput, circle_radius, draw_circle, draw_line, draw_rectangle, draw_triangle,
    triangle_vertices,
};

/// A draw operation: renders one preview frame of the active tool
pub type DrawOp<C> = fn(&mut C, &StrokeInput);

/// The drawing mode selected in the tool panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveTool {
    Rectangle,
    Circle,
    Triangle,
    #[default]
    Brush,
    Eraser,
}

impl ActiveTool {
    /// Tools listed under "Shapes"
    pub const SHAPES: [ActiveTool; 3] = [Self::Rectangle, Self::Circle, Self::Triangle];

    /// Tools listed under "Options"
    pub const OPTIONS: [ActiveTool; 2] = [Self::Brush, Self::Eraser];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Brush => "brush",
            Self::Eraser => "eraser",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Rectangle => "⬜",
            Self::Circle => "⭕",
            Self::Triangle => "△",
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
        }
    }

    /// The draw operation bound to this tool
    pub fn draw_op<C: RenderContext>(self) -> DrawOp<C> {
        match self {
            Self::Brush | Self::Eraser => draw_line::<C>,
            Self::Rectangle => draw_rectangle::<C>,
            Self::Circle => draw_circle::<C>,
            Self::Triangle => draw_triangle::<C>,
        }
    }
}

impl std::fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
