use egui::{Pos2, pos2};
use std::f32::consts::TAU;

use crate::render::RenderContext;

/// What a draw operation needs to render one preview frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeInput {
    /// Pointer-down position of the current stroke, if there is one
    pub origin: Option<Pos2>,
    /// Current pointer position
    pub pos: Pos2,
    pub filled: bool,
}

/// Distance from the stroke origin to the pointer
pub fn circle_radius(origin: Pos2, pos: Pos2) -> f32 {
    origin.distance(pos)
}

/// Apex at the origin, one base vertex at the pointer and the other mirrored
/// across the apex's vertical line.
pub fn triangle_vertices(origin: Pos2, pos: Pos2) -> [Pos2; 3] {
    [origin, pos, pos2(2.0 * origin.x - pos.x, pos.y)]
}

/// Extend the running path to the pointer and stroke it.
pub fn draw_line<C: RenderContext>(ctx: &mut C, input: &StrokeInput) {
    ctx.line_to(input.pos);
    ctx.stroke();
}

pub fn draw_rectangle<C: RenderContext>(ctx: &mut C, input: &StrokeInput) {
    let Some(origin) = input.origin else {
        return;
    };
    let size = input.pos - origin;

    ctx.begin_path();
    if input.filled {
        ctx.fill_rect(origin, size);
    } else {
        ctx.rect(origin, size);
    }
    ctx.stroke();
}

/// Circles are outline only; the fill toggle does not apply.
pub fn draw_circle<C: RenderContext>(ctx: &mut C, input: &StrokeInput) {
    let Some(origin) = input.origin else {
        return;
    };

    ctx.begin_path();
    ctx.arc(origin, circle_radius(origin, input.pos), 0.0, TAU);
    ctx.stroke();
}

pub fn draw_triangle<C: RenderContext>(ctx: &mut C, input: &StrokeInput) {
    let Some(origin) = input.origin else {
        return;
    };
    let [apex, base, mirrored] = triangle_vertices(origin, input.pos);

    ctx.begin_path();
    ctx.move_to(apex);
    ctx.line_to(base);
    ctx.line_to(mirrored);
    ctx.close_path();
    if input.filled {
        ctx.fill();
    } else {
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingContext};
    use egui::vec2;

    fn input(origin: Option<Pos2>, pos: Pos2, filled: bool) -> StrokeInput {
        StrokeInput {
            origin,
            pos,
            filled,
        }
    }

    #[test]
    fn test_rectangle_allows_negative_extent() {
        let mut ctx = RecordingContext::new(100, 100);
        draw_rectangle(&mut ctx, &input(Some(pos2(50.0, 60.0)), pos2(20.0, 10.0), false));
        assert_eq!(
            ctx.calls()[1],
            DrawCall::Rect {
                origin: pos2(50.0, 60.0),
                size: vec2(-30.0, -50.0)
            }
        );
    }

    #[test]
    fn test_filled_rectangle_uses_fill_rect() {
        let mut ctx = RecordingContext::new(100, 100);
        draw_rectangle(&mut ctx, &input(Some(pos2(1.0, 2.0)), pos2(3.0, 5.0), true));
        assert!(matches!(
            ctx.calls()[1],
            DrawCall::FillRect { origin, size, .. } if origin == pos2(1.0, 2.0) && size == vec2(2.0, 3.0)
        ));
    }

    #[test]
    fn test_shapes_skip_without_origin() {
        let ops: [fn(&mut RecordingContext, &StrokeInput); 3] =
            [draw_rectangle, draw_circle, draw_triangle];
        for op in ops {
            let mut ctx = RecordingContext::new(100, 100);
            op(&mut ctx, &input(None, pos2(5.0, 5.0), true));
            assert!(ctx.calls().is_empty());
        }
    }

    #[test]
    fn test_origin_at_zero_is_valid() {
        let mut ctx = RecordingContext::new(100, 100);
        draw_circle(&mut ctx, &input(Some(Pos2::ZERO), pos2(3.0, 4.0), false));
        assert!(matches!(
            ctx.calls()[1],
            DrawCall::Arc { center, radius, .. } if center == Pos2::ZERO && radius == 5.0
        ));
    }

    #[test]
    fn test_triangle_mirrors_base_vertex() {
        assert_eq!(
            triangle_vertices(pos2(10.0, 10.0), pos2(25.0, 40.0)),
            [pos2(10.0, 10.0), pos2(25.0, 40.0), pos2(-5.0, 40.0)]
        );
    }

    #[test]
    fn test_filled_triangle_is_not_stroked() {
        let mut ctx = RecordingContext::new(100, 100);
        draw_triangle(&mut ctx, &input(Some(pos2(10.0, 10.0)), pos2(20.0, 30.0), true));
        assert!(matches!(ctx.calls().last(), Some(DrawCall::Fill { .. })));
        assert!(!ctx.calls().iter().any(|c| matches!(c, DrawCall::Stroke { .. })));
    }
}
