use egui::{Color32, Pos2, Vec2};

use super::RenderContext;

/// One recorded call on a `RecordingContext`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    ClosePath,
    Rect { origin: Pos2, size: Vec2 },
    Arc { center: Pos2, radius: f32, start_angle: f32, end_angle: f32 },
    /// Stroke with the colour and width in effect at the time of the call
    Stroke { color: Color32, width: f32 },
    Fill { color: Color32 },
    FillRect { origin: Pos2, size: Vec2, color: Color32 },
    Clear,
    /// Restore of the snapshot taken when `len` calls had been recorded
    Restore { len: usize },
}

/// Headless context that keeps a display list instead of pixels.
///
/// Snapshots are positions in the call list; restoring one truncates the
/// pixel-affecting history back to that point, so `visible_calls` always
/// describes what would currently be on screen.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    visible: Vec<DrawCall>,
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
}

impl RecordingContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            visible: Vec::new(),
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: 1.0,
        }
    }

    /// Every call made, in order
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls that still contribute to the surface after clears and restores
    pub fn visible_calls(&self) -> &[DrawCall] {
        &self.visible
    }

    /// Calls made after the most recent `Restore`
    pub fn calls_since_restore(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Restore { .. }))
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    fn record(&mut self, call: DrawCall) {
        self.calls.push(call.clone());
        self.visible.push(call);
    }
}

impl RenderContext for RecordingContext {
    /// Length of the visible display list at capture time
    type Snapshot = usize;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.record(DrawCall::BeginPath);
    }

    fn move_to(&mut self, p: Pos2) {
        self.record(DrawCall::MoveTo(p));
    }

    fn line_to(&mut self, p: Pos2) {
        self.record(DrawCall::LineTo(p));
    }

    fn close_path(&mut self) {
        self.record(DrawCall::ClosePath);
    }

    fn rect(&mut self, origin: Pos2, size: Vec2) {
        self.record(DrawCall::Rect { origin, size });
    }

    fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32) {
        self.record(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.record(DrawCall::Stroke {
            color: self.stroke_color,
            width: self.line_width,
        });
    }

    fn fill(&mut self) {
        self.record(DrawCall::Fill {
            color: self.fill_color,
        });
    }

    fn fill_rect(&mut self, origin: Pos2, size: Vec2) {
        self.record(DrawCall::FillRect {
            origin,
            size,
            color: self.fill_color,
        });
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
        self.visible.clear();
    }

    fn snapshot(&self) -> usize {
        self.visible.len()
    }

    fn restore(&mut self, snapshot: &usize) {
        self.calls.push(DrawCall::Restore { len: *snapshot });
        self.visible.truncate(*snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_restore_truncates_visible_calls() {
        let mut ctx = RecordingContext::new(100, 100);
        ctx.begin_path();
        let snapshot = ctx.snapshot();
        ctx.line_to(pos2(1.0, 1.0));
        ctx.stroke();

        ctx.restore(&snapshot);
        assert_eq!(ctx.visible_calls(), &[DrawCall::BeginPath]);
        assert_eq!(ctx.calls().len(), 4);
        assert!(ctx.calls_since_restore().is_empty());
    }

    #[test]
    fn test_stroke_records_current_style() {
        let mut ctx = RecordingContext::new(100, 100);
        ctx.set_stroke_color(Color32::RED);
        ctx.set_line_width(7.0);
        ctx.set_line_width(0.0);
        ctx.stroke();
        assert_eq!(
            ctx.calls(),
            &[DrawCall::Stroke {
                color: Color32::RED,
                width: 7.0
            }]
        );
    }
}
