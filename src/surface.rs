use egui::Pos2;

use crate::error::SketchResult;
use crate::export::{DEFAULT_EXPORT_NAME, DownloadTarget};
use crate::render::{RasterContext, RenderContext};
use crate::state::ToolSelection;
use crate::tools::StrokeInput;

/// Canvas state plus the pointer-driven draw loop.
///
/// A stroke runs from `on_pointer_down` to `on_pointer_up`. Every move in
/// between restores the pixels captured at pointer-down and redraws the
/// active tool, so shape previews never pile up. Whatever was drawn last
/// stays on the canvas when the stroke ends.
///
/// Every operation is a silent no-op while no context is mounted.
pub struct DrawingSurface<C: RenderContext> {
    ctx: Option<C>,
    selection: ToolSelection,
    is_drawing: bool,
    origin: Option<Pos2>,
    snapshot: Option<C::Snapshot>,
    export_name: String,
    /// Bumped on every pixel change
    revision: u64,
}

impl<C: RenderContext> DrawingSurface<C> {
    /// A surface with no drawing context yet
    pub fn new(selection: ToolSelection) -> Self {
        Self {
            ctx: None,
            selection,
            is_drawing: false,
            origin: None,
            snapshot: None,
            export_name: DEFAULT_EXPORT_NAME.to_owned(),
            revision: 0,
        }
    }

    pub fn with_export_name(mut self, name: impl Into<String>) -> Self {
        self.export_name = name.into();
        self
    }

    /// Attach a drawing context. Any previous context and stroke are dropped.
    pub fn mount(&mut self, ctx: C) {
        log::info!("Canvas mounted at {}x{}", ctx.width(), ctx.height());
        self.ctx = Some(ctx);
        self.reset_stroke();
        self.revision += 1;
    }

    /// Detach the drawing context; later events are ignored.
    pub fn unmount(&mut self) -> Option<C> {
        self.reset_stroke();
        let ctx = self.ctx.take();
        if ctx.is_some() {
            log::info!("Canvas unmounted");
            self.revision += 1;
        }
        ctx
    }

    fn reset_stroke(&mut self) {
        self.is_drawing = false;
        self.origin = None;
        self.snapshot = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.ctx.is_some()
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Pointer-down position of the current (or last) stroke
    pub fn origin(&self) -> Option<Pos2> {
        self.origin
    }

    pub fn context(&self) -> Option<&C> {
        self.ctx.as_ref()
    }

    pub fn selection(&self) -> &ToolSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut ToolSelection {
        &mut self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Begin a stroke at `pos`.
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };

        ctx.begin_path();
        self.snapshot = Some(ctx.snapshot());
        self.origin = Some(pos);
        self.is_drawing = true;
        log::debug!("Stroke started at {:?} with {}", pos, self.selection.tool);
    }

    /// Redraw the active tool for the pointer at `pos`.
    ///
    /// Every tool restores the stroke-start snapshot first. Brush and eraser
    /// then stroke their whole running path again, so one move costs time
    /// linear in the stroke length. Stroking only the newest segment would
    /// blend the anti-aliased joins twice and leave darker seams.
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if !self.is_drawing {
            return;
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };

        if let Some(snapshot) = &self.snapshot {
            ctx.restore(snapshot);
        }

        let color = self.selection.effective_stroke_color();
        ctx.set_stroke_color(color);
        ctx.set_fill_color(color);
        ctx.set_line_width(self.selection.style.stroke_width() as f32);

        let input = StrokeInput {
            origin: self.origin,
            pos,
            filled: self.selection.style.filled,
        };
        (self.selection.tool.draw_op::<C>())(ctx, &input);
        self.revision += 1;
    }

    /// End the stroke. Origin and snapshot stay until the next pointer-down.
    pub fn on_pointer_up(&mut self) {
        if self.is_drawing {
            log::debug!("Stroke finished");
        }
        self.is_drawing = false;
    }

    /// Erase the whole canvas.
    pub fn clear(&mut self) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };
        ctx.clear();
        self.revision += 1;
        log::info!("Canvas cleared");
    }
}

impl DrawingSurface<RasterContext> {
    /// Encode the canvas as PNG and hand it to `target`.
    ///
    /// Returns `Ok(false)` without touching `target` when no canvas is mounted.
    pub fn export_image(&self, target: &mut dyn DownloadTarget) -> SketchResult<bool> {
        let Some(ctx) = self.ctx.as_ref() else {
            log::debug!("Export skipped: no canvas");
            return Ok(false);
        };
        let bytes = ctx.encode_png()?;
        target.deliver(&self.export_name, &bytes)?;
        Ok(true)
    }
}

impl<C: RenderContext> Default for DrawingSurface<C> {
    fn default() -> Self {
        Self::new(ToolSelection::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingContext};
    use crate::tools::ActiveTool;
    use egui::{Color32, pos2};

    fn mounted(tool: ActiveTool) -> DrawingSurface<RecordingContext> {
        let mut surface = DrawingSurface::default();
        surface.selection_mut().select_tool(tool);
        surface.mount(RecordingContext::new(200, 200));
        surface
    }

    #[test]
    fn test_unmounted_surface_ignores_events() {
        let mut surface: DrawingSurface<RecordingContext> = DrawingSurface::default();
        surface.on_pointer_down(pos2(1.0, 1.0));
        surface.on_pointer_move(pos2(2.0, 2.0));
        surface.clear();
        assert!(!surface.is_drawing());
        assert_eq!(surface.origin(), None);
        assert_eq!(surface.revision(), 0);
    }

    #[test]
    fn test_pointer_down_starts_stroke() {
        let mut surface = mounted(ActiveTool::Brush);
        surface.on_pointer_down(pos2(0.0, 0.0));
        assert!(surface.is_drawing());
        assert_eq!(surface.origin(), Some(Pos2::ZERO));
        assert_eq!(surface.context().unwrap().calls(), &[DrawCall::BeginPath]);
    }

    #[test]
    fn test_move_restores_snapshot_before_drawing() {
        let mut surface = mounted(ActiveTool::Rectangle);
        surface.on_pointer_down(pos2(10.0, 10.0));
        surface.on_pointer_move(pos2(20.0, 20.0));
        surface.on_pointer_move(pos2(30.0, 30.0));

        let ctx = surface.context().unwrap();
        let restores = ctx
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Restore { .. }))
            .count();
        assert_eq!(restores, 2);
        assert!(ctx.visible_calls().contains(&DrawCall::Rect {
            origin: pos2(10.0, 10.0),
            size: egui::vec2(20.0, 20.0)
        }));
        assert!(!ctx.visible_calls().contains(&DrawCall::Rect {
            origin: pos2(10.0, 10.0),
            size: egui::vec2(10.0, 10.0)
        }));
    }

    #[test]
    fn test_move_after_up_is_ignored() {
        let mut surface = mounted(ActiveTool::Circle);
        surface.on_pointer_down(pos2(10.0, 10.0));
        surface.on_pointer_up();
        let revision = surface.revision();
        let calls = surface.context().unwrap().calls().len();

        surface.on_pointer_move(pos2(50.0, 50.0));
        assert_eq!(surface.revision(), revision);
        assert_eq!(surface.context().unwrap().calls().len(), calls);
        // Origin is stale but kept
        assert_eq!(surface.origin(), Some(pos2(10.0, 10.0)));
    }

    #[test]
    fn test_eraser_strokes_white() {
        let mut surface = mounted(ActiveTool::Eraser);
        surface.selection_mut().select_color(Color32::RED);
        surface.selection_mut().style.set_stroke_width(12);
        surface.on_pointer_down(pos2(5.0, 5.0));
        surface.on_pointer_move(pos2(6.0, 6.0));

        let last = surface.context().unwrap().calls().last().cloned();
        assert_eq!(
            last,
            Some(DrawCall::Stroke {
                color: Color32::WHITE,
                width: 12.0
            })
        );
    }

    #[test]
    fn test_unmount_drops_stroke_state() {
        let mut surface = mounted(ActiveTool::Brush);
        surface.on_pointer_down(pos2(3.0, 3.0));
        assert!(surface.unmount().is_some());
        assert!(!surface.is_mounted());
        assert!(!surface.is_drawing());
        assert_eq!(surface.origin(), None);
        assert!(surface.unmount().is_none());
    }
}
