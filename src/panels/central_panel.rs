use crate::input::{InputEvent, InputHandler};
use crate::render::RasterContext;
use crate::surface::DrawingSurface;
use crate::texture::CanvasTexture;

/// Backdrop painted under the transparent canvas
const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::WHITE;

pub fn central_panel(
    ctx: &egui::Context,
    surface: &mut DrawingSurface<RasterContext>,
    input: &mut InputHandler,
    texture: &mut CanvasTexture,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        if !surface.is_mounted() {
            mount_canvas(surface, canvas_rect, ctx.pixels_per_point());
        }

        for event in input.process_input(ctx, &response) {
            route_event(surface, event);
        }

        painter.rect_filled(canvas_rect, 0.0, CANVAS_BACKGROUND);
        if let Some(canvas) = surface.context() {
            let texture_id = texture.update(ctx, canvas, surface.revision());
            painter.image(
                texture_id,
                egui::Rect::from_min_size(canvas_rect.min, canvas.logical_size()),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if surface.is_drawing() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}

/// Size the canvas to the area it was given, in physical pixels. An empty
/// area means there is nothing to draw on yet; try again next frame.
fn mount_canvas(
    surface: &mut DrawingSurface<RasterContext>,
    rect: egui::Rect,
    pixels_per_point: f32,
) {
    let width = (rect.width() * pixels_per_point).floor();
    let height = (rect.height() * pixels_per_point).floor();
    if width < 1.0 || height < 1.0 {
        log::debug!("Canvas area is empty, not mounting");
        return;
    }
    match RasterContext::with_scale(width as u32, height as u32, pixels_per_point) {
        Some(canvas) => surface.mount(canvas),
        None => log::warn!("Could not allocate a {}x{} canvas", width, height),
    }
}

pub fn route_event(surface: &mut DrawingSurface<RasterContext>, event: InputEvent) {
    match event {
        InputEvent::PointerDown { position } => surface.on_pointer_down(position),
        InputEvent::PointerMove { position } => surface.on_pointer_move(position),
        InputEvent::PointerUp => surface.on_pointer_up(),
    }
}
