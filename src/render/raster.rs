use egui::{Color32, Pos2, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tiny_skia::{FillRule, Paint, Pixmap, Stroke, Transform};

use super::{Path, RenderContext};
use crate::error::SketchResult;

/// Software canvas backed by a `tiny_skia::Pixmap`.
///
/// Coordinates and line widths are in canvas units. The pixmap may hold more
/// than one pixel per unit (`scale`), so a HiDPI display gets a sharp canvas
/// while pointer positions stay in points.
#[derive(Clone)]
pub struct RasterContext {
    pixmap: Pixmap,
    transform: Transform,
    scale: f32,
    path: Path,
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
}

impl RasterContext {
    /// Create a fully transparent canvas of `width` x `height` pixels.
    /// `None` if either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Self::with_scale(width, height, 1.0)
    }

    /// Like `new`, with `scale` pixels per canvas unit
    pub fn with_scale(width: u32, height: u32, scale: f32) -> Option<Self> {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            transform: Transform::from_scale(scale, scale),
            scale,
            path: Path::new(),
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: 1.0,
        })
    }

    /// Size of the canvas in canvas units
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.pixmap.width() as f32, self.pixmap.height() as f32) / self.scale
    }

    /// Premultiplied pixels, as uploaded to the GPU
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA at pixel `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// True when every pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&b| b == 0)
    }

    /// Copy of the pixels with straight alpha
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    /// Encode the current pixels as a PNG file
    pub fn encode_png(&self) -> SketchResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

fn paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

impl RenderContext for RasterContext {
    type Snapshot = Pixmap;

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Pos2) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Pos2) {
        self.path.line_to(p);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn rect(&mut self, origin: Pos2, size: Vec2) {
        self.path.rect(origin, size);
    }

    fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32) {
        self.path.arc(center, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) {
        let Some(path) = self.path.to_skia() else {
            return;
        };
        let stroke = Stroke {
            width: self.line_width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(self.stroke_color),
            &stroke,
            self.transform,
            None,
        );
    }

    fn fill(&mut self) {
        let Some(path) = self.path.to_skia() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(self.fill_color),
            FillRule::Winding,
            self.transform,
            None,
        );
    }

    fn fill_rect(&mut self, origin: Pos2, size: Vec2) {
        let area = egui::Rect::from_two_pos(origin, origin + size);
        let Some(rect) =
            tiny_skia::Rect::from_ltrb(area.min.x, area.min.y, area.max.x, area.max.y)
        else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(self.fill_color), self.transform, None);
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive and non-finite widths
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn snapshot(&self) -> Pixmap {
        self.pixmap.clone()
    }

    fn restore(&mut self, snapshot: &Pixmap) {
        if snapshot.width() == self.pixmap.width() && snapshot.height() == self.pixmap.height() {
            self.pixmap.data_mut().copy_from_slice(snapshot.data());
            return;
        }
        let paint = tiny_skia::PixmapPaint {
            blend_mode: tiny_skia::BlendMode::Source,
            ..Default::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, snapshot.as_ref(), &paint, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLANK: [u8; 4] = [0, 0, 0, 0];

    fn canvas(width: u32, height: u32) -> RasterContext {
        RasterContext::new(width, height).unwrap()
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let ctx = canvas(8, 8);
        assert!(ctx.is_blank());
        assert_eq!(ctx.width(), 8);
        assert_eq!(ctx.height(), 8);
    }

    #[test]
    fn test_zero_sized_canvas_is_refused() {
        assert!(RasterContext::new(0, 10).is_none());
        assert!(RasterContext::new(10, 0).is_none());
    }

    #[test]
    fn test_stroke_horizontal_line() {
        let mut ctx = canvas(20, 20);
        ctx.set_stroke_color(Color32::RED);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(pos2(2.0, 10.0));
        ctx.line_to(pos2(18.0, 10.0));
        ctx.stroke();

        assert_eq!(ctx.pixel(10, 9), Some(RED));
        assert_eq!(ctx.pixel(10, 10), Some(RED));
        assert_eq!(ctx.pixel(10, 5), Some(BLANK));
        // Butt ends, like the canvas default
        assert_eq!(ctx.pixel(0, 10), Some(BLANK));
    }

    #[test]
    fn test_fill_rect_with_negative_extent() {
        let mut ctx = canvas(20, 20);
        ctx.set_fill_color(Color32::RED);
        ctx.fill_rect(pos2(15.0, 15.0), vec2(-10.0, -10.0));

        assert_eq!(ctx.pixel(5, 5), Some(RED));
        assert_eq!(ctx.pixel(14, 14), Some(RED));
        assert_eq!(ctx.pixel(15, 15), Some(BLANK));
        assert_eq!(ctx.pixel(4, 4), Some(BLANK));
    }

    #[test]
    fn test_fill_triangle() {
        let mut ctx = canvas(40, 40);
        ctx.set_fill_color(Color32::RED);
        ctx.begin_path();
        ctx.move_to(pos2(20.0, 5.0));
        ctx.line_to(pos2(35.0, 35.0));
        ctx.line_to(pos2(5.0, 35.0));
        ctx.close_path();
        ctx.fill();

        assert_eq!(ctx.pixel(20, 30), Some(RED));
        assert_eq!(ctx.pixel(2, 2), Some(BLANK));
        assert_eq!(ctx.pixel(36, 10), Some(BLANK));
    }

    #[test]
    fn test_scaled_canvas_draws_in_canvas_units() {
        let mut ctx = RasterContext::with_scale(40, 40, 2.0).unwrap();
        assert_eq!(ctx.logical_size(), vec2(20.0, 20.0));

        ctx.set_fill_color(Color32::RED);
        ctx.fill_rect(pos2(5.0, 5.0), vec2(5.0, 5.0));

        assert_eq!(ctx.pixel(10, 10), Some(RED));
        assert_eq!(ctx.pixel(19, 19), Some(RED));
        assert_eq!(ctx.pixel(20, 20), Some(BLANK));
        assert_eq!(ctx.pixel(9, 9), Some(BLANK));
    }

    #[test]
    fn test_snapshot_restore_discards_later_drawing() {
        let mut ctx = canvas(10, 10);
        let snapshot = ctx.snapshot();
        ctx.set_fill_color(Color32::RED);
        ctx.fill_rect(pos2(0.0, 0.0), vec2(10.0, 10.0));
        assert!(!ctx.is_blank());

        ctx.restore(&snapshot);
        assert!(ctx.is_blank());
    }

    #[test]
    fn test_clear() {
        let mut ctx = canvas(10, 10);
        ctx.set_fill_color(Color32::GREEN);
        ctx.fill_rect(pos2(2.0, 2.0), vec2(4.0, 4.0));
        ctx.clear();
        assert!(ctx.is_blank());
    }

    #[test]
    fn test_encode_png_round_trips_pixels() {
        let mut ctx = canvas(6, 4);
        ctx.set_fill_color(Color32::RED);
        ctx.fill_rect(pos2(0.0, 0.0), vec2(3.0, 4.0));

        let bytes = ctx.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, ctx.to_image());
        assert_eq!(decoded.get_pixel(1, 1).0, RED);
        assert_eq!(decoded.get_pixel(5, 1).0, BLANK);
    }
}
