use egui::{Color32, Pos2, Vec2};

mod path;
mod raster;
mod recording;

use path::Path;
pub use raster::RasterContext;
pub use recording::{DrawCall, RecordingContext};

/// Immediate-mode 2D drawing context, modelled on the browser canvas API.
///
/// Path construction accumulates geometry into a single current path which
/// is rendered by `stroke`/`fill`. Stroke colour, fill colour and line width
/// are context state that persists until changed.
pub trait RenderContext {
    /// A raster copy of the whole surface, taken by `snapshot`
    type Snapshot;

    /// Width of the surface in pixels
    fn width(&self) -> u32;

    /// Height of the surface in pixels
    fn height(&self) -> u32;

    /// Discard the current path and start an empty one.
    fn begin_path(&mut self);

    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: Pos2);

    /// Add a segment from the current point to `p`.
    /// With no current point this behaves like `move_to`.
    fn line_to(&mut self, p: Pos2);

    /// Close the current subpath back to its first point.
    fn close_path(&mut self);

    /// Add a closed rectangular subpath. Negative extents are allowed.
    fn rect(&mut self, origin: Pos2, size: Vec2);

    /// Add a circular arc around `center`, angles in radians.
    fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32);

    /// Render the outline of the current path.
    fn stroke(&mut self);

    /// Render the interior of the current path (nonzero winding).
    fn fill(&mut self);

    /// Fill a rectangle directly, without touching the current path.
    fn fill_rect(&mut self, origin: Pos2, size: Vec2);

    fn set_stroke_color(&mut self, color: Color32);

    fn set_fill_color(&mut self, color: Color32);

    fn set_line_width(&mut self, width: f32);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Capture the pixels of the whole surface.
    fn snapshot(&self) -> Self::Snapshot;

    /// Put previously captured pixels back at the surface origin.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}
