use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::render::RasterContext;

/// GPU copy of the canvas pixels, re-uploaded only when the surface changes
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    /// Surface revision the texture was last uploaded at
    uploaded_revision: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `revision` has not been uploaded yet
    pub fn is_stale(&self, revision: u64) -> bool {
        self.uploaded_revision != Some(revision)
    }

    /// Upload the canvas if it changed since the last call and return the texture
    pub fn update(&mut self, ctx: &Context, canvas: &RasterContext, revision: u64) -> TextureId {
        if let (Some(handle), false) = (&self.handle, self.is_stale(revision)) {
            return handle.id();
        }

        let image = to_color_image(canvas);
        let handle = match self.handle.take() {
            Some(mut handle) if handle.size() == image.size => {
                handle.set(image, TextureOptions::NEAREST);
                handle
            }
            _ => ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST),
        };
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded_revision = Some(revision);
        id
    }

    /// Drop the GPU texture, e.g. after the canvas was unmounted
    pub fn release(&mut self) {
        self.handle = None;
        self.uploaded_revision = None;
    }
}

pub fn to_color_image(canvas: &RasterContext) -> ColorImage {
    let pixmap = canvas.pixmap();
    let size = [pixmap.width() as usize, pixmap.height() as usize];
    ColorImage::from_rgba_premultiplied(size, pixmap.data())
}
