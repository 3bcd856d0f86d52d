use crate::config::SketchConfig;
use crate::export::DownloadTarget;
use crate::input::InputHandler;
use crate::panels::{PanelAction, central_panel, tools_panel};
use crate::render::RasterContext;
use crate::state::ToolSelection;
use crate::surface::DrawingSurface;
use crate::texture::CanvasTexture;

/// Storage key for the persisted tool selection
const SELECTION_KEY: &str = "tool_selection";

pub struct SketchApp {
    surface: DrawingSurface<RasterContext>,
    input: InputHandler,
    texture: CanvasTexture,
    downloads: Box<dyn DownloadTarget>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        // Restore the toolbar from the previous run, if any
        let selection = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSelection>(storage, SELECTION_KEY))
            .unwrap_or_else(|| config.initial_selection());

        Self::with_downloads(selection, &config, default_downloads(&config))
    }

    pub fn with_downloads(
        selection: ToolSelection,
        config: &SketchConfig,
        downloads: Box<dyn DownloadTarget>,
    ) -> Self {
        Self {
            surface: DrawingSurface::new(selection)
                .with_export_name(config.export_file_name.clone()),
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
            downloads,
        }
    }

    pub fn surface(&self) -> &DrawingSurface<RasterContext> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface<RasterContext> {
        &mut self.surface
    }

    pub fn apply_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Clear => self.surface.clear(),
            PanelAction::Export => match self.surface.export_image(self.downloads.as_mut()) {
                Ok(true) => {}
                Ok(false) => log::warn!("Nothing to export: canvas is not ready"),
                Err(err) => log::error!("Export failed: {}", err),
            },
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_downloads(config: &SketchConfig) -> Box<dyn DownloadTarget> {
    Box::new(crate::export::FileDownload::new(&config.export_dir))
}

#[cfg(target_arch = "wasm32")]
fn default_downloads(_config: &SketchConfig) -> Box<dyn DownloadTarget> {
    Box::new(crate::export::BrowserDownload)
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SELECTION_KEY, self.surface.selection());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = tools_panel(self.surface.selection_mut(), ctx) {
            self.apply_action(action);
        }

        central_panel(ctx, &mut self.surface, &mut self.input, &mut self.texture);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.surface.unmount();
        self.texture.release();
    }
}
