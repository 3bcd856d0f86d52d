use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::SketchResult;
use crate::export::DEFAULT_EXPORT_NAME;
use crate::state::ToolSelection;
use crate::style::DrawStyle;
use crate::tools::ActiveTool;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "sketch.json";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "EFRAME_SKETCH_CONFIG";

/// Startup settings for the sketch app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Name given to exported PNG files
    pub export_file_name: String,
    /// Directory exports are written to on native builds
    pub export_dir: String,
    /// Initial stroke colour as `[r, g, b]`
    pub default_color: [u8; 3],
    pub default_stroke_width: u32,
    pub default_tool: ActiveTool,
    /// Initial native window size in points
    pub window_size: [f32; 2],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            export_file_name: DEFAULT_EXPORT_NAME.to_owned(),
            export_dir: ".".to_owned(),
            default_color: [0, 0, 0],
            default_stroke_width: 2,
            default_tool: ActiveTool::Brush,
            window_size: [1000.0, 700.0],
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tool selection used when nothing was persisted from a previous run
    pub fn initial_selection(&self) -> ToolSelection {
        let [r, g, b] = self.default_color;
        ToolSelection::new(
            self.default_tool,
            DrawStyle::new(Color32::from_rgb(r, g, b), self.default_stroke_width, false),
        )
    }

    /// Load `sketch.json` (or the file named by `EFRAME_SKETCH_CONFIG`).
    ///
    /// A missing file gives the defaults; an unreadable or malformed one is
    /// logged and also gives the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(CONFIG_FILE));

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    /// `Ok(None)` when the file does not exist
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> SketchResult<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
