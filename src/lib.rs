#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod render;
pub mod state;
pub mod style;
pub mod surface;
pub mod texture;
pub mod tools;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use error::{SketchError, SketchResult};
pub use export::{DEFAULT_EXPORT_NAME, DownloadTarget};
pub use input::{InputEvent, InputHandler};
pub use render::{DrawCall, RasterContext, RecordingContext, RenderContext};
pub use state::ToolSelection;
pub use style::DrawStyle;
pub use surface::DrawingSurface;
pub use tools::ActiveTool;
