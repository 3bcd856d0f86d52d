use thiserror::Error;

/// Errors surfaced by the sketch app.
///
/// Drawing itself never fails: a missing canvas or stroke origin turns the
/// call into a no-op. Only exporting and loading configuration can error.
#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Failed to encode canvas as PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write exported image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Result type for export and configuration operations
pub type SketchResult<T> = Result<T, SketchError>;
