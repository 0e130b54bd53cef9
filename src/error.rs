use std::path::PathBuf;
use tablefit_layout::LayoutError;
use tablefit_render::RenderError;
use tablefit_style::StyleParseError;
use thiserror::Error;

/// Everything that can go wrong between a table document and its output.
#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("Invalid configuration value: {0}")]
    Style(#[from] StyleParseError),

    #[error("Width allocation failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read table document from '{path}': {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
