use tablefit_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Table content is not renderable: {0}")]
    Layout(#[from] LayoutError),
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
