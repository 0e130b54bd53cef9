//! Output for sized tables.
//!
//! This crate turns allocation results and table content into text:
//! - `CssEmitter` writes one width rule per column class
//! - `MarkupRenderer` writes the table itself, tagging every cell with its column class

mod css;
mod error;
mod html;

pub use css::CssEmitter;
pub use error::RenderError;
pub use html::MarkupRenderer;

/// Class prefix used when none is configured.
pub const DEFAULT_CLASS_PREFIX: &str = "col";

/// The class shared by every cell of `column`.
pub fn column_class(prefix: &str, column: usize) -> String {
    format!("{prefix}{column}")
}
