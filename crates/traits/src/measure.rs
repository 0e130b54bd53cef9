//! TextMeasurer trait for abstracting the text measurement engine.
//!
//! Width allocation only ever asks one question of text: how wide is this
//! plain string when set in a given font. Real engines shape the string with
//! font data; tests substitute deterministic fakes.

use std::fmt::Debug;
use tablefit_style::FontStyle;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Error type for text measurement.
#[derive(Error, Debug, Clone)]
pub enum MeasureError {
    #[error("Font not found: {family} ({style:?})")]
    FontNotFound { family: String, style: FontStyle },

    #[error("Invalid font data for '{family}': {message}")]
    InvalidFontData { family: String, message: String },

    #[error("Measurement failed: {0}")]
    Failed(String),
}

/// A text measurement engine.
///
/// # Implementations
///
/// - `AverageCharWidthMeasurer`: a font-agnostic estimate (always available)
/// - `FontMeasurer` in `tablefit-layout`: shapes text with real font data
pub trait TextMeasurer: Send + Sync + Debug {
    /// Returns the rendered width of `text` in points.
    ///
    /// `text` is plain text; markup has already been removed.
    fn measure_width(
        &self,
        text: &str,
        font_family: &str,
        font_style: FontStyle,
        font_size: f64,
    ) -> Result<f64, MeasureError>;

    /// Returns a human-readable name for this measurer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Estimates widths as `display columns × ratio × font size`.
///
/// Wide (East Asian) characters count as two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageCharWidthMeasurer {
    ratio: f64,
}

impl AverageCharWidthMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub const DEFAULT_RATIO: f64 = 0.5;

    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }
}

impl Default for AverageCharWidthMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATIO)
    }
}

impl TextMeasurer for AverageCharWidthMeasurer {
    fn measure_width(
        &self,
        text: &str,
        _font_family: &str,
        _font_style: FontStyle,
        font_size: f64,
    ) -> Result<f64, MeasureError> {
        Ok(text.width() as f64 * self.ratio * font_size)
    }

    fn name(&self) -> &'static str {
        "AverageCharWidthMeasurer"
    }
}
