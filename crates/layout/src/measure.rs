//! Measurement adapter: plain-text widths under the configured font.

use crate::LayoutError;
use crate::config::FontSettings;
use regex::Regex;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use tablefit_traits::TextMeasurer;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("BUG: invalid TAG_RE regex literal"));

static WORD_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s,.?]+").expect("BUG: invalid WORD_SEPARATOR_RE regex literal")
});

/// Removes markup tags, leaving the text between them.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(text, "")
}

/// Returns the longest token of `text` after stripping markup.
///
/// Tokens are separated by whitespace, commas, full stops and question marks.
/// Length is counted in characters; the first of equally long tokens wins.
pub fn longest_word(text: &str) -> String {
    let plain = strip_tags(text);
    WORD_SEPARATOR_RE
        .split(&plain)
        .fold((0, ""), |(best_len, best), word| {
            let len = word.chars().count();
            if len > best_len { (len, word) } else { (best_len, best) }
        })
        .1
        .to_string()
}

/// Wraps a measurement engine with the configured font.
#[derive(Debug, Clone)]
pub struct MeasurementAdapter {
    engine: Arc<dyn TextMeasurer>,
    font: FontSettings,
}

impl MeasurementAdapter {
    pub fn new(engine: Arc<dyn TextMeasurer>, font: FontSettings) -> Self {
        Self { engine, font }
    }

    pub fn font(&self) -> &FontSettings {
        &self.font
    }

    /// Width of `text` in points, with markup removed first.
    ///
    /// Empty text measures 0 without consulting the engine.
    pub fn measure(&self, text: &str) -> Result<f64, LayoutError> {
        let plain = strip_tags(text);
        if plain.is_empty() {
            return Ok(0.0);
        }
        let width = self.engine.measure_width(
            &plain,
            &self.font.family,
            self.font.style,
            self.font.size,
        )?;
        log::trace!("{} measured {:?} at {:.3}pt", self.engine.name(), plain, width);
        Ok(width.max(0.0))
    }

    /// Width of `pad` followed by `text`.
    pub fn measure_padded(&self, pad: &str, text: &str) -> Result<f64, LayoutError> {
        self.measure(&format!("{pad}{text}"))
    }
}
