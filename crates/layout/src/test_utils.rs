use crate::LayoutError;
use crate::allocation::{ColumnWidths, SUM_TOLERANCE};
use crate::allocator::WidthAllocator;
use crate::config::AllocatorConfig;
use crate::content::TableContent;
use std::collections::HashMap;
use std::sync::Arc;
use tablefit_style::{FontStyle, Margins, PageSize};
use tablefit_traits::{MeasureError, PageSetup, TextMeasurer};

/// One point per character, whatever the font.
#[derive(Debug, Default)]
pub struct CharCountMeasurer;

impl TextMeasurer for CharCountMeasurer {
    fn measure_width(
        &self,
        text: &str,
        _font_family: &str,
        _font_style: FontStyle,
        _font_size: f64,
    ) -> Result<f64, MeasureError> {
        Ok(text.chars().count() as f64)
    }

    fn name(&self) -> &'static str {
        "char-count"
    }
}

/// Returns scripted widths for known strings and one point per character otherwise.
#[derive(Debug, Default)]
pub struct ScriptedMeasurer {
    widths: HashMap<String, f64>,
}

impl ScriptedMeasurer {
    pub fn with(mut self, text: &str, width: f64) -> Self {
        self.widths.insert(text.to_string(), width);
        self
    }
}

impl TextMeasurer for ScriptedMeasurer {
    fn measure_width(
        &self,
        text: &str,
        _font_family: &str,
        _font_style: FontStyle,
        _font_size: f64,
    ) -> Result<f64, MeasureError> {
        Ok(self
            .widths
            .get(text)
            .copied()
            .unwrap_or_else(|| text.chars().count() as f64))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// A page `width` points wide with no margins.
pub fn page(width: f64) -> PageSetup {
    PageSetup::new(
        PageSize::Custom {
            width,
            height: 800.0,
        },
        Margins::default(),
    )
}

/// An allocator over a char-count measurer and a margin-free page.
pub fn allocator(page_width: f64) -> WidthAllocator {
    allocator_with(Arc::new(CharCountMeasurer), page_width)
}

pub fn allocator_with(measurer: Arc<dyn TextMeasurer>, page_width: f64) -> WidthAllocator {
    WidthAllocator::new(measurer, Arc::new(page(page_width)), AllocatorConfig::default())
}

/// Builds a table from header texts and body rows of texts.
pub fn table(header: &[&str], rows: &[&[&str]]) -> TableContent {
    let mut content = TableContent::new();
    for cell in header {
        content.add_header_cell(*cell, "");
    }
    for row in rows {
        content.start_data_row();
        for cell in *row {
            content.add_data_row_cell(*cell, "");
        }
        content.end_data_row();
    }
    content
}

pub fn assert_sums_to_one(widths: &Result<ColumnWidths, LayoutError>) {
    let widths = widths.as_ref().expect("allocation failed");
    assert!(
        (widths.total() - 1.0).abs() <= SUM_TOLERANCE,
        "fractions {:?} sum to {}",
        widths.fractions(),
        widths.total()
    );
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
