//! JSON configuration: optimizer settings and whole table documents.

use crate::error::OptimizerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tablefit_layout::{AllocatorConfig, Cell, FontSettings, Strategy, TableContent};
use tablefit_render::DEFAULT_CLASS_PREFIX;
use tablefit_style::{FontStyle, PageLayout};
use tablefit_traits::PageSetup;

fn default_font_family() -> String {
    FontSettings::DEFAULT_FAMILY.to_string()
}

fn default_font_size() -> String {
    "12pt".to_string()
}

fn default_min_percent() -> f64 {
    AllocatorConfig::DEFAULT_MIN_PERCENT
}

fn default_column_class_prefix() -> String {
    DEFAULT_CLASS_PREFIX.to_string()
}

/// Settings for a `TableOptimizer`.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// A CSS length such as `"10pt"` or `"3.5mm"`.
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default)]
    pub font_style: FontStyle,
    /// Smallest column share in percent for the weighted strategy.
    #[serde(default = "default_min_percent")]
    pub min_percent: f64,
    #[serde(default = "default_column_class_prefix")]
    pub column_class_prefix: String,
    #[serde(default)]
    pub header_classes_on_cells: bool,
    #[serde(default)]
    pub page: PageLayout,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_style: FontStyle::default(),
            min_percent: default_min_percent(),
            column_class_prefix: default_column_class_prefix(),
            header_classes_on_cells: false,
            page: PageLayout::default(),
        }
    }
}

impl OptimizerConfig {
    /// The measurement font, with its size converted to points.
    pub fn font(&self) -> Result<FontSettings, OptimizerError> {
        Ok(FontSettings::parse(&self.font_family, &self.font_size)?.with_style(self.font_style))
    }

    pub fn allocator_config(&self) -> Result<AllocatorConfig, OptimizerError> {
        Ok(AllocatorConfig {
            font: self.font()?,
            min_percent: self.min_percent,
        })
    }

    pub fn page_setup(&self) -> PageSetup {
        PageSetup::from(self.page)
    }
}

/// A table with its configuration and strategy, as read by the CLI.
///
/// ```json
/// {
///   "config": { "fontSize": "10pt", "page": { "size": "Letter", "margins": "36pt" } },
///   "strategy": { "kind": "minimum", "tableWidth": "100%" },
///   "header": ["Item", { "content": "Amount", "class": "num" }],
///   "rows": [["Consulting", { "content": "1,200.00", "class": "num" }]]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDocument {
    #[serde(default)]
    pub config: OptimizerConfig,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub header: Vec<Cell>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl TableDocument {
    pub fn from_json(json: &str) -> Result<Self, OptimizerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OptimizerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| OptimizerError::Document {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The document's cells as a content store.
    pub fn content(&self) -> TableContent {
        let mut content = TableContent::new();
        for cell in &self.header {
            content.add_header_cell(cell.content.as_str(), cell.class.as_str());
        }
        for row in &self.rows {
            content.push_row(row.iter().cloned());
        }
        content
    }
}
