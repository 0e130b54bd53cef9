pub mod css_assertions;
pub mod fixtures;

use std::sync::Arc;
use tablefit::traits::{AverageCharWidthMeasurer, PageSetup};
use tablefit::{OptimizerConfig, OptimizerError, TableOptimizer};
use tablefit::style::{Margins, PageSize};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// One point per character at the fixtures' 10pt font size.
pub fn unit_measurer() -> Arc<AverageCharWidthMeasurer> {
    Arc::new(AverageCharWidthMeasurer::new(0.1))
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

pub fn test_config() -> OptimizerConfig {
    OptimizerConfig {
        font_size: "10pt".to_string(),
        ..Default::default()
    }
}

/// An empty optimizer measuring one point per character on a margin-free page.
pub fn optimizer(page_width: f64) -> Result<TableOptimizer, OptimizerError> {
    optimizer_with(page_width, &test_config())
}

pub fn optimizer_with(
    page_width: f64,
    config: &OptimizerConfig,
) -> Result<TableOptimizer, OptimizerError> {
    TableOptimizer::new(unit_measurer(), Arc::new(page(page_width)), config)
}

/// Adds a header and body rows of plain cells.
pub fn fill(optimizer: &mut TableOptimizer, header: &[&str], rows: &[&[&str]]) {
    for cell in header {
        optimizer.add_header_cell(cell, "");
    }
    for row in rows {
        optimizer.start_data_row();
        for cell in *row {
            optimizer.add_data_row_cell(cell, "");
        }
        optimizer.end_data_row();
    }
}
