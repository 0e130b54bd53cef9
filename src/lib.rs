//! Column width allocation for HTML tables headed for PDF output.
//!
//! Collect a table's cells, pick a strategy, and get back one width per
//! column as a share of the table, plus CSS rules that apply those widths
//! and the table markup that uses them.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tablefit::{OptimizerConfig, Strategy, TableOptimizer};
//! use tablefit::traits::{AverageCharWidthMeasurer, PageSetup};
//!
//! let config = OptimizerConfig::default();
//! let mut table = TableOptimizer::new(
//!     Arc::new(AverageCharWidthMeasurer::default()),
//!     Arc::new(PageSetup::from(config.page)),
//!     &config,
//! )?;
//! table.add_header_cell("Item", "");
//! table.add_header_cell("Amount", "num");
//! table.start_data_row();
//! table.add_data_row_cell("Consulting, March", "");
//! table.add_data_row_cell("1,200.00", "num");
//! table.end_data_row();
//!
//! let output = table.render(&Strategy::Weighted)?;
//! println!("{}", output.to_document());
//! # Ok::<(), tablefit::OptimizerError>(())
//! ```

pub mod config;
pub mod error;
pub mod optimizer;

pub use config::{OptimizerConfig, TableDocument};
pub use error::OptimizerError;
pub use optimizer::{SizedColumns, TableOptimizer, TableOutput};

pub use tablefit_layout::{Cell, ColumnWidths, Fit, Strategy, TableContent};

pub use tablefit_layout as layout;
pub use tablefit_render as render;
pub use tablefit_style as style;
pub use tablefit_traits as traits;
