use tablefit_traits::{GeometryError, MeasureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Table has no header cells, so it has no columns.")]
    NoColumns,
    #[error("Row {row} has {found} cells but the header defines {expected} columns.")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Fixed width given for column {column}, but the table only has {columns} columns.")]
    FixedWidthOutOfRange { column: usize, columns: usize },
    #[error(
        "Fixed column widths take {percent:.2}% of the table and leave no room for the flexible columns.",
        percent = .total * 100.0
    )]
    FixedWidthsExceedSpan { total: f64 },
    #[error("Every column has a fixed width; at least one column must be left flexible.")]
    NoFlexibleColumns,
    #[error("Table width resolves to {0:.2}pt; it must be positive.")]
    EmptySpan(f64),
    #[error("Measurement failed: {0}")]
    Measure(#[from] MeasureError),
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

pub mod allocation;
pub mod allocator;
pub mod config;
pub mod content;
pub mod fonts;
pub mod geometry;
pub mod measure;
pub mod strategy;

pub use self::allocation::{ColumnWidths, Fit, SUM_TOLERANCE};
pub use self::allocator::WidthAllocator;
pub use self::config::{AllocatorConfig, FontSettings};
pub use self::content::{Cell, Row, TableContent};
pub use self::fonts::FontMeasurer;
pub use self::geometry::SpanResolver;
pub use self::measure::{MeasurementAdapter, longest_word, strip_tags};
pub use self::strategy::Strategy;

#[cfg(test)]
mod test_utils;
