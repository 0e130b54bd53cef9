pub mod geometry;
pub mod measure;

pub use geometry::{GeometryError, PageGeometry, PageSetup};
pub use measure::{AverageCharWidthMeasurer, MeasureError, TextMeasurer};
