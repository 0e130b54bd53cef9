//! PageGeometry trait for abstracting page dimensions and length conversion.
//!
//! Width allocation needs to know how much horizontal space a table may use.
//! The page provider reports the page width and margins and converts
//! CSS-style lengths into points, either against a reference width or on
//! their own.

use std::fmt::Debug;
use tablefit_style::{Dimension, Margins, PageLayout, PageSize};
use thiserror::Error;

/// Error type for length conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Length '{0}' is relative and cannot be converted without a reference width")]
    RelativeLength(Dimension),

    #[error("Length '{0}' is negative")]
    NegativeLength(Dimension),
}

/// A source of page measurements.
///
/// All values are in points.
///
/// # Implementations
///
/// - `PageSetup`: a fixed page size with fixed margins (always available)
pub trait PageGeometry: Send + Sync + Debug {
    /// Page margins.
    fn margins(&self) -> Margins;

    /// Full page width, margins included.
    fn page_width(&self) -> f64;

    /// Converts `length` into points, resolving percentages and `auto` against `reference_width`.
    fn convert_length(
        &self,
        length: &Dimension,
        reference_width: f64,
    ) -> Result<f64, GeometryError> {
        let points = match *length {
            Dimension::Pt(v) => v,
            Dimension::Percent(p) => reference_width * p / 100.0,
            Dimension::Auto => reference_width,
        };
        if points < 0.0 {
            return Err(GeometryError::NegativeLength(*length));
        }
        Ok(points)
    }

    /// Converts a fixed length into points, independent of any reference width.
    fn convert_length_absolute(&self, length: &Dimension) -> Result<f64, GeometryError> {
        match *length {
            Dimension::Pt(v) if v < 0.0 => Err(GeometryError::NegativeLength(*length)),
            Dimension::Pt(v) => Ok(v),
            _ => Err(GeometryError::RelativeLength(*length)),
        }
    }
}

/// A page of a known size with known margins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageSetup {
    size: PageSize,
    margins: Margins,
}

impl PageSetup {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }
}

impl From<PageLayout> for PageSetup {
    fn from(layout: PageLayout) -> Self {
        Self::new(layout.size, layout.margins.unwrap_or_default())
    }
}

impl PageGeometry for PageSetup {
    fn margins(&self) -> Margins {
        self.margins
    }

    fn page_width(&self) -> f64 {
        self.size.width_pt()
    }
}
